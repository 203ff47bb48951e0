//! # Quality-Control Formulas
//!
//! Tablet friability per USP <1216>: the percentage of mass a tablet sample
//! loses after tumbling in a friabilator drum.
//!
//! ## Notation
//!
//! - `W₀` = Initial sample weight (before tumbling)
//! - `W₁` = Final sample weight (after tumbling, dust removed)

use crate::equations::round2;
use crate::errors::{ensure_finite, CalcError, CalcResult};

/// Tablet friability as a percentage weight loss.
///
/// # Formula
/// - F = (W₀ - W₁) / W₀ × 100, rounded to 2 decimals
/// - F = 0 when W₀ = 0
///
/// # Errors
/// - `DomainError` when W₁ > W₀ (a sample cannot gain mass in the drum)
/// - `InvalidInput` for non-finite weights
///
/// ```rust
/// use calc_core::equations::friability;
///
/// assert_eq!(friability(100.0, 99.0).unwrap(), 1.0);
/// assert!(friability(10.0, 10.5).is_err());
/// ```
pub fn friability(initial_weight: f64, final_weight: f64) -> CalcResult<f64> {
    ensure_finite("initial_weight", initial_weight)?;
    ensure_finite("final_weight", final_weight)?;

    if initial_weight == 0.0 {
        return Ok(0.0);
    }
    if final_weight > initial_weight {
        return Err(CalcError::domain_error(
            "Friability",
            format!(
                "final weight {} exceeds initial weight {}",
                final_weight, initial_weight
            ),
        ));
    }

    let percent = round2((initial_weight - final_weight) / initial_weight * 100.0);
    if !percent.is_finite() {
        return Err(CalcError::domain_error(
            "Friability",
            "weight difference is out of range",
        ));
    }
    Ok(percent)
}

/// Absolute mass lost during the test (W₀ - W₁), unrounded.
#[inline]
pub fn weight_loss(initial_weight: f64, final_weight: f64) -> f64 {
    initial_weight - final_weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friability_overflow_is_domain_error() {
        assert!(friability(1e308, -1e308).unwrap_err().is_domain_error());
    }

    #[test]
    fn test_one_percent_loss() {
        assert_eq!(friability(100.0, 99.0).unwrap(), 1.0);
    }

    #[test]
    fn test_typical_sample() {
        // 6.5 g of tablets losing 0.0325 g → 0.5%
        assert_eq!(friability(6.5, 6.4675).unwrap(), 0.5);
    }

    #[test]
    fn test_no_loss() {
        assert_eq!(friability(6.5, 6.5).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_initial_weight() {
        assert_eq!(friability(0.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_weight_gain_is_domain_error() {
        let err = friability(6.5, 6.6).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_weight_loss() {
        assert!((weight_loss(6.5, 6.4675) - 0.0325).abs() < 1e-12);
    }
}
