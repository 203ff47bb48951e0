//! # Clinical Formulas
//!
//! Proportional ("desired over have") dosage conversion.
//!
//! The formula is unit-agnostic: dose and stock strength must already share a
//! mass unit, and the answer comes back in the stock's volume unit.

use crate::equations::round2;

/// Volume of stock solution delivering the prescribed dose.
///
/// # Formula
/// - V_required = (Dose / Strength) × Volume, rounded to 2 decimals
/// - 0 when Strength = 0
///
/// ```rust
/// use calc_core::equations::dosage;
///
/// // 5 mg/mL stock, 10 mg prescribed, per 5 mL → 10 mL
/// assert_eq!(dosage(5.0, 10.0, 5.0), 10.0);
/// ```
#[inline]
pub fn dosage(stock_strength: f64, prescribed_dose: f64, volume: f64) -> f64 {
    if stock_strength == 0.0 {
        return 0.0;
    }
    round2((prescribed_dose / stock_strength) * volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dosage() {
        assert_eq!(dosage(5.0, 10.0, 5.0), 10.0);
        assert_eq!(dosage(250.0, 500.0, 5.0), 10.0);
    }

    #[test]
    fn test_dosage_fractional() {
        // 125 mg from 250 mg/5 mL → 2.5 mL
        assert_eq!(dosage(250.0, 125.0, 5.0), 2.5);
        // 1/3 × 1 → 0.33
        assert_eq!(dosage(3.0, 1.0, 1.0), 0.33);
    }

    #[test]
    fn test_dosage_zero_strength() {
        assert_eq!(dosage(0.0, 10.0, 5.0), 0.0);
    }
}
