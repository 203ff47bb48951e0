//! # Calculator Equations
//!
//! This module contains every formula the calculators use. Having the
//! equations in one place enables:
//! - Easy verification against textbook/pharmacopeial references
//! - Documentation of rounding and degenerate-input conventions
//! - Consistent implementation across the form-level calculations
//!
//! ## Modules
//!
//! - [`financial`] - Benefit-cost ratio and net present value
//! - [`quality`] - Tablet friability
//! - [`inventory`] - Reorder point and economic order quantity
//! - [`clinical`] - Proportional dosage conversion
//! - [`registry`] - Formula metadata for listing and explanation
//!
//! ## Conventions
//!
//! - **Zero denominators**: return `0`, never an error
//! - **Undefined math** (negative radicand, `1 + r = 0`, weight gain): `DomainError`
//! - **Rounding**: two decimals, half away from zero; counts use ceiling
//! - **Units**: all formulas are unit-agnostic
//!
//! ## References
//!
//! - USP <1216> Tablet Friability
//! - Harris, F. W. (1913), "How Many Parts to Make at Once" (EOQ)

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

pub mod clinical;
pub mod financial;
pub mod inventory;
pub mod quality;
pub mod registry;

pub use clinical::dosage;
pub use financial::{bcr, discount_factor, npv, present_value};
pub use inventory::{eoq, reorder_point};
pub use quality::{friability, weight_loss};

pub use registry::{
    generate_formulas_markdown, Formula, FormulaCategory, FormulaMetadata, Reference, Variable,
    ALL_FORMULAS,
};

/// Round `value` to `decimals` places, halves away from zero.
///
/// Rounds the exact decimal expansion of the double, so `0.015` (stored as
/// 0.01499999…) rounds down. Magnitudes too large to carry a fractional
/// digit come back unchanged.
///
/// ```rust
/// use calc_core::equations::round_to;
///
/// assert_eq!(round_to(1.23456, 2), 1.23);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// assert_eq!(round_to(0.125, 2), 0.13);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let rounded = match Decimal::from_f64_retain(value) {
        Some(exact) => exact
            .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or(value),
        // Outside Decimal's range: tiny values round to zero, huge ones are integral
        None if value.abs() < 1.0 => 0.0,
        None => value,
    };
    // Normalize -0.0 so results compare and print as plain zero
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round to the two decimals every ratio/percentage result uses.
#[inline]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(3.14159, 4), 3.1416);
        assert_eq!(round_to(2.0, 2), 2.0);
        assert_eq!(round_to(1.5, 0), 2.0);
    }

    #[test]
    fn test_round_uses_exact_decimal_value() {
        // 0.015 is stored just below the midpoint
        assert_eq!(round2(0.015), 0.01);
        assert_eq!(round2(0.045), 0.04);
        assert_eq!(round2(0.105), 0.1);
        assert_eq!(round2(0.995), 0.99);
    }

    #[test]
    fn test_round_exact_midpoints_go_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_round_large_values_stay_finite() {
        assert_eq!(round2(1e307), 1e307);
        assert_eq!(round2(-1.7e308), -1.7e308);
        assert_eq!(round_to(1e300, 4), 1e300);
    }

    #[test]
    fn test_round_tiny_values_to_zero() {
        assert_eq!(round2(1e-300), 0.0);
        assert_eq!(round2(-1e-300), 0.0);
    }

    #[test]
    fn test_round_negative_zero() {
        let r = round2(-0.001);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }
}
