//! # Inventory Formulas
//!
//! Stock procurement formulas. Both results are unit counts, so they round
//! up: ordering a fraction of a unit is not possible and rounding down would
//! under-stock.
//!
//! ## Notation
//!
//! - `d` = Average daily usage (units/day)
//! - `L` = Lead time (days)
//! - `SS` = Safety stock (units)
//! - `D` = Annual demand (units/year)
//! - `S` = Cost per order
//! - `H` = Holding cost per unit per year

use crate::errors::{ensure_finite, CalcError, CalcResult};

/// Reorder point.
///
/// # Formula
/// - ROP = ⌈d × L + SS⌉
///
/// No clamping: negative inputs propagate arithmetically.
///
/// # Errors
/// - `DomainError` when the result does not fit in an `i64`
/// - `InvalidInput` for non-finite inputs
///
/// ```rust
/// use calc_core::equations::reorder_point;
///
/// assert_eq!(reorder_point(10.0, 5.0, 20.0).unwrap(), 70);
/// assert_eq!(reorder_point(2.5, 3.0, 0.0).unwrap(), 8);
/// ```
pub fn reorder_point(average_daily_usage: f64, lead_time_days: f64, safety_stock: f64) -> CalcResult<i64> {
    ensure_finite("average_daily_usage", average_daily_usage)?;
    ensure_finite("lead_time_days", lead_time_days)?;
    ensure_finite("safety_stock", safety_stock)?;

    let units = (average_daily_usage * lead_time_days + safety_stock).ceil();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if units < i64::MIN as f64 || units >= i64::MAX as f64 {
        return Err(CalcError::domain_error(
            "ROP",
            format!("reorder point {} is outside the countable range", units),
        ));
    }
    Ok(units as i64)
}

/// Economic order quantity (Harris/Wilson model).
///
/// # Formula
/// - EOQ = ⌈√(2DS / H)⌉
/// - EOQ = 0 when H = 0
///
/// # Errors
/// - `DomainError` when 2DS / H is negative
/// - `InvalidInput` for non-finite inputs
///
/// ```rust
/// use calc_core::equations::eoq;
///
/// assert_eq!(eoq(1000.0, 50.0, 2.0).unwrap(), 224);
/// assert!(eoq(-1000.0, 50.0, 2.0).is_err());
/// ```
pub fn eoq(annual_demand: f64, order_cost: f64, holding_cost: f64) -> CalcResult<u64> {
    ensure_finite("annual_demand", annual_demand)?;
    ensure_finite("order_cost", order_cost)?;
    ensure_finite("holding_cost", holding_cost)?;

    if holding_cost == 0.0 {
        return Ok(0);
    }

    let radicand = (2.0 * annual_demand * order_cost) / holding_cost;
    if radicand < 0.0 {
        return Err(CalcError::domain_error(
            "EOQ",
            format!("2 × demand × order cost / holding cost is negative ({})", radicand),
        ));
    }

    let units = radicand.sqrt().ceil();
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range
    if units >= u64::MAX as f64 {
        return Err(CalcError::domain_error(
            "EOQ",
            format!("order quantity {} is outside the countable range", units),
        ));
    }
    Ok(units as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_point() {
        assert_eq!(reorder_point(10.0, 5.0, 20.0).unwrap(), 70);
    }

    #[test]
    fn test_reorder_point_rounds_up() {
        // 3.2 × 4 + 1 = 13.8 → 14
        assert_eq!(reorder_point(3.2, 4.0, 1.0).unwrap(), 14);
    }

    #[test]
    fn test_reorder_point_negative_propagates() {
        assert_eq!(reorder_point(10.0, 5.0, -60.0).unwrap(), -10);
    }

    #[test]
    fn test_reorder_point_out_of_range() {
        assert!(reorder_point(1e300, 1e10, 0.0).unwrap_err().is_domain_error());
        assert!(reorder_point(-1e300, 1e10, 0.0).unwrap_err().is_domain_error());
        // Product overflows to infinity
        assert!(reorder_point(1e300, 1e300, 0.0).unwrap_err().is_domain_error());
    }

    #[test]
    fn test_reorder_point_rejects_nan() {
        assert!(!reorder_point(f64::NAN, 5.0, 0.0).unwrap_err().is_domain_error());
    }

    #[test]
    fn test_eoq() {
        // √50000 = 223.6 → 224
        assert_eq!(eoq(1000.0, 50.0, 2.0).unwrap(), 224);
    }

    #[test]
    fn test_eoq_exact_square() {
        // √(2 × 200 × 25 / 1) = √10000 = 100
        assert_eq!(eoq(200.0, 25.0, 1.0).unwrap(), 100);
    }

    #[test]
    fn test_eoq_zero_holding_cost() {
        assert_eq!(eoq(1000.0, 50.0, 0.0).unwrap(), 0);
    }

    #[test]
    fn test_eoq_negative_demand() {
        let err = eoq(-1000.0, 50.0, 2.0).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_eoq_negative_pair_is_defined() {
        // Two negatives cancel under the root
        assert_eq!(eoq(-200.0, -25.0, 1.0).unwrap(), 100);
    }

    #[test]
    fn test_eoq_out_of_range() {
        assert!(eoq(1e308, 1e308, 1.0).unwrap_err().is_domain_error());
        assert!(eoq(1e40, 1e10, 1.0).unwrap_err().is_domain_error());
    }
}
