//! # Financial Formulas
//!
//! Investment appraisal formulas: benefit-cost ratio and net present value.
//!
//! ## Notation
//!
//! - `B` = Total benefits (monetary)
//! - `C` = Total costs (monetary)
//! - `I₀` = Initial investment
//! - `CFᵢ` = Cash flow in period i (1-based)
//! - `r` = Discount rate per period, in percent

use crate::equations::round2;
use crate::errors::{ensure_finite, CalcError, CalcResult};

/// Benefit-cost ratio.
///
/// # Formula
/// - BCR = B / C, rounded to 2 decimals
/// - BCR = 0 when C = 0 (no ratio computable)
///
/// Negative benefits or costs are computed as given.
///
/// ```rust
/// use calc_core::equations::bcr;
///
/// assert_eq!(bcr(150_000.0, 100_000.0), 1.5);
/// assert_eq!(bcr(10.0, 0.0), 0.0);
/// ```
#[inline]
pub fn bcr(benefits: f64, costs: f64) -> f64 {
    if costs == 0.0 {
        return 0.0;
    }
    round2(benefits / costs)
}

/// Discount factor (1 + r/100)^period.
///
/// Unrounded; `period` is 1-based in NPV.
#[inline]
pub fn discount_factor(discount_rate_percent: f64, period: u32) -> f64 {
    (1.0 + discount_rate_percent / 100.0).powi(period as i32)
}

/// Present value of a single cash flow received at the end of `period`.
///
/// # Formula
/// - PV = CF / (1 + r/100)^period
///
/// # Errors
/// `DomainError` when `1 + r/100 == 0` (r = -100%).
pub fn present_value(cash_flow: f64, discount_rate_percent: f64, period: u32) -> CalcResult<f64> {
    check_rate(discount_rate_percent)?;
    Ok(cash_flow / discount_factor(discount_rate_percent, period))
}

/// Net present value of an ordered cash-flow series.
///
/// # Formula
/// - NPV = -I₀ + Σᵢ CFᵢ / (1 + r/100)^i, for i = 1..n, rounded to 2 decimals
///
/// The position of each flow in `cash_flows` is its period; an empty series
/// yields `-I₀`.
///
/// # Errors
/// - `DomainError` when the rate is -100% (every factor is zero)
/// - `InvalidInput` for non-finite inputs
///
/// ```rust
/// use calc_core::equations::npv;
///
/// let value = npv(1000.0, &[500.0, 500.0, 500.0], 10.0).unwrap();
/// assert_eq!(value, 243.43);
/// ```
pub fn npv(initial_investment: f64, cash_flows: &[f64], discount_rate_percent: f64) -> CalcResult<f64> {
    ensure_finite("initial_investment", initial_investment)?;
    ensure_finite("discount_rate_percent", discount_rate_percent)?;
    for (i, cf) in cash_flows.iter().enumerate() {
        ensure_finite(&format!("cash_flows[{}]", i), *cf)?;
    }
    check_rate(discount_rate_percent)?;

    let discounted: f64 = cash_flows
        .iter()
        .zip(1u32..)
        .map(|(cf, period)| cf / discount_factor(discount_rate_percent, period))
        .sum();

    let value = round2(-initial_investment + discounted);
    if !value.is_finite() {
        return Err(CalcError::domain_error(
            "NPV",
            "discounted cash flows overflow; discount rate is too close to -100%",
        ));
    }
    Ok(value)
}

fn check_rate(discount_rate_percent: f64) -> CalcResult<()> {
    if 1.0 + discount_rate_percent / 100.0 == 0.0 {
        return Err(CalcError::domain_error(
            "NPV",
            "discount rate of -100% makes every discount factor zero",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcr_basic() {
        assert_eq!(bcr(200.0, 100.0), 2.0);
        assert_eq!(bcr(100.0, 300.0), 0.33);
        assert_eq!(bcr(100.0, 100.0), 1.0);
    }

    #[test]
    fn test_bcr_rounds_exact_value() {
        // 199 / 200 = 0.995 is stored as 0.99499…
        assert_eq!(bcr(199.0, 200.0), 0.99);
    }

    #[test]
    fn test_huge_finite_inputs_stay_finite() {
        assert_eq!(bcr(1e307, 1.0), 1e307);
        assert_eq!(npv(-1e307, &[], 0.0).unwrap(), 1e307);
    }

    #[test]
    fn test_bcr_zero_costs() {
        assert_eq!(bcr(5000.0, 0.0), 0.0);
        assert_eq!(bcr(-5000.0, 0.0), 0.0);
    }

    #[test]
    fn test_bcr_negative_inputs_pass_through() {
        assert_eq!(bcr(-100.0, 50.0), -2.0);
        assert_eq!(bcr(-100.0, -50.0), 2.0);
    }

    #[test]
    fn test_npv_textbook_example() {
        // 500/1.1 + 500/1.21 + 500/1.331 = 1243.43
        let value = npv(1000.0, &[500.0, 500.0, 500.0], 10.0).unwrap();
        assert_eq!(value, 243.43);
    }

    #[test]
    fn test_npv_period_order_matters() {
        let early = npv(1000.0, &[900.0, 100.0], 10.0).unwrap();
        let late = npv(1000.0, &[100.0, 900.0], 10.0).unwrap();
        assert!(early > late);
    }

    #[test]
    fn test_npv_empty_series() {
        assert_eq!(npv(250.0, &[], 5.0).unwrap(), -250.0);
        assert_eq!(npv(0.0, &[], 5.0).unwrap(), 0.0);
    }

    #[test]
    fn test_npv_zero_rate_is_plain_sum() {
        assert_eq!(npv(100.0, &[40.0, 40.0, 40.0], 0.0).unwrap(), 20.0);
    }

    #[test]
    fn test_npv_rate_singularity() {
        let err = npv(100.0, &[50.0], -100.0).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_npv_rejects_nan() {
        let err = npv(100.0, &[f64::NAN], 5.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_present_value() {
        let pv = present_value(110.0, 10.0, 1).unwrap();
        assert!((pv - 100.0).abs() < 1e-9);
        assert!(present_value(110.0, -100.0, 1).is_err());
    }

    #[test]
    fn test_discount_factor() {
        assert!((discount_factor(10.0, 2) - 1.21).abs() < 1e-12);
        assert_eq!(discount_factor(7.0, 0), 1.0);
    }
}
