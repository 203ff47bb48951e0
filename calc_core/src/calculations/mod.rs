//! # Calculator Forms
//!
//! This module contains one calculation per calculator. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable) with `validate()`
//! - `*Result` - Calculation results with verdict/recommendation text
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! `validate()` applies the guards a form checks before showing a result
//! (positive amounts, final weight not above initial weight, ...). The pure
//! formulas in [`crate::equations`] do not enforce those.
//!
//! ## Available Calculations
//!
//! - [`bcr`] - Benefit-cost ratio
//! - [`npv`] - Net present value
//! - [`friability`] - Tablet friability
//! - [`stock`] - Reorder point and economic order quantity
//! - [`dosage`] - Dosage conversion

pub mod bcr;
pub mod dosage;
pub mod friability;
pub mod npv;
pub mod stock;

use serde::{Deserialize, Serialize};

use crate::equations::Formula;
use crate::errors::{ensure_finite, CalcError, CalcResult};

// Re-export commonly used types
pub use bcr::{BcrInput, BcrResult};
pub use dosage::{DosageInput, DosageResult};
pub use friability::{FriabilityInput, FriabilityResult};
pub use npv::{NpvInput, NpvResult};
pub use stock::{EoqInput, EoqResult, ReorderPointInput, ReorderPointResult};

/// Enum wrapper for all calculation types.
///
/// This allows handling heterogeneous calculations through one entry point
/// while maintaining type safety and clean serialization.
///
/// ```rust
/// use calc_core::calculations::{CalculationItem, CalculationOutcome};
///
/// let item: CalculationItem = serde_json::from_str(
///     r#"{"type": "Eoq", "annual_demand": 1000, "order_cost": 50, "holding_cost": 2}"#,
/// ).unwrap();
///
/// match item.evaluate().unwrap() {
///     CalculationOutcome::Eoq(result) => assert_eq!(result.eoq, 224),
///     other => panic!("unexpected outcome {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    Bcr(BcrInput),
    Npv(NpvInput),
    Friability(FriabilityInput),
    ReorderPoint(ReorderPointInput),
    Eoq(EoqInput),
    Dosage(DosageInput),
}

impl CalculationItem {
    /// Parse a tagged calculation item from JSON.
    ///
    /// Malformed JSON or an unknown `type` tag becomes `SerializationError`.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Bcr(i) => &i.label,
            CalculationItem::Npv(i) => &i.label,
            CalculationItem::Friability(i) => &i.label,
            CalculationItem::ReorderPoint(i) => &i.label,
            CalculationItem::Eoq(i) => &i.label,
            CalculationItem::Dosage(i) => &i.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        self.formula().metadata().short_name
    }

    /// Registry entry for this calculation's formula
    pub fn formula(&self) -> Formula {
        match self {
            CalculationItem::Bcr(_) => Formula::Bcr,
            CalculationItem::Npv(_) => Formula::Npv,
            CalculationItem::Friability(_) => Formula::Friability,
            CalculationItem::ReorderPoint(_) => Formula::ReorderPoint,
            CalculationItem::Eoq(_) => Formula::EconomicOrderQuantity,
            CalculationItem::Dosage(_) => Formula::Dosage,
        }
    }

    /// Validate inputs without computing
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            CalculationItem::Bcr(i) => i.validate(),
            CalculationItem::Npv(i) => i.validate(),
            CalculationItem::Friability(i) => i.validate(),
            CalculationItem::ReorderPoint(i) => i.validate(),
            CalculationItem::Eoq(i) => i.validate(),
            CalculationItem::Dosage(i) => i.validate(),
        }
    }

    /// Run the calculation for whichever calculator this item holds.
    pub fn evaluate(&self) -> CalcResult<CalculationOutcome> {
        let outcome = match self {
            CalculationItem::Bcr(i) => bcr::calculate(i).map(CalculationOutcome::Bcr),
            CalculationItem::Npv(i) => npv::calculate(i).map(CalculationOutcome::Npv),
            CalculationItem::Friability(i) => friability::calculate(i).map(CalculationOutcome::Friability),
            CalculationItem::ReorderPoint(i) => {
                stock::calculate_reorder_point(i).map(CalculationOutcome::ReorderPoint)
            }
            CalculationItem::Eoq(i) => stock::calculate_eoq(i).map(CalculationOutcome::Eoq),
            CalculationItem::Dosage(i) => dosage::calculate(i).map(CalculationOutcome::Dosage),
        };

        if let Err(ref err) = outcome {
            tracing::warn!(
                calc_type = self.calc_type(),
                label = self.label(),
                code = err.error_code(),
                "calculation rejected: {}",
                err
            );
        }
        outcome
    }
}

/// Result of [`CalculationItem::evaluate`], tagged like the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutcome {
    Bcr(BcrResult),
    Npv(NpvResult),
    Friability(FriabilityResult),
    ReorderPoint(ReorderPointResult),
    Eoq(EoqResult),
    Dosage(DosageResult),
}

impl CalculationOutcome {
    /// Verdict or recommendation text for display
    pub fn interpretation(&self) -> &str {
        match self {
            CalculationOutcome::Bcr(r) => &r.interpretation,
            CalculationOutcome::Npv(r) => &r.interpretation,
            CalculationOutcome::Friability(r) => &r.interpretation,
            CalculationOutcome::ReorderPoint(r) => &r.recommendation,
            CalculationOutcome::Eoq(r) => &r.recommendation,
            CalculationOutcome::Dosage(r) => &r.explanation,
        }
    }
}

// ============================================================================
// Shared input guards
// ============================================================================

pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    ensure_finite(field, value)
}

pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be greater than zero",
        ));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value cannot be negative",
        ));
    }
    Ok(())
}

/// Reject a formula result that overflowed to infinity.
pub(crate) fn require_finite_result(formula: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::domain_error(
            formula,
            format!("result {} is out of range for the given inputs", value),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serialization_is_tagged() {
        let item = CalculationItem::Bcr(BcrInput {
            label: "B-1".to_string(),
            benefits: 3.0,
            costs: 2.0,
        });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"Bcr\""));

        let roundtrip: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.label(), "B-1");
        assert_eq!(roundtrip.calc_type(), "BCR");
    }

    #[test]
    fn test_from_json() {
        let item = CalculationItem::from_json(r#"{"type": "Bcr", "benefits": 3, "costs": 2}"#).unwrap();
        assert_eq!(item.formula(), Formula::Bcr);

        let err = CalculationItem::from_json(r#"{"type": "Tax", "amount": 3}"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(CalculationItem::from_json("not json").is_err());
    }

    #[test]
    fn test_evaluate_dispatches() {
        let item = CalculationItem::ReorderPoint(ReorderPointInput {
            label: String::new(),
            average_daily_usage: 10.0,
            lead_time_days: 5.0,
            safety_stock: 20.0,
        });
        let outcome = item.evaluate().unwrap();
        assert!(outcome.interpretation().contains("70 units"));
    }

    #[test]
    fn test_evaluate_propagates_errors() {
        let item = CalculationItem::Friability(FriabilityInput {
            label: String::new(),
            initial_weight_g: 5.0,
            final_weight_g: 6.0,
        });
        assert!(item.validate().is_err());
        assert!(item.evaluate().is_err());
    }

    #[test]
    fn test_formula_mapping() {
        let item = CalculationItem::Eoq(EoqInput {
            label: String::new(),
            annual_demand: 1.0,
            order_cost: 1.0,
            holding_cost: 1.0,
        });
        assert_eq!(item.formula(), Formula::EconomicOrderQuantity);
        assert_eq!(item.calc_type(), "EOQ");
    }

    #[test]
    fn test_guards() {
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", f64::INFINITY).is_err());
        assert!(require_non_negative("x", 0.0).is_ok());
        assert!(require_non_negative("x", -0.5).is_err());
        assert_eq!(require_finite_result("BCR", 1.5).unwrap(), 1.5);
        assert!(require_finite_result("BCR", f64::INFINITY).unwrap_err().is_domain_error());
    }

    #[test]
    fn test_huge_totals_stay_finite() {
        let item = CalculationItem::Bcr(BcrInput {
            label: String::new(),
            benefits: 1e307,
            costs: 1.0,
        });
        match item.evaluate().unwrap() {
            CalculationOutcome::Bcr(result) => assert!(result.ratio.is_finite()),
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
