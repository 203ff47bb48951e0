//! # Dosage Calculation
//!
//! Volume of a stock preparation that delivers a prescribed dose.
//!
//! ## Assumptions
//!
//! - The prescribed dose is in the same unit as the stock strength
//! - Unit labels are carried for display only; nothing is converted
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::dosage::{calculate, DosageInput};
//! use calc_core::units::{StrengthUnit, VolumeUnit};
//!
//! let input = DosageInput {
//!     label: "Paediatric amoxicillin".to_string(),
//!     stock_strength: 5.0,
//!     strength_unit: StrengthUnit::Mg,
//!     prescribed_dose: 10.0,
//!     volume: 5.0,
//!     volume_unit: VolumeUnit::Ml,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.volume_required, 10.0);
//! assert_eq!(result.volume_display(), "10.00 mL");
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{require_finite_result, require_positive};
use crate::equations;
use crate::errors::CalcResult;
use crate::formatting::{format_decimal, DEFAULT_DECIMALS};
use crate::units::{StrengthUnit, VolumeUnit};

/// Input parameters for a dosage conversion.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Paediatric amoxicillin",
///   "stock_strength": 5.0,
///   "strength_unit": "mg",
///   "prescribed_dose": 10.0,
///   "volume": 5.0,
///   "volume_unit": "mL"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DosageInput {
    /// User label for this calculation
    #[serde(default)]
    pub label: String,

    /// Amount of drug in `volume` of stock
    pub stock_strength: f64,

    /// Unit shared by stock strength and prescribed dose
    #[serde(default)]
    pub strength_unit: StrengthUnit,

    /// Dose ordered for the patient
    pub prescribed_dose: f64,

    /// Stock volume the strength refers to
    pub volume: f64,

    /// Unit of `volume` and of the answer
    #[serde(default)]
    pub volume_unit: VolumeUnit,
}

impl DosageInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("stock_strength", self.stock_strength)?;
        require_positive("prescribed_dose", self.prescribed_dose)?;
        require_positive("volume", self.volume)?;
        Ok(())
    }
}

/// Results from a dosage conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DosageResult {
    /// Volume to administer, rounded to 2 decimals
    pub volume_required: f64,

    /// Unit of `volume_required`
    pub volume_unit: VolumeUnit,

    /// Worked calculation, e.g. "(10 mg ÷ 5 mg/mL) × 5 mL = 10.00 mL"
    pub explanation: String,
}

impl DosageResult {
    /// Volume as displayed ("10.00 mL")
    pub fn volume_display(&self) -> String {
        format!("{} {}", format_decimal(self.volume_required, DEFAULT_DECIMALS), self.volume_unit)
    }
}

/// Calculate the volume to administer.
pub fn calculate(input: &DosageInput) -> CalcResult<DosageResult> {
    input.validate()?;
    tracing::debug!(label = %input.label, "calculating dosage");

    let volume_required = require_finite_result(
        "Dosage",
        equations::dosage(input.stock_strength, input.prescribed_dose, input.volume),
    )?;

    let explanation = format!(
        "({} {} ÷ {} {}) × {} {} = {} {}",
        input.prescribed_dose,
        input.strength_unit,
        input.stock_strength,
        input.strength_unit.concentration_label(input.volume_unit),
        input.volume,
        input.volume_unit,
        format_decimal(volume_required, DEFAULT_DECIMALS),
        input.volume_unit,
    );

    Ok(DosageResult {
        volume_required,
        volume_unit: input.volume_unit,
        explanation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> DosageInput {
        DosageInput {
            label: "Test Dose".to_string(),
            stock_strength: 5.0,
            strength_unit: StrengthUnit::Mg,
            prescribed_dose: 10.0,
            volume: 5.0,
            volume_unit: VolumeUnit::Ml,
        }
    }

    #[test]
    fn test_dosage() {
        let result = calculate(&test_input()).unwrap();
        assert_eq!(result.volume_required, 10.0);
        assert_eq!(result.explanation, "(10 mg ÷ 5 mg/mL) × 5 mL = 10.00 mL");
    }

    #[test]
    fn test_units_are_labels_only() {
        let mut input = test_input();
        input.strength_unit = StrengthUnit::Mcg;
        input.volume_unit = VolumeUnit::Cc;
        let result = calculate(&input).unwrap();
        assert_eq!(result.volume_required, 10.0);
        assert_eq!(result.volume_display(), "10.00 cc");
    }

    #[test]
    fn test_overflowing_volume_rejected() {
        let mut input = test_input();
        input.prescribed_dose = 1e300;
        input.stock_strength = 1e-10;
        assert!(calculate(&input).unwrap_err().is_domain_error());
    }

    #[test]
    fn test_zero_strength_rejected() {
        let mut input = test_input();
        input.stock_strength = 0.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_units_default_in_json() {
        let input: DosageInput =
            serde_json::from_str(r#"{"stock_strength": 250.0, "prescribed_dose": 125.0, "volume": 5.0}"#).unwrap();
        assert_eq!(input.strength_unit, StrengthUnit::Mg);
        assert_eq!(input.volume_unit, VolumeUnit::Ml);
        assert_eq!(calculate(&input).unwrap().volume_display(), "2.50 mL");
    }
}
