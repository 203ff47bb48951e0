//! # Tablet Friability Calculation
//!
//! Evaluates a friabilator run: the dedusted sample is weighed before and
//! after tumbling and the percentage loss is checked against the USP limit.
//!
//! ## Assumptions
//!
//! - Weights in grams, same balance for both weighings
//! - A single run (no averaging over repeat tests)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::friability::{calculate, FriabilityInput};
//!
//! let input = FriabilityInput {
//!     label: "Batch 24-117".to_string(),
//!     initial_weight_g: 6.5,
//!     final_weight_g: 6.4675,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.friability_percent, 0.5);
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::require_positive;
use crate::equations::{self, round_to};
use crate::errors::{CalcError, CalcResult};
use crate::formatting::{format_decimal, format_percentage, FRIABILITY_WEIGHT_DECIMALS};
use crate::interpretation::FriabilityVerdict;

/// Input parameters for a friability test.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Batch 24-117",
///   "initial_weight_g": 6.5,
///   "final_weight_g": 6.4675
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriabilityInput {
    /// User label for this test (e.g., batch number)
    #[serde(default)]
    pub label: String,

    /// Sample weight before tumbling (g)
    pub initial_weight_g: f64,

    /// Sample weight after tumbling (g)
    pub final_weight_g: f64,
}

impl FriabilityInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("initial_weight_g", self.initial_weight_g)?;
        require_positive("final_weight_g", self.final_weight_g)?;
        if self.final_weight_g > self.initial_weight_g {
            return Err(CalcError::invalid_input(
                "final_weight_g",
                self.final_weight_g.to_string(),
                "Final weight cannot exceed initial weight",
            ));
        }
        Ok(())
    }
}

/// Results from a friability test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriabilityResult {
    /// Percentage weight loss, rounded to 2 decimals
    pub friability_percent: f64,

    /// Mass lost (g), rounded to 4 decimals
    pub weight_loss_g: f64,

    /// Pass/fail band against the 1% limit
    pub verdict: FriabilityVerdict,

    /// Human-readable verdict
    pub interpretation: String,
}

impl FriabilityResult {
    /// Check if the batch passes (loss ≤ 1%)
    pub fn passes(&self) -> bool {
        self.verdict.passes()
    }

    /// Friability as displayed ("0.50%")
    pub fn percent_display(&self) -> String {
        format_percentage(self.friability_percent)
    }

    /// Weight loss as displayed ("0.0325 g")
    pub fn weight_loss_display(&self) -> String {
        format!("{} g", format_decimal(self.weight_loss_g, FRIABILITY_WEIGHT_DECIMALS))
    }
}

/// Calculate friability for a single friabilator run.
///
/// # Returns
///
/// * `Ok(FriabilityResult)` - Calculation results
/// * `Err(CalcError)` - If a weight is non-positive or the sample gained mass
pub fn calculate(input: &FriabilityInput) -> CalcResult<FriabilityResult> {
    input.validate()?;
    tracing::debug!(
        label = %input.label,
        initial_weight = input.initial_weight_g,
        final_weight = input.final_weight_g,
        "calculating friability"
    );

    let friability_percent = equations::friability(input.initial_weight_g, input.final_weight_g)?;
    let weight_loss_g = round_to(
        equations::weight_loss(input.initial_weight_g, input.final_weight_g),
        FRIABILITY_WEIGHT_DECIMALS as u32,
    );
    let verdict = FriabilityVerdict::classify(friability_percent);

    Ok(FriabilityResult {
        friability_percent,
        weight_loss_g,
        verdict,
        interpretation: verdict.message().to_string(),
    })
}
