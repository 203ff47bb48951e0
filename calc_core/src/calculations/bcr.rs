//! # Benefit-Cost Ratio Calculation
//!
//! Compares the total benefits of an investment against its total costs.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::bcr::{calculate, BcrInput};
//! use calc_core::interpretation::BcrVerdict;
//!
//! let input = BcrInput {
//!     label: "Tablet press upgrade".to_string(),
//!     benefits: 150_000.0,
//!     costs: 100_000.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.ratio, 1.5);
//! assert_eq!(result.verdict, BcrVerdict::Viable);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{require_finite_result, require_positive};
use crate::equations;
use crate::errors::CalcResult;
use crate::formatting::format_decimal;
use crate::interpretation::BcrVerdict;

/// Input parameters for a benefit-cost ratio.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Tablet press upgrade",
///   "benefits": 150000.0,
///   "costs": 100000.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BcrInput {
    /// User label for this calculation
    #[serde(default)]
    pub label: String,

    /// Total monetary value of expected benefits (revenue, savings, ...)
    pub benefits: f64,

    /// Total monetary value of costs (purchase, maintenance, operation, ...)
    pub costs: f64,
}

impl BcrInput {
    /// Validate input parameters. Both totals must be positive.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("benefits", self.benefits)?;
        require_positive("costs", self.costs)?;
        Ok(())
    }
}

/// Results from a benefit-cost ratio calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BcrResult {
    /// B / C, rounded to 2 decimals
    pub ratio: f64,

    /// Qualitative band for the ratio
    pub verdict: BcrVerdict,

    /// Human-readable verdict
    pub interpretation: String,
}

impl BcrResult {
    /// Ratio as displayed ("1.50")
    pub fn ratio_display(&self) -> String {
        format_decimal(self.ratio, 2)
    }
}

/// Calculate the benefit-cost ratio and its verdict.
///
/// # Returns
///
/// * `Ok(BcrResult)` - Calculation results
/// * `Err(CalcError)` - If either total is not a positive finite number
pub fn calculate(input: &BcrInput) -> CalcResult<BcrResult> {
    input.validate()?;
    tracing::debug!(label = %input.label, benefits = input.benefits, costs = input.costs, "calculating BCR");

    let ratio = require_finite_result("BCR", equations::bcr(input.benefits, input.costs))?;
    let verdict = BcrVerdict::classify(ratio);

    Ok(BcrResult {
        ratio,
        verdict,
        interpretation: verdict.message().to_string(),
    })
}
