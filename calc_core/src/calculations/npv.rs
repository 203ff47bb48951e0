//! # Net Present Value Calculation
//!
//! Discounts a series of yearly cash flows back to today and subtracts the
//! initial investment. Flows are ordered: the first entry is year 1.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::npv::{calculate, NpvInput};
//! use calc_core::interpretation::NpvVerdict;
//!
//! let input = NpvInput {
//!     label: "Cold-chain warehouse".to_string(),
//!     initial_investment: 1000.0,
//!     cash_flows: vec![500.0, 500.0, 500.0],
//!     discount_rate_percent: 10.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.npv, 243.43);
//! assert_eq!(result.verdict, NpvVerdict::CreatesValue);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{require_finite, require_positive};
use crate::equations::{self, round2};
use crate::errors::{CalcError, CalcResult};
use crate::formatting::format_currency;
use crate::interpretation::NpvVerdict;
use crate::settings::FormatSettings;

/// Discount rate a new NPV form starts with, in percent.
pub const DEFAULT_DISCOUNT_RATE_PERCENT: f64 = 5.0;

fn default_discount_rate() -> f64 {
    DEFAULT_DISCOUNT_RATE_PERCENT
}

/// Input parameters for a net present value.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Cold-chain warehouse",
///   "initial_investment": 1000.0,
///   "cash_flows": [500.0, 500.0, 500.0],
///   "discount_rate_percent": 10.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpvInput {
    /// User label for this calculation
    #[serde(default)]
    pub label: String,

    /// Upfront cost, entered as a positive amount
    pub initial_investment: f64,

    /// Cash flow per year; index 0 is year 1
    pub cash_flows: Vec<f64>,

    /// Annual discount rate in percent (5.0 = 5%)
    #[serde(default = "default_discount_rate")]
    pub discount_rate_percent: f64,
}

impl NpvInput {
    /// Validate input parameters.
    ///
    /// The investment must be positive and at least one year must bring in
    /// a positive cash flow; otherwise there is nothing to appraise.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("initial_investment", self.initial_investment)?;
        require_finite("discount_rate_percent", self.discount_rate_percent)?;
        for (i, cf) in self.cash_flows.iter().enumerate() {
            require_finite(&format!("cash_flows[{}]", i), *cf)?;
        }
        if !self.cash_flows.iter().any(|cf| *cf > 0.0) {
            return Err(CalcError::invalid_input(
                "cash_flows",
                format!("{:?}", self.cash_flows),
                "At least one year must have a positive cash flow",
            ));
        }
        Ok(())
    }
}

/// Results from a net present value calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpvResult {
    /// Net present value, rounded to 2 decimals
    pub npv: f64,

    /// Present value of each cash flow (year 1 first), rounded to 2 decimals
    pub present_values: Vec<f64>,

    /// Sum of discounted cash flows before subtracting the investment
    pub total_present_value: f64,

    /// Qualitative band for the NPV
    pub verdict: NpvVerdict,

    /// Human-readable verdict
    pub interpretation: String,
}

impl NpvResult {
    /// NPV as a currency string
    pub fn npv_display(&self, settings: &FormatSettings) -> String {
        format_currency(self.npv, settings)
    }
}

/// Calculate net present value with a per-year breakdown.
///
/// # Returns
///
/// * `Ok(NpvResult)` - Calculation results
/// * `Err(CalcError)` - Invalid inputs, or a -100% discount rate
pub fn calculate(input: &NpvInput) -> CalcResult<NpvResult> {
    input.validate()?;
    tracing::debug!(
        label = %input.label,
        periods = input.cash_flows.len(),
        rate = input.discount_rate_percent,
        "calculating NPV"
    );

    let npv = equations::npv(input.initial_investment, &input.cash_flows, input.discount_rate_percent)?;

    let unrounded = input
        .cash_flows
        .iter()
        .zip(1u32..)
        .map(|(cf, period)| equations::present_value(*cf, input.discount_rate_percent, period))
        .collect::<CalcResult<Vec<f64>>>()?;

    let total_present_value = round2(unrounded.iter().sum());
    let present_values = unrounded.into_iter().map(round2).collect();
    let verdict = NpvVerdict::classify(npv);

    Ok(NpvResult {
        npv,
        present_values,
        total_present_value,
        verdict,
        interpretation: verdict.message().to_string(),
    })
}
