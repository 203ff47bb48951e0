//! # Error Types
//!
//! Structured error types for calc_core. These errors are designed to be
//! informative for both humans and machine consumers, providing enough
//! context to understand and fix issues programmatically.
//!
//! Two families matter to callers:
//!
//! - [`CalcError::InvalidInput`] - an input failed a form-level guard
//!   (non-positive weight, non-finite number, ...)
//! - [`CalcError::DomainError`] - the formula itself is undefined for the
//!   inputs (negative radicand, discount-rate singularity, weight gain)
//!
//! Zero denominators are *not* errors: the formulas return a sentinel `0`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_costs(costs: f64) -> CalcResult<()> {
//!     if costs <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "costs".to_string(),
//!             value: costs.to_string(),
//!             reason: "Costs must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The formula is mathematically undefined for the given inputs
    #[error("Domain error in {formula}: {reason}")]
    DomainError { formula: String, reason: String },

    /// Unknown calculator or formula name
    #[error("Unknown formula: {name}")]
    UnknownFormula { name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DomainError
    pub fn domain_error(formula: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DomainError {
            formula: formula.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownFormula error
    pub fn unknown_formula(name: impl Into<String>) -> Self {
        CalcError::UnknownFormula { name: name.into() }
    }

    /// True for errors raised by the formula rather than by input guards
    pub fn is_domain_error(&self) -> bool {
        matches!(self, CalcError::DomainError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
            CalcError::UnknownFormula { .. } => "UNKNOWN_FORMULA",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Reject NaN and infinities before they reach a formula.
pub(crate) fn ensure_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ))
    }
}
