//! # calc_core - Pharmacy & Business Calculation Engine
//!
//! `calc_core` is the computational heart of Pharmacalc: benefit-cost ratio,
//! net present value, tablet friability, reorder point, economic order
//! quantity and dosage conversion. All inputs and outputs are
//! JSON-serializable, so any front end can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All records implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not NaN or Infinity
//! - **Explicit locale**: Formatting takes its conventions as a parameter
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::equations::{bcr, eoq, friability};
//! use calc_core::interpretation::FriabilityVerdict;
//!
//! assert_eq!(bcr(150.0, 100.0), 1.5);
//! assert_eq!(eoq(1000.0, 50.0, 2.0).unwrap(), 224);
//!
//! let loss = friability(100.0, 99.0).unwrap();
//! assert_eq!(FriabilityVerdict::classify(loss), FriabilityVerdict::WithinLimit);
//! ```
//!
//! ## Modules
//!
//! - [`equations`] - The pure formulas and their registry
//! - [`interpretation`] - Verdict bands per formula
//! - [`calculations`] - Validated calculator forms (input → result + verdict)
//! - [`formatting`] - Currency, percentage and decimal strings
//! - [`settings`] - Locale conventions for formatting
//! - [`units`] - Cosmetic dosage unit labels
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod formatting;
pub mod interpretation;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutcome};
pub use errors::{CalcError, CalcResult};
pub use settings::FormatSettings;
