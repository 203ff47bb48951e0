//! # Result Interpretation
//!
//! Maps a computed result onto a small, closed set of verdicts. Thresholds
//! are fixed per formula and compare against the *rounded* result, so a
//! BCR of 1.004 (displayed as 1.00) reads as break-even.
//!
//! | Formula    | Bands                          |
//! |------------|--------------------------------|
//! | BCR        | `> 1`, `== 1`, `< 1`           |
//! | NPV        | `> 0`, `== 0`, `< 0`           |
//! | Friability | `<= 1%`, `> 1%`                |
//!
//! ROP and EOQ have no verdict bands; they produce a recommendation instead.

use std::fmt;

use serde::{Deserialize, Serialize};

/// USP <1216> limit on mean weight loss, in percent.
pub const FRIABILITY_LIMIT_PERCENT: f64 = 1.0;

/// Verdict for a benefit-cost ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BcrVerdict {
    /// BCR > 1
    Viable,
    /// BCR == 1
    BreakEven,
    /// BCR < 1
    NotViable,
}

impl BcrVerdict {
    pub fn classify(ratio: f64) -> Self {
        if ratio > 1.0 {
            BcrVerdict::Viable
        } else if ratio == 1.0 {
            BcrVerdict::BreakEven
        } else {
            BcrVerdict::NotViable
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            BcrVerdict::Viable => {
                "The benefits outweigh the costs. This investment appears economically viable."
            }
            BcrVerdict::BreakEven => "The benefits equal the costs. This investment breaks even.",
            BcrVerdict::NotViable => {
                "The costs outweigh the benefits. This investment may not be economically viable."
            }
        }
    }
}

/// Verdict for a net present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NpvVerdict {
    /// NPV > 0
    CreatesValue,
    /// NPV == 0
    BreakEven,
    /// NPV < 0
    LosesValue,
}

impl NpvVerdict {
    pub fn classify(npv: f64) -> Self {
        if npv > 0.0 {
            NpvVerdict::CreatesValue
        } else if npv == 0.0 {
            NpvVerdict::BreakEven
        } else {
            NpvVerdict::LosesValue
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            NpvVerdict::CreatesValue => {
                "The investment is expected to generate value. It may be worth pursuing."
            }
            NpvVerdict::BreakEven => {
                "The investment is expected to break even. Consider other factors in your decision."
            }
            NpvVerdict::LosesValue => {
                "The investment is expected to lose value. It may not be worth pursuing."
            }
        }
    }
}

/// Verdict for a friability percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FriabilityVerdict {
    /// Loss <= 1%
    WithinLimit,
    /// Loss > 1%
    ExceedsLimit,
}

impl FriabilityVerdict {
    pub fn classify(percent_loss: f64) -> Self {
        if percent_loss <= FRIABILITY_LIMIT_PERCENT {
            FriabilityVerdict::WithinLimit
        } else {
            FriabilityVerdict::ExceedsLimit
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FriabilityVerdict::WithinLimit => {
                "The friability is within acceptable limits (≤1%) according to USP standards."
            }
            FriabilityVerdict::ExceedsLimit => {
                "The friability exceeds the acceptable limit (>1%) according to USP standards. \
                 Further formulation optimization may be needed."
            }
        }
    }

    /// True when the batch passes
    pub fn passes(&self) -> bool {
        matches!(self, FriabilityVerdict::WithinLimit)
    }
}

impl fmt::Display for BcrVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl fmt::Display for NpvVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl fmt::Display for FriabilityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Recommendation shown with a reorder point.
pub fn reorder_point_advice(units: i64) -> String {
    format!(
        "Place a new order when inventory reaches {} units to avoid stockouts.",
        units
    )
}

/// Recommendation shown with an economic order quantity.
pub fn eoq_advice(units: u64) -> String {
    format!("Order {} units at a time to minimize total inventory costs.", units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcr_bands() {
        assert_eq!(BcrVerdict::classify(1.5), BcrVerdict::Viable);
        assert_eq!(BcrVerdict::classify(1.0), BcrVerdict::BreakEven);
        assert_eq!(BcrVerdict::classify(0.99), BcrVerdict::NotViable);
        assert_eq!(BcrVerdict::classify(0.0), BcrVerdict::NotViable);
    }

    #[test]
    fn test_npv_bands() {
        assert_eq!(NpvVerdict::classify(0.01), NpvVerdict::CreatesValue);
        assert_eq!(NpvVerdict::classify(0.0), NpvVerdict::BreakEven);
        assert_eq!(NpvVerdict::classify(-0.01), NpvVerdict::LosesValue);
    }

    #[test]
    fn test_friability_bands() {
        assert_eq!(FriabilityVerdict::classify(0.5), FriabilityVerdict::WithinLimit);
        assert_eq!(FriabilityVerdict::classify(1.0), FriabilityVerdict::WithinLimit);
        assert_eq!(FriabilityVerdict::classify(1.01), FriabilityVerdict::ExceedsLimit);
        assert!(!FriabilityVerdict::ExceedsLimit.passes());
    }

    #[test]
    fn test_messages() {
        assert!(BcrVerdict::BreakEven.message().contains("breaks even"));
        assert!(NpvVerdict::LosesValue.to_string().contains("lose value"));
        assert!(FriabilityVerdict::WithinLimit.message().contains("USP"));
    }

    #[test]
    fn test_advice() {
        assert_eq!(
            reorder_point_advice(70),
            "Place a new order when inventory reaches 70 units to avoid stockouts."
        );
        assert_eq!(eoq_advice(224), "Order 224 units at a time to minimize total inventory costs.");
    }
}
