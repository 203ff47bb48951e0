//! # Unit Labels
//!
//! Cosmetic unit labels for the dosage calculator. The engine never converts
//! between units: the labels only travel with the numbers so results can be
//! displayed as "10.00 mL" or "(10 mg ÷ 5 mg/mL)".
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{StrengthUnit, VolumeUnit};
//!
//! let strength: StrengthUnit = "mcg".parse().unwrap();
//! assert_eq!(strength.concentration_label(VolumeUnit::Ml), "mcg/mL");
//! assert_eq!(StrengthUnit::Percent.concentration_label(VolumeUnit::Ml), "%");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

// ============================================================================
// Strength Units
// ============================================================================

/// Unit of the stock strength (and of the prescribed dose).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StrengthUnit {
    /// Milligrams
    #[default]
    #[serde(rename = "mg")]
    Mg,
    /// Micrograms
    #[serde(rename = "mcg")]
    Mcg,
    /// Grams
    #[serde(rename = "g")]
    G,
    /// Percent strength (w/v)
    #[serde(rename = "%")]
    Percent,
}

impl StrengthUnit {
    pub const ALL: [StrengthUnit; 4] = [StrengthUnit::Mg, StrengthUnit::Mcg, StrengthUnit::G, StrengthUnit::Percent];

    /// Short symbol (e.g., "mg")
    pub fn symbol(&self) -> &'static str {
        match self {
            StrengthUnit::Mg => "mg",
            StrengthUnit::Mcg => "mcg",
            StrengthUnit::G => "g",
            StrengthUnit::Percent => "%",
        }
    }

    /// Label for a stock concentration, e.g. "mg/mL". Percent strength has
    /// no per-volume suffix.
    pub fn concentration_label(&self, volume: VolumeUnit) -> String {
        match self {
            StrengthUnit::Percent => "%".to_string(),
            _ => format!("{}/{}", self.symbol(), volume.symbol()),
        }
    }
}

impl fmt::Display for StrengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for StrengthUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mg" => Ok(StrengthUnit::Mg),
            "mcg" | "ug" | "µg" => Ok(StrengthUnit::Mcg),
            "g" => Ok(StrengthUnit::G),
            "%" | "percent" => Ok(StrengthUnit::Percent),
            _ => Err(CalcError::invalid_input("strength_unit", s, "Expected one of mg, mcg, g, %")),
        }
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Unit of the stock volume (and of the answer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VolumeUnit {
    /// Millilitres
    #[default]
    #[serde(rename = "mL")]
    Ml,
    /// Litres
    #[serde(rename = "L")]
    L,
    /// Cubic centimetres
    #[serde(rename = "cc")]
    Cc,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 3] = [VolumeUnit::Ml, VolumeUnit::L, VolumeUnit::Cc];

    /// Short symbol (e.g., "mL")
    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::Ml => "mL",
            VolumeUnit::L => "L",
            VolumeUnit::Cc => "cc",
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for VolumeUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ml" => Ok(VolumeUnit::Ml),
            "l" => Ok(VolumeUnit::L),
            "cc" => Ok(VolumeUnit::Cc),
            _ => Err(CalcError::invalid_input("volume_unit", s, "Expected one of mL, L, cc")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strength() {
        assert_eq!("MG".parse::<StrengthUnit>().unwrap(), StrengthUnit::Mg);
        assert_eq!("ug".parse::<StrengthUnit>().unwrap(), StrengthUnit::Mcg);
        assert_eq!("%".parse::<StrengthUnit>().unwrap(), StrengthUnit::Percent);
        assert!("kg".parse::<StrengthUnit>().is_err());
    }

    #[test]
    fn test_parse_volume() {
        assert_eq!("mL".parse::<VolumeUnit>().unwrap(), VolumeUnit::Ml);
        assert_eq!("L".parse::<VolumeUnit>().unwrap(), VolumeUnit::L);
        assert!("oz".parse::<VolumeUnit>().is_err());
    }

    #[test]
    fn test_concentration_label() {
        assert_eq!(StrengthUnit::Mg.concentration_label(VolumeUnit::Ml), "mg/mL");
        assert_eq!(StrengthUnit::G.concentration_label(VolumeUnit::L), "g/L");
    }

    #[test]
    fn test_serde_uses_symbols() {
        assert_eq!(serde_json::to_string(&VolumeUnit::Ml).unwrap(), "\"mL\"");
        let unit: StrengthUnit = serde_json::from_str("\"mcg\"").unwrap();
        assert_eq!(unit, StrengthUnit::Mcg);
    }
}
