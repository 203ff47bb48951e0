//! # Format Settings
//!
//! Locale parameters consumed by the currency formatter. Formatting is the
//! only locale-dependent part of the engine, and the locale is always an
//! explicit value passed by the caller, never process state.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::settings::FormatSettings;
//! use calc_core::formatting::format_currency;
//!
//! let us = FormatSettings::default();
//! assert_eq!(format_currency(1234.5, &us), "$1,234.50");
//!
//! let de = FormatSettings::for_locale("de-DE").unwrap();
//! assert_eq!(format_currency(1234.5, &de), "1.234,50\u{a0}€");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    #[default]
    Prefix,
    /// Number, a no-break space, then the symbol
    Suffix,
}

/// Number formatting conventions for display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    /// BCP 47 tag this settings block was derived from (informational)
    pub locale: String,

    /// Currency symbol (e.g., "$", "€", "£")
    pub currency_symbol: String,

    /// Symbol placement
    pub symbol_position: SymbolPosition,

    /// Digit-group separator for the integer part (empty disables grouping)
    pub thousands_separator: String,

    /// Separator between integer and fractional digits
    pub decimal_separator: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        FormatSettings {
            locale: "en-US".to_string(),
            currency_symbol: "$".to_string(),
            symbol_position: SymbolPosition::Prefix,
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

impl FormatSettings {
    /// Built-in presets for a handful of locales.
    pub fn for_locale(tag: &str) -> CalcResult<Self> {
        let settings = match tag {
            "en-US" => FormatSettings::default(),
            "en-GB" => FormatSettings {
                locale: tag.to_string(),
                currency_symbol: "£".to_string(),
                ..FormatSettings::default()
            },
            "de-DE" => FormatSettings {
                locale: tag.to_string(),
                currency_symbol: "€".to_string(),
                symbol_position: SymbolPosition::Suffix,
                thousands_separator: ".".to_string(),
                decimal_separator: ",".to_string(),
            },
            _ => {
                return Err(CalcError::invalid_input(
                    "locale",
                    tag,
                    "Unsupported locale; expected one of en-US, en-GB, de-DE",
                ))
            }
        };
        Ok(settings)
    }

    /// Replace the currency symbol, keeping the other conventions.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }
}
