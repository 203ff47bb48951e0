//! Configuration loading.
//!
//! Precedence, lowest first: built-in defaults, `.calc.toml` (or `--config`),
//! environment variables and flags (both handled by clap).
//!
//! ```toml
//! locale = "en-GB"
//! currency_symbol = "£"
//! json = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use calc_core::FormatSettings;

use crate::cli::Cli;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".calc.toml";

/// Contents of a config file. Every key is optional.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub locale: Option<String>,
    pub currency_symbol: Option<String>,
    pub json: bool,
}

/// Settings after merging file, environment and flags.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub format: FormatSettings,
    pub json: bool,
}

/// Parse config file contents.
pub fn parse_config(contents: &str) -> Result<FileConfig> {
    toml::from_str(contents).context("failed to parse config file")
}

fn read_config(path: &Path) -> Result<FileConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = parse_config(&contents).with_context(|| format!("in {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Load the config file: an explicit path must exist, the default one may not.
pub fn load_file_config(explicit: Option<&Path>) -> Result<FileConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if !path.exists() {
        tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
        return Ok(FileConfig::default());
    }
    match read_config(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!("ignoring {}: {:#}", DEFAULT_CONFIG_FILE, e);
            Ok(FileConfig::default())
        }
    }
}

/// Merge a file config with command-line/environment overrides.
pub fn resolve(file: FileConfig, cli: &Cli) -> Result<ResolvedConfig> {
    let locale = cli.locale.as_deref().or(file.locale.as_deref()).unwrap_or("en-US");
    let mut format = FormatSettings::for_locale(locale)?;

    if let Some(symbol) = cli.currency_symbol.clone().or(file.currency_symbol) {
        format = format.with_currency_symbol(symbol);
    }

    Ok(ResolvedConfig {
        format,
        json: cli.json || file.json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["calc_cli"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_parse_config() {
        let config = parse_config("locale = \"de-DE\"\njson = true\n").unwrap();
        assert_eq!(config.locale.as_deref(), Some("de-DE"));
        assert!(config.json);
        assert!(config.currency_symbol.is_none());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(parse_config("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig {
            locale: Some("de-DE".to_string()),
            currency_symbol: Some("EUR".to_string()),
            json: false,
        };
        let resolved = resolve(file, &cli(&["--currency-symbol", "€", "list"])).unwrap();
        assert_eq!(resolved.format.currency_symbol, "€");
        assert_eq!(resolved.format.decimal_separator, ",");
        assert!(!resolved.json);
    }

    #[test]
    fn test_defaults() {
        let resolved = resolve(FileConfig::default(), &cli(&["list"])).unwrap();
        assert_eq!(resolved.format, FormatSettings::default());
    }

    #[test]
    fn test_bad_locale_is_error() {
        let file = FileConfig {
            locale: Some("xx-XX".to_string()),
            ..FileConfig::default()
        };
        assert!(resolve(file, &cli(&["list"])).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        assert!(load_file_config(Some(Path::new("/nonexistent/calc.toml"))).is_err());
    }
}
