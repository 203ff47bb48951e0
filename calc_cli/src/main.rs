//! # Pharmacalc CLI Application
//!
//! Command-line front end for the `calc_core` calculators. Each calculator
//! is a subcommand; with no subcommand the tool prompts for inputs.

mod cli;
mod config;
mod interactive;
mod render;

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use calc_core::calculations::CalculationItem;
use calc_core::equations::{generate_formulas_markdown, Formula};

use crate::cli::{Cli, Command};
use crate::config::ResolvedConfig;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when a calculation was rejected (already reported).
fn run(cli: Cli) -> Result<bool> {
    let file = config::load_file_config(cli.config.as_deref())?;
    let config = config::resolve(file, &cli)?;
    tracing::debug!(locale = %config.format.locale, json = config.json, "resolved settings");

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Eval { path } => {
            let item = read_item(&path)?;
            Ok(report(&item, &config))
        }
        Command::List { markdown } => {
            if markdown {
                print!("{}", generate_formulas_markdown());
            } else if config.json {
                let metadata: Vec<_> = Formula::all_categories()
                    .into_iter()
                    .flat_map(Formula::in_category)
                    .map(|f| f.metadata())
                    .collect();
                println!("{}", serde_json::to_string_pretty(&metadata)?);
            } else {
                print!("{}", render::render_list());
            }
            Ok(true)
        }
        Command::Explain { name } => {
            let formula = Formula::from_name(&name)
                .with_context(|| format!("known calculators: {}", render::known_names()))?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&formula.metadata())?);
            } else {
                print!("{}", render::render_formula(formula));
            }
            Ok(true)
        }
        Command::Interactive => {
            interactive::run(&config);
            Ok(true)
        }
        calculator => match calculator.to_item() {
            Some(item) => Ok(report(&item, &config)),
            None => Ok(true),
        },
    }
}

fn read_item(path: &Path) -> Result<CalculationItem> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read calculation from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    CalculationItem::from_json(&contents).context("invalid calculation JSON")
}

/// Evaluate and print one item. Returns whether it produced a result.
pub(crate) fn report(item: &CalculationItem, config: &ResolvedConfig) -> bool {
    match item.evaluate() {
        Ok(outcome) => {
            if config.json {
                match serde_json::to_string_pretty(&outcome) {
                    Ok(json) => println!("{}", json),
                    Err(e) => eprintln!("Error: {}", e),
                }
            } else {
                print!("{}", render::render_outcome(&outcome, item.label(), &config.format));
            }
            true
        }
        Err(e) => {
            if config.json {
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    println!("{}", json);
                }
            } else {
                eprintln!("Error: {}", e);
            }
            false
        }
    }
}
