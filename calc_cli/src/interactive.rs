//! Prompt-driven calculator session (the default when no subcommand is given).

use std::io::{self, BufRead, Write};

use calc_core::calculations::{
    BcrInput, CalculationItem, DosageInput, EoqInput, FriabilityInput, NpvInput, ReorderPointInput,
};
use calc_core::calculations::npv::DEFAULT_DISCOUNT_RATE_PERCENT;
use calc_core::equations::{Formula, ALL_FORMULAS};
use calc_core::units::{StrengthUnit, VolumeUnit};

use crate::config::ResolvedConfig;

/// Read one trimmed line; `None` on end of input.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn prompt_f64(input: &mut impl BufRead, prompt: &str, default: f64) -> f64 {
    match prompt_line(input, &format!("{} [{}]: ", prompt, default)) {
        Some(text) => text.parse().unwrap_or(default),
        None => default,
    }
}

/// Comma- or space-separated list. Position is the discounting period, so
/// a single bad entry rejects the whole line.
fn parse_flows(text: &str) -> Result<Vec<f64>, String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, entry)| {
            entry
                .parse()
                .map_err(|_| format!("cash flow {} ('{}') is not a number", i + 1, entry))
        })
        .collect()
}

/// Prompt until the line parses; end of input yields no flows.
fn prompt_flows(input: &mut impl BufRead) -> Vec<f64> {
    loop {
        let Some(text) = prompt_line(input, "Cash flows for years 1..n (comma separated): ") else {
            return Vec::new();
        };
        match parse_flows(&text) {
            Ok(flows) => return flows,
            Err(e) => println!("{}, please re-enter all cash flows", e),
        }
    }
}

fn unit_choices<'a>(symbols: impl Iterator<Item = &'a str>) -> String {
    symbols.collect::<Vec<_>>().join(", ")
}

fn choose_formula(text: &str) -> Option<Formula> {
    if let Ok(index) = text.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| ALL_FORMULAS.get(i)).copied();
    }
    Formula::from_name(text).ok()
}

/// Ask for the inputs of one calculator.
fn read_item(input: &mut impl BufRead, formula: Formula) -> CalculationItem {
    match formula {
        Formula::Bcr => CalculationItem::Bcr(BcrInput {
            label: String::new(),
            benefits: prompt_f64(input, "Total benefits", 0.0),
            costs: prompt_f64(input, "Total costs", 0.0),
        }),
        Formula::Npv => {
            let initial_investment = prompt_f64(input, "Initial investment", 0.0);
            let flows = prompt_flows(input);
            let discount_rate_percent = prompt_f64(input, "Discount rate (%)", DEFAULT_DISCOUNT_RATE_PERCENT);
            CalculationItem::Npv(NpvInput {
                label: String::new(),
                initial_investment,
                cash_flows: flows,
                discount_rate_percent,
            })
        }
        Formula::Friability => CalculationItem::Friability(FriabilityInput {
            label: String::new(),
            initial_weight_g: prompt_f64(input, "Initial weight (g)", 0.0),
            final_weight_g: prompt_f64(input, "Final weight (g)", 0.0),
        }),
        Formula::ReorderPoint => CalculationItem::ReorderPoint(ReorderPointInput {
            label: String::new(),
            average_daily_usage: prompt_f64(input, "Average daily usage (units)", 0.0),
            lead_time_days: prompt_f64(input, "Lead time (days)", 0.0),
            safety_stock: prompt_f64(input, "Safety stock (units)", 0.0),
        }),
        Formula::EconomicOrderQuantity => CalculationItem::Eoq(EoqInput {
            label: String::new(),
            annual_demand: prompt_f64(input, "Annual demand (units)", 0.0),
            order_cost: prompt_f64(input, "Cost per order", 0.0),
            holding_cost: prompt_f64(input, "Holding cost per unit per year", 0.0),
        }),
        Formula::Dosage => {
            let strength_prompt = format!(
                "Strength unit ({}) [{}]: ",
                unit_choices(StrengthUnit::ALL.iter().map(StrengthUnit::symbol)),
                StrengthUnit::default()
            );
            let strength_unit = prompt_line(input, &strength_prompt)
                .and_then(|text| text.parse::<StrengthUnit>().ok())
                .unwrap_or_default();
            let volume_prompt = format!(
                "Volume unit ({}) [{}]: ",
                unit_choices(VolumeUnit::ALL.iter().map(VolumeUnit::symbol)),
                VolumeUnit::default()
            );
            let volume_unit = prompt_line(input, &volume_prompt)
                .and_then(|text| text.parse::<VolumeUnit>().ok())
                .unwrap_or_default();
            CalculationItem::Dosage(DosageInput {
                label: String::new(),
                stock_strength: prompt_f64(input, "Stock strength", 0.0),
                strength_unit,
                prescribed_dose: prompt_f64(input, "Prescribed dose", 0.0),
                volume: prompt_f64(input, "Stock volume", 0.0),
                volume_unit,
            })
        }
    }
}

fn print_menu() {
    println!("Pharmacalc - Pharmacy & Business Calculators");
    println!("============================================");
    for (i, formula) in ALL_FORMULAS.iter().enumerate() {
        let meta = formula.metadata();
        println!("  {}. {:<28} ({})", i + 1, meta.name, formula.cli_name());
    }
    println!("  q. Quit");
    println!();
}

/// Loop: pick a calculator, enter inputs, show the result.
pub fn run(config: &ResolvedConfig) {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    session(&mut input, config);
}

fn session(input: &mut impl BufRead, config: &ResolvedConfig) -> usize {
    let mut completed = 0;
    loop {
        print_menu();
        let Some(choice) = prompt_line(input, "Select a calculator: ") else {
            break;
        };
        if choice.eq_ignore_ascii_case("q") || choice.eq_ignore_ascii_case("quit") {
            break;
        }
        let Some(formula) = choose_formula(&choice) else {
            println!("Unknown choice '{}'", choice);
            println!();
            continue;
        };

        println!();
        let item = read_item(input, formula);
        println!();
        if crate::report(&item, config) {
            completed += 1;
        }
        println!();
    }
    tracing::info!(completed, "interactive session finished");
    completed
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::FormatSettings;
    use std::io::Cursor;

    fn config() -> ResolvedConfig {
        ResolvedConfig {
            format: FormatSettings::default(),
            json: false,
        }
    }

    #[test]
    fn test_parse_flows() {
        assert_eq!(parse_flows("500, 500 -50").unwrap(), vec![500.0, 500.0, -50.0]);
        assert!(parse_flows("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_flows_rejects_bad_entry() {
        let err = parse_flows("500,5OO,500").unwrap_err();
        assert!(err.contains("cash flow 2"));
        assert!(err.contains("5OO"));
    }

    #[test]
    fn test_bad_flow_line_is_prompted_again() {
        // The mistyped line must not shift year 3 into year 2
        let mut input = Cursor::new("1000\n500,5OO,500\n500,500,500\n10\n");
        match read_item(&mut input, Formula::Npv) {
            CalculationItem::Npv(npv) => {
                assert_eq!(npv.cash_flows, vec![500.0, 500.0, 500.0]);
                assert_eq!(npv.discount_rate_percent, 10.0);
            }
            other => panic!("unexpected item {:?}", other),
        }
    }

    #[test]
    fn test_unit_choices() {
        assert_eq!(unit_choices(StrengthUnit::ALL.iter().map(StrengthUnit::symbol)), "mg, mcg, g, %");
        assert_eq!(unit_choices(VolumeUnit::ALL.iter().map(VolumeUnit::symbol)), "mL, L, cc");
    }

    #[test]
    fn test_choose_formula() {
        assert_eq!(choose_formula("1"), Some(Formula::Bcr));
        assert_eq!(choose_formula("5"), Some(Formula::EconomicOrderQuantity));
        assert_eq!(choose_formula("eoq"), Some(Formula::EconomicOrderQuantity));
        assert_eq!(choose_formula("0"), None);
        assert_eq!(choose_formula("99"), None);
    }

    #[test]
    fn test_read_item_uses_defaults_on_blank_lines() {
        let mut input = Cursor::new("1000\n500,500,500\n\n");
        match read_item(&mut input, Formula::Npv) {
            CalculationItem::Npv(npv) => {
                assert_eq!(npv.initial_investment, 1000.0);
                assert_eq!(npv.cash_flows.len(), 3);
                assert_eq!(npv.discount_rate_percent, DEFAULT_DISCOUNT_RATE_PERCENT);
            }
            other => panic!("unexpected item {:?}", other),
        }
    }

    #[test]
    fn test_session_counts_successful_calculations() {
        // One valid EOQ, one rejected BCR, then quit
        let mut input = Cursor::new("eoq\n1000\n50\n2\nbcr\n0\n0\nq\n");
        assert_eq!(session(&mut input, &config()), 1);
    }

    #[test]
    fn test_session_ends_on_eof() {
        let mut input = Cursor::new("");
        assert_eq!(session(&mut input, &config()), 0);
    }
}
