//! Plain-text rendering of calculation outcomes and formula metadata.

use std::fmt::Write as _;

use calc_core::calculations::CalculationOutcome;
use calc_core::equations::{Formula, ALL_FORMULAS};
use calc_core::formatting::{format_currency, format_decimal, DEFAULT_DECIMALS};
use calc_core::FormatSettings;

const RULE: &str = "═══════════════════════════════════════";

fn banner(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {}", title);
    let _ = writeln!(out, "{}", RULE);
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

/// Render an outcome as the result panel shown after a calculation.
pub fn render_outcome(outcome: &CalculationOutcome, label: &str, settings: &FormatSettings) -> String {
    let mut out = String::new();
    let title = match outcome {
        CalculationOutcome::Bcr(_) => "BENEFIT-COST RATIO",
        CalculationOutcome::Npv(_) => "NET PRESENT VALUE",
        CalculationOutcome::Friability(_) => "TABLET FRIABILITY",
        CalculationOutcome::ReorderPoint(_) => "REORDER POINT",
        CalculationOutcome::Eoq(_) => "ECONOMIC ORDER QUANTITY",
        CalculationOutcome::Dosage(_) => "DOSAGE CONVERSION",
    };
    if label.is_empty() {
        banner(&mut out, title);
    } else {
        banner(&mut out, &format!("{} ({})", title, label));
    }
    out.push('\n');

    match outcome {
        CalculationOutcome::Bcr(r) => {
            let _ = writeln!(out, "  BCR = {}", r.ratio_display());
        }
        CalculationOutcome::Npv(r) => {
            let _ = writeln!(out, "  NPV = {}", r.npv_display(settings));
            let _ = writeln!(out);
            let _ = writeln!(out, "Present values:");
            for (year, pv) in r.present_values.iter().enumerate() {
                let _ = writeln!(out, "  Year {:<3} {}", year + 1, format_currency(*pv, settings));
            }
            let _ = writeln!(
                out,
                "  Total    {}",
                format_currency(r.total_present_value, settings)
            );
        }
        CalculationOutcome::Friability(r) => {
            let _ = writeln!(
                out,
                "  Friability  = {} {}",
                r.percent_display(),
                status_icon(r.passes())
            );
            let _ = writeln!(out, "  Weight loss = {}", r.weight_loss_display());
        }
        CalculationOutcome::ReorderPoint(r) => {
            let _ = writeln!(out, "  ROP = {} units", r.reorder_point);
            let _ = writeln!(
                out,
                "  Lead time demand = {} units",
                format_decimal(r.lead_time_demand, DEFAULT_DECIMALS)
            );
        }
        CalculationOutcome::Eoq(r) => {
            let _ = writeln!(out, "  EOQ = {} units", r.eoq);
            let _ = writeln!(
                out,
                "  Orders per year = {}",
                format_decimal(r.orders_per_year, DEFAULT_DECIMALS)
            );
            let _ = writeln!(
                out,
                "  Annual ordering + holding cost = {}",
                format_currency(r.annual_inventory_cost, settings)
            );
        }
        CalculationOutcome::Dosage(r) => {
            let _ = writeln!(out, "  Volume = {}", r.volume_display());
        }
    }

    out.push('\n');
    banner(&mut out, outcome.interpretation());
    out
}

/// One line per calculator, grouped by category.
pub fn render_list() -> String {
    let mut out = String::new();
    for category in Formula::all_categories() {
        let _ = writeln!(out, "{}:", category.display_name());
        for formula in Formula::in_category(category) {
            let meta = formula.metadata();
            let _ = writeln!(out, "  {:<11} {}", formula.cli_name(), meta.name);
        }
    }
    out
}

/// Formula, variables and notes for one calculator.
pub fn render_formula(formula: Formula) -> String {
    let meta = formula.metadata();
    let mut out = String::new();
    banner(&mut out, &format!("{} ({})", meta.name, meta.short_name));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", meta.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", meta.formula);
    let _ = writeln!(out);
    let _ = writeln!(out, "Variables:");
    for var in &meta.variables {
        if var.units.is_empty() {
            let _ = writeln!(out, "  {:<6} {}", var.symbol, var.description);
        } else {
            let _ = writeln!(out, "  {:<6} {} [{}]", var.symbol, var.description, var.units);
        }
    }
    if !meta.notes.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Notes:");
        for note in &meta.notes {
            let _ = writeln!(out, "  - {}", note);
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Reference: {}", meta.reference.citation());
    out
}

/// Names accepted by `explain`, for error messages.
pub fn known_names() -> String {
    ALL_FORMULAS
        .iter()
        .map(|f| f.cli_name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::{BcrInput, CalculationItem, FriabilityInput, NpvInput};

    fn evaluate(item: CalculationItem) -> CalculationOutcome {
        item.evaluate().unwrap()
    }

    #[test]
    fn test_render_bcr() {
        let outcome = evaluate(CalculationItem::Bcr(BcrInput {
            label: String::new(),
            benefits: 150.0,
            costs: 100.0,
        }));
        let text = render_outcome(&outcome, "", &FormatSettings::default());
        assert!(text.contains("BENEFIT-COST RATIO"));
        assert!(text.contains("BCR = 1.50"));
        assert!(text.contains(outcome.interpretation()));
    }

    #[test]
    fn test_render_npv_uses_locale() {
        let outcome = evaluate(CalculationItem::Npv(NpvInput {
            label: "Clinic".to_string(),
            initial_investment: 1000.0,
            cash_flows: vec![500.0, 500.0, 500.0],
            discount_rate_percent: 10.0,
        }));
        let settings = FormatSettings::for_locale("de-DE").unwrap();
        let text = render_outcome(&outcome, "Clinic", &settings);
        assert!(text.contains("(Clinic)"));
        assert!(text.contains("NPV = 243,43\u{a0}€"));
        assert!(text.contains("Year 3"));
    }

    #[test]
    fn test_render_friability_status() {
        let outcome = evaluate(CalculationItem::Friability(FriabilityInput {
            label: String::new(),
            initial_weight_g: 6.5,
            final_weight_g: 6.4675,
        }));
        let text = render_outcome(&outcome, "", &FormatSettings::default());
        assert!(text.contains("0.50% [OK]"));
        assert!(text.contains("0.0325 g"));
    }

    #[test]
    fn test_render_list_has_every_calculator() {
        let text = render_list();
        for formula in ALL_FORMULAS.iter() {
            assert!(text.contains(formula.cli_name()));
        }
        assert!(text.contains("Stock Procurement:"));
    }

    #[test]
    fn test_render_formula() {
        let text = render_formula(Formula::EconomicOrderQuantity);
        assert!(text.contains("Variables:"));
        assert!(text.contains("Reference:"));
    }
}
