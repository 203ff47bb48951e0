//! # Formula Registry
//!
//! Central registry of every formula the calculators use. Each formula has
//! metadata including its plain-text form, variable definitions and the
//! reference it comes from.
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::equations::registry::Formula;
//!
//! let meta = Formula::EconomicOrderQuantity.metadata();
//! println!("Formula: {}", meta.formula);
//!
//! // Lookup by CLI-style name or alias
//! assert_eq!(Formula::from_name("eoq").unwrap(), Formula::EconomicOrderQuantity);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// References
// ============================================================================

/// Source of a formula, cited when explaining a result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reference {
    /// United States Pharmacopeia general chapter
    Usp { chapter: &'static str },
    /// Standard engineering-economics / corporate-finance result
    Finance,
    /// Harris (1913) economic lot size model
    Harris,
    /// Standard inventory-control practice
    Inventory,
    /// Pharmacy calculations ("desired over have")
    PharmacyPractice,
}

impl Reference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            Reference::Usp { chapter } => format!("USP General Chapter {}", chapter),
            Reference::Finance => "Engineering economics (discounted cash flow)".to_string(),
            Reference::Harris => "Harris, F. W. (1913), economic lot size model".to_string(),
            Reference::Inventory => "Inventory control practice".to_string(),
            Reference::PharmacyPractice => "Pharmaceutical calculations".to_string(),
        }
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Calculator family, used for grouping in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulaCategory {
    Financial,
    Quality,
    Inventory,
    Clinical,
}

impl FormulaCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaCategory::Financial => "Financial",
            FormulaCategory::Quality => "Quality Control",
            FormulaCategory::Inventory => "Stock Procurement",
            FormulaCategory::Clinical => "Clinical",
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in a formula.
#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    /// Symbol (e.g., "B", "r", "W₀")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (cosmetic; the formulas are unit-agnostic)
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Formula Metadata
// ============================================================================

/// Complete metadata for one calculator formula.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaMetadata {
    /// Human-readable name (e.g., "Benefit-Cost Ratio")
    pub name: &'static str,
    /// Abbreviation used in headings (e.g., "BCR")
    pub short_name: &'static str,
    /// Brief description of what the calculator is for
    pub description: &'static str,
    /// The formula in plain text
    pub formula: &'static str,
    /// Source reference
    pub reference: Reference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Degenerate-input and domain rules worth showing to a user
    pub notes: Vec<&'static str>,
    /// Category for grouping
    pub category: FormulaCategory,
    /// Function implementing the formula
    pub source_function: &'static str,
}

// ============================================================================
// Formula Enum
// ============================================================================

/// Every calculator formula in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    /// BCR = B / C
    Bcr,
    /// NPV = -I₀ + Σ CFᵢ / (1 + r)^i
    Npv,
    /// F = (W₀ - W₁) / W₀ × 100
    Friability,
    /// ROP = ⌈d × L + SS⌉
    ReorderPoint,
    /// EOQ = ⌈√(2DS / H)⌉
    EconomicOrderQuantity,
    /// V = (D / S) × V_stock
    Dosage,
}

impl Formula {
    /// Name used on the command line and in lookups
    pub fn cli_name(&self) -> &'static str {
        match self {
            Formula::Bcr => "bcr",
            Formula::Npv => "npv",
            Formula::Friability => "friability",
            Formula::ReorderPoint => "rop",
            Formula::EconomicOrderQuantity => "eoq",
            Formula::Dosage => "dosage",
        }
    }

    /// Resolve a formula from its CLI name or a common alias (case-insensitive).
    pub fn from_name(name: &str) -> CalcResult<Formula> {
        FORMULA_ALIASES
            .get(name.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| CalcError::unknown_formula(name))
    }

    /// Get the full metadata for this formula
    pub fn metadata(&self) -> FormulaMetadata {
        match self {
            Formula::Bcr => FormulaMetadata {
                name: "Benefit-Cost Ratio",
                short_name: "BCR",
                description: "Calculate Benefit-Cost Ratio for investment decisions",
                formula: "BCR = B / C",
                reference: Reference::Finance,
                variables: vec![
                    Variable::new("B", "Total monetary value of expected benefits", "$"),
                    Variable::new("C", "Total monetary value of associated costs", "$"),
                ],
                notes: vec!["Result rounded to 2 decimals", "BCR = 0 when C = 0"],
                category: FormulaCategory::Financial,
                source_function: "bcr",
            },

            Formula::Npv => FormulaMetadata {
                name: "Net Present Value",
                short_name: "NPV",
                description: "Determine Net Present Value of investments over time",
                formula: "NPV = -I0 + sum(CF_i / (1 + r/100)^i), i = 1..n",
                reference: Reference::Finance,
                variables: vec![
                    Variable::new("I0", "Initial investment", "$"),
                    Variable::new("CF_i", "Cash flow at the end of year i", "$"),
                    Variable::new("r", "Discount rate", "%"),
                ],
                notes: vec![
                    "Result rounded to 2 decimals",
                    "A discount rate of -100% is undefined",
                ],
                category: FormulaCategory::Financial,
                source_function: "npv",
            },

            Formula::Friability => FormulaMetadata {
                name: "Tablet Friability",
                short_name: "Friability",
                description: "Calculate tablet durability through friability testing",
                formula: "F = (W0 - W1) / W0 x 100",
                reference: Reference::Usp { chapter: "<1216>" },
                variables: vec![
                    Variable::new("W0", "Sample weight before tumbling", "g"),
                    Variable::new("W1", "Sample weight after tumbling", "g"),
                ],
                notes: vec![
                    "Acceptable when F <= 1%",
                    "Final weight may not exceed initial weight",
                    "F = 0 when W0 = 0",
                ],
                category: FormulaCategory::Quality,
                source_function: "friability",
            },

            Formula::ReorderPoint => FormulaMetadata {
                name: "Reorder Point",
                short_name: "ROP",
                description: "Inventory level at which a new order should be placed",
                formula: "ROP = ceil(d x L + SS)",
                reference: Reference::Inventory,
                variables: vec![
                    Variable::new("d", "Average daily usage", "units/day"),
                    Variable::new("L", "Lead time", "days"),
                    Variable::new("SS", "Safety stock", "units"),
                ],
                notes: vec!["Rounded up to whole units"],
                category: FormulaCategory::Inventory,
                source_function: "reorder_point",
            },

            Formula::EconomicOrderQuantity => FormulaMetadata {
                name: "Economic Order Quantity",
                short_name: "EOQ",
                description: "Order size minimizing total ordering and holding cost",
                formula: "EOQ = ceil(sqrt(2DS / H))",
                reference: Reference::Harris,
                variables: vec![
                    Variable::new("D", "Annual demand", "units/year"),
                    Variable::new("S", "Cost per order", "$"),
                    Variable::new("H", "Holding cost per unit per year", "$"),
                ],
                notes: vec![
                    "Rounded up to whole units",
                    "EOQ = 0 when H = 0",
                    "A negative value under the root is undefined",
                ],
                category: FormulaCategory::Inventory,
                source_function: "eoq",
            },

            Formula::Dosage => FormulaMetadata {
                name: "Dosage Calculator",
                short_name: "Dosage",
                description: "Calculate accurate medication dosages for patients",
                formula: "(Prescribed Dose / Stock Strength) x Volume",
                reference: Reference::PharmacyPractice,
                variables: vec![
                    Variable::new("D", "Prescribed dose", "mg"),
                    Variable::new("S", "Stock strength", "mg per volume"),
                    Variable::new("V", "Stock volume", "mL"),
                ],
                notes: vec![
                    "Result rounded to 2 decimals",
                    "Dose and strength must share a unit",
                    "Result = 0 when S = 0",
                ],
                category: FormulaCategory::Clinical,
                source_function: "dosage",
            },
        }
    }

    /// Get all formulas in a given category
    pub fn in_category(category: FormulaCategory) -> Vec<Formula> {
        ALL_FORMULAS
            .iter()
            .filter(|f| f.metadata().category == category)
            .copied()
            .collect()
    }

    /// All categories in listing order
    pub fn all_categories() -> Vec<FormulaCategory> {
        vec![
            FormulaCategory::Financial,
            FormulaCategory::Quality,
            FormulaCategory::Inventory,
            FormulaCategory::Clinical,
        ]
    }
}

/// All formulas in the registry (for iteration)
pub static ALL_FORMULAS: &[Formula] = &[
    Formula::Bcr,
    Formula::Npv,
    Formula::Friability,
    Formula::ReorderPoint,
    Formula::EconomicOrderQuantity,
    Formula::Dosage,
];

static FORMULA_ALIASES: Lazy<HashMap<&'static str, Formula>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for formula in ALL_FORMULAS {
        map.insert(formula.cli_name(), *formula);
    }
    map.insert("benefit-cost-ratio", Formula::Bcr);
    map.insert("net-present-value", Formula::Npv);
    map.insert("tablet-friability", Formula::Friability);
    map.insert("reorder-point", Formula::ReorderPoint);
    map.insert("economic-order-quantity", Formula::EconomicOrderQuantity);
    map.insert("dose", Formula::Dosage);
    map
});

/// Render the registry as a markdown reference, grouped by category.
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(4_000);
    output.push_str("# Calculator Formulas\n\n");

    for category in Formula::all_categories() {
        let formulas = Formula::in_category(category);
        if formulas.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for formula in formulas {
            let meta = formula.metadata();
            output.push_str(&format!("### {} ({})\n\n", meta.name, meta.short_name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula));

            if !meta.variables.is_empty() {
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));

            for note in &meta.notes {
                output.push_str(&format!("- {}\n", note));
            }
            output.push_str("\n---\n\n");
        }
    }

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_formulas_have_metadata() {
        assert_eq!(ALL_FORMULAS.len(), 6);
        for formula in ALL_FORMULAS {
            let meta = formula.metadata();
            assert!(!meta.name.is_empty(), "Formula {:?} has no name", formula);
            assert!(!meta.formula.is_empty(), "Formula {:?} has no formula", formula);
            assert!(!meta.variables.is_empty(), "Formula {:?} has no variables", formula);
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(Formula::from_name("bcr").unwrap(), Formula::Bcr);
        assert_eq!(Formula::from_name("  NPV ").unwrap(), Formula::Npv);
        assert_eq!(Formula::from_name("reorder-point").unwrap(), Formula::ReorderPoint);
        assert_eq!(Formula::from_name("dose").unwrap(), Formula::Dosage);
    }

    #[test]
    fn test_unknown_name() {
        let err = Formula::from_name("ibuprofen").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_FORMULA");
    }

    #[test]
    fn test_cli_names_round_trip() {
        for formula in ALL_FORMULAS {
            assert_eq!(Formula::from_name(formula.cli_name()).unwrap(), *formula);
        }
    }

    #[test]
    fn test_every_formula_is_in_a_category() {
        let total: usize = Formula::all_categories()
            .into_iter()
            .map(|c| Formula::in_category(c).len())
            .sum();
        assert_eq!(total, ALL_FORMULAS.len());
    }

    #[test]
    fn test_category_listing_order() {
        let categories = Formula::all_categories();
        assert_eq!(categories.first(), Some(&FormulaCategory::Financial));
        assert_eq!(categories.last(), Some(&FormulaCategory::Clinical));
        assert_eq!(categories.len(), 4);
    }

    #[test]
    fn test_markdown_contains_categories() {
        let markdown = generate_formulas_markdown();
        assert!(markdown.contains("## Financial"));
        assert!(markdown.contains("## Stock Procurement"));
        assert!(markdown.contains("Economic Order Quantity (EOQ)"));
        assert!(markdown.contains("USP General Chapter <1216>"));
    }
}
