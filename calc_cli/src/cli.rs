//! Command-line definition.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use calc_core::calculations::{
    BcrInput, CalculationItem, DosageInput, EoqInput, FriabilityInput, NpvInput, ReorderPointInput,
};
use calc_core::calculations::npv::DEFAULT_DISCOUNT_RATE_PERCENT;
use calc_core::units::{StrengthUnit, VolumeUnit};

#[derive(Debug, Parser)]
#[command(
    name = "calc_cli",
    version,
    about = "Pharmacy and business calculators"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./.calc.toml when present)
    #[arg(long, global = true, env = "CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Locale used for currency formatting (e.g. en-US, de-DE)
    #[arg(long, global = true, env = "CALC_LOCALE")]
    pub locale: Option<String>,

    /// Override the currency symbol
    #[arg(long, global = true, env = "CALC_CURRENCY_SYMBOL")]
    pub currency_symbol: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Benefit-cost ratio
    Bcr(BcrArgs),
    /// Net present value of yearly cash flows
    Npv(NpvArgs),
    /// Tablet friability (percentage weight loss)
    Friability(FriabilityArgs),
    /// Inventory reorder point
    Rop(RopArgs),
    /// Economic order quantity
    Eoq(EoqArgs),
    /// Volume of stock delivering a prescribed dose
    Dosage(DosageArgs),
    /// Evaluate a JSON calculation item from a file ("-" for stdin)
    Eval {
        /// Path to a JSON file containing a tagged calculation item
        path: PathBuf,
    },
    /// List available calculators
    List {
        /// Print the full formula reference as markdown
        #[arg(long)]
        markdown: bool,
    },
    /// Show the formula and variables behind a calculator
    Explain {
        /// Calculator name (e.g. bcr, npv, eoq)
        name: String,
    },
    /// Prompt for inputs interactively (default)
    Interactive,
}

#[derive(Debug, Args)]
pub struct BcrArgs {
    /// Total monetary benefits
    #[arg(long, allow_negative_numbers = true)]
    pub benefits: f64,
    /// Total monetary costs
    #[arg(long, allow_negative_numbers = true)]
    pub costs: f64,
    #[arg(long, default_value = "")]
    pub label: String,
}

#[derive(Debug, Args)]
pub struct NpvArgs {
    /// Upfront investment (positive amount)
    #[arg(long, allow_negative_numbers = true)]
    pub initial_investment: f64,
    /// Cash flows for years 1..n, comma separated
    #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    pub cash_flows: Vec<f64>,
    /// Discount rate in percent
    #[arg(long, default_value_t = DEFAULT_DISCOUNT_RATE_PERCENT, allow_negative_numbers = true)]
    pub discount_rate: f64,
    #[arg(long, default_value = "")]
    pub label: String,
}

#[derive(Debug, Args)]
pub struct FriabilityArgs {
    /// Sample weight before tumbling (g)
    #[arg(long, allow_negative_numbers = true)]
    pub initial_weight: f64,
    /// Sample weight after tumbling (g)
    #[arg(long, allow_negative_numbers = true)]
    pub final_weight: f64,
    #[arg(long, default_value = "")]
    pub label: String,
}

#[derive(Debug, Args)]
pub struct RopArgs {
    /// Average units used per day
    #[arg(long, allow_negative_numbers = true)]
    pub daily_usage: f64,
    /// Lead time in days
    #[arg(long, allow_negative_numbers = true)]
    pub lead_time: f64,
    /// Safety stock in units
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub safety_stock: f64,
    #[arg(long, default_value = "")]
    pub label: String,
}

#[derive(Debug, Args)]
pub struct EoqArgs {
    /// Units used per year
    #[arg(long, allow_negative_numbers = true)]
    pub annual_demand: f64,
    /// Cost per order
    #[arg(long, allow_negative_numbers = true)]
    pub order_cost: f64,
    /// Holding cost per unit per year
    #[arg(long, allow_negative_numbers = true)]
    pub holding_cost: f64,
    #[arg(long, default_value = "")]
    pub label: String,
}

#[derive(Debug, Args)]
pub struct DosageArgs {
    /// Drug amount per stock volume
    #[arg(long, allow_negative_numbers = true)]
    pub stock_strength: f64,
    /// Prescribed dose (same unit as the strength)
    #[arg(long, allow_negative_numbers = true)]
    pub dose: f64,
    /// Stock volume the strength refers to
    #[arg(long, allow_negative_numbers = true)]
    pub volume: f64,
    /// mg, mcg, g or %
    #[arg(long, default_value = "mg")]
    pub strength_unit: StrengthUnit,
    /// mL, L or cc
    #[arg(long, default_value = "mL")]
    pub volume_unit: VolumeUnit,
    #[arg(long, default_value = "")]
    pub label: String,
}

impl Command {
    /// Calculation item for the calculator subcommands; `None` for the rest.
    pub fn to_item(&self) -> Option<CalculationItem> {
        let item = match self {
            Command::Bcr(a) => CalculationItem::Bcr(BcrInput {
                label: a.label.clone(),
                benefits: a.benefits,
                costs: a.costs,
            }),
            Command::Npv(a) => CalculationItem::Npv(NpvInput {
                label: a.label.clone(),
                initial_investment: a.initial_investment,
                cash_flows: a.cash_flows.clone(),
                discount_rate_percent: a.discount_rate,
            }),
            Command::Friability(a) => CalculationItem::Friability(FriabilityInput {
                label: a.label.clone(),
                initial_weight_g: a.initial_weight,
                final_weight_g: a.final_weight,
            }),
            Command::Rop(a) => CalculationItem::ReorderPoint(ReorderPointInput {
                label: a.label.clone(),
                average_daily_usage: a.daily_usage,
                lead_time_days: a.lead_time,
                safety_stock: a.safety_stock,
            }),
            Command::Eoq(a) => CalculationItem::Eoq(EoqInput {
                label: a.label.clone(),
                annual_demand: a.annual_demand,
                order_cost: a.order_cost,
                holding_cost: a.holding_cost,
            }),
            Command::Dosage(a) => CalculationItem::Dosage(DosageInput {
                label: a.label.clone(),
                stock_strength: a.stock_strength,
                strength_unit: a.strength_unit,
                prescribed_dose: a.dose,
                volume: a.volume,
                volume_unit: a.volume_unit,
            }),
            Command::Eval { .. } | Command::List { .. } | Command::Explain { .. } | Command::Interactive => {
                return None
            }
        };
        Some(item)
    }
}
