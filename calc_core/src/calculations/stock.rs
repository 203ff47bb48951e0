//! # Stock Procurement Calculations
//!
//! Two independent inventory calculations shown side by side:
//!
//! - **Reorder point** - when to order (inventory level trigger)
//! - **Economic order quantity** - how much to order
//!
//! Both return whole units.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::stock::{calculate_eoq, calculate_reorder_point, EoqInput, ReorderPointInput};
//!
//! let rop = calculate_reorder_point(&ReorderPointInput {
//!     label: "Amoxicillin 500mg".to_string(),
//!     average_daily_usage: 10.0,
//!     lead_time_days: 5.0,
//!     safety_stock: 20.0,
//! }).unwrap();
//! assert_eq!(rop.reorder_point, 70);
//!
//! let eoq = calculate_eoq(&EoqInput {
//!     label: "Amoxicillin 500mg".to_string(),
//!     annual_demand: 1000.0,
//!     order_cost: 50.0,
//!     holding_cost: 2.0,
//! }).unwrap();
//! assert_eq!(eoq.eoq, 224);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{require_non_negative, require_positive};
use crate::equations::{self, round2};
use crate::errors::CalcResult;
use crate::interpretation::{eoq_advice, reorder_point_advice};

// ============================================================================
// Reorder Point
// ============================================================================

/// Input parameters for a reorder point.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Amoxicillin 500mg",
///   "average_daily_usage": 10.0,
///   "lead_time_days": 5.0,
///   "safety_stock": 20.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderPointInput {
    /// User label (e.g., product name)
    #[serde(default)]
    pub label: String,

    /// Average units used or sold per day
    pub average_daily_usage: f64,

    /// Days between placing an order and receiving it
    pub lead_time_days: f64,

    /// Buffer stock held against demand spikes or supply delays (units)
    #[serde(default)]
    pub safety_stock: f64,
}

impl ReorderPointInput {
    /// Validate input parameters. Safety stock may be zero.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("average_daily_usage", self.average_daily_usage)?;
        require_positive("lead_time_days", self.lead_time_days)?;
        require_non_negative("safety_stock", self.safety_stock)?;
        Ok(())
    }

    /// Expected consumption during the lead time (d × L), unrounded
    pub fn lead_time_demand(&self) -> f64 {
        self.average_daily_usage * self.lead_time_days
    }
}

/// Results from a reorder point calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderPointResult {
    /// Inventory level (units) that triggers a new order
    pub reorder_point: i64,

    /// Lead-time demand d × L, rounded to 2 decimals
    pub lead_time_demand: f64,

    /// Actionable recommendation
    pub recommendation: String,
}

/// Calculate the reorder point.
pub fn calculate_reorder_point(input: &ReorderPointInput) -> CalcResult<ReorderPointResult> {
    input.validate()?;
    tracing::debug!(label = %input.label, "calculating reorder point");

    let reorder_point =
        equations::reorder_point(input.average_daily_usage, input.lead_time_days, input.safety_stock)?;

    Ok(ReorderPointResult {
        reorder_point,
        lead_time_demand: round2(input.lead_time_demand()),
        recommendation: reorder_point_advice(reorder_point),
    })
}

// ============================================================================
// Economic Order Quantity
// ============================================================================

/// Input parameters for an economic order quantity.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Amoxicillin 500mg",
///   "annual_demand": 1000.0,
///   "order_cost": 50.0,
///   "holding_cost": 2.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EoqInput {
    /// User label (e.g., product name)
    #[serde(default)]
    pub label: String,

    /// Units used or sold per year
    pub annual_demand: f64,

    /// Fixed cost of placing one order
    pub order_cost: f64,

    /// Cost of holding one unit for a year (storage, insurance, capital)
    pub holding_cost: f64,
}

impl EoqInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("annual_demand", self.annual_demand)?;
        require_positive("order_cost", self.order_cost)?;
        require_positive("holding_cost", self.holding_cost)?;
        Ok(())
    }
}

/// Results from an economic order quantity calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EoqResult {
    /// Units per order
    pub eoq: u64,

    /// D / EOQ, rounded to 2 decimals
    pub orders_per_year: f64,

    /// Ordering plus holding cost per year at the EOQ: (D/Q)·S + (Q/2)·H
    pub annual_inventory_cost: f64,

    /// Actionable recommendation
    pub recommendation: String,
}

/// Calculate the economic order quantity.
pub fn calculate_eoq(input: &EoqInput) -> CalcResult<EoqResult> {
    input.validate()?;
    tracing::debug!(label = %input.label, "calculating EOQ");

    let eoq = equations::eoq(input.annual_demand, input.order_cost, input.holding_cost)?;
    let q = eoq as f64;
    let orders_per_year = input.annual_demand / q;
    let annual_inventory_cost = orders_per_year * input.order_cost + q / 2.0 * input.holding_cost;

    Ok(EoqResult {
        eoq,
        orders_per_year: round2(orders_per_year),
        annual_inventory_cost: round2(annual_inventory_cost),
        recommendation: eoq_advice(eoq),
    })
}
