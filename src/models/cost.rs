//! Labor cost models.
//!
//! This module contains the [`LaborCost`] breakdown produced by the cost
//! calculator and the [`CostVariance`] comparison against a budget. Both are
//! derived values: the engine computes them on demand and never stores them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The regular/overtime breakdown of a shift or shift set.
///
/// Invariants, both at 2-decimal rounding:
/// `total_hours = regular_hours + overtime_hours` and
/// `total_cost = regular_cost + overtime_cost`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborCost {
    /// The hourly rate the cost was computed from. Zero when the underlying
    /// shifts carry no rate or mix different rates.
    pub hourly_rate: Decimal,
    /// Total worked hours.
    pub total_hours: Decimal,
    /// Hours up to the daily cap.
    pub regular_hours: Decimal,
    /// Hours beyond the daily cap.
    pub overtime_hours: Decimal,
    /// Cost of the regular hours.
    pub regular_cost: Decimal,
    /// Cost of the overtime hours, premium included.
    pub overtime_cost: Decimal,
    /// Total cost of the shift or shift set.
    pub total_cost: Decimal,
    /// The premium multiplier applied to overtime hours.
    pub overtime_multiplier: Decimal,
}

/// The outcome of comparing actual labor cost against a budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostVariance {
    /// `actual - budgeted`. Positive when over budget.
    pub variance: Decimal,
    /// Variance as a percentage of the budget; 0 when the budget is not
    /// positive.
    pub variance_percentage: Decimal,
    /// Whether the actual cost exceeded the budget.
    pub is_over_budget: bool,
}
