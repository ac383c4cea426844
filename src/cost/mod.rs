//! Labor cost calculation.
//!
//! This module converts shifts into regular/overtime hour breakdowns and
//! costs, applying the configured overtime premium multiplier. Monetary
//! and hour outputs are rounded to 2 decimal places with round-half-up at
//! the output boundary; aggregation always happens on unrounded values.

mod shift_cost;
mod variance;

pub use shift_cost::{calculate_shift_cost, calculate_total_cost, estimate_weekly_cost};
pub use variance::calculate_variance;
