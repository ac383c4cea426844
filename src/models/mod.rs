//! Core data models for the Labor Compliance & Cost Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod cost;
mod shift;
mod violation;

pub use cost::{CostVariance, LaborCost};
pub use shift::ShiftData;
pub use violation::{AffectedPeriod, HoursScope, RestScope, Violation};
