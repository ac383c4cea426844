//! Compliance validators.
//!
//! This module contains the rest-period and working-hours validators. All
//! functions are pure: they take a shift set and the active statutory
//! limits, and return an ordered list of violations. An empty list means
//! the input is compliant.

mod rest_period;
mod working_hours;

pub use rest_period::{validate_all_rest_periods, validate_daily_rest, validate_weekly_rest};
pub use working_hours::{
    validate_all_working_hours, validate_daily_hours, validate_overtime_limits,
    validate_weekly_hours,
};
