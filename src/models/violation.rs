//! Compliance violation types.
//!
//! Violations are pure reports: validators recompute them on every call and
//! the engine never persists them. The two concrete shapes share a `type`
//! discriminant in their serialized form so downstream consumers can branch
//! on it without knowing the full enum.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The window a rest-period violation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestScope {
    /// Rest between two consecutive shifts.
    Daily,
    /// Longest continuous rest inside a rolling 7-day window.
    Weekly,
}

/// The horizon a working-hours violation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursScope {
    /// Hours within one calendar day, or a single shift's own duration.
    Daily,
    /// Hours within a rolling 7-day window.
    Weekly,
    /// Overtime accrued within a rolling 7-day window.
    OvertimeWeekly,
    /// Overtime accrued within a rolling 28-day window.
    #[serde(rename = "overtime_4_weeks")]
    Overtime4Weeks,
    /// Overtime accrued within a rolling year.
    OvertimeYearly,
}

/// The time span a working-hours violation was measured over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectedPeriod {
    /// Start of the measured span (inclusive).
    pub start: NaiveDateTime,
    /// End of the measured span (exclusive).
    pub end: NaiveDateTime,
}

/// A compliance finding produced by one of the validators.
///
/// The `actual` field is always the measured value that triggered the
/// violation; `required`/`limit` is always the configured value in force at
/// evaluation time.
///
/// # Example
///
/// ```
/// use compliance_engine::models::{RestScope, Violation};
/// use rust_decimal::Decimal;
///
/// let violation = Violation::RestPeriod {
///     scope: RestScope::Daily,
///     required_rest_hours: Decimal::from(11),
///     actual_rest_hours: Decimal::from(8),
///     affected_shift_ids: vec!["shift_001".to_string(), "shift_002".to_string()],
/// };
/// let json = serde_json::to_string(&violation).unwrap();
/// assert!(json.contains("\"type\":\"rest_period\""));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Violation {
    /// A continuous-rest requirement was not met.
    RestPeriod {
        /// Whether the daily or the weekly rest requirement was breached.
        scope: RestScope,
        /// The configured minimum rest in hours.
        required_rest_hours: Decimal,
        /// The measured rest in hours.
        actual_rest_hours: Decimal,
        /// The shifts bounding or occupying the deficient rest window.
        affected_shift_ids: Vec<String>,
    },
    /// A working-hours or overtime cap was exceeded.
    WorkingHours {
        /// The horizon the cap applies to.
        scope: HoursScope,
        /// The configured cap in hours.
        limit_hours: Decimal,
        /// The measured hours.
        actual_hours: Decimal,
        /// The span the hours were summed over.
        affected_period: AffectedPeriod,
    },
}

impl Violation {
    /// Returns the serialized discriminant of the violation.
    pub fn type_label(&self) -> &'static str {
        match self {
            Violation::RestPeriod { .. } => "rest_period",
            Violation::WorkingHours { .. } => "working_hours",
        }
    }

    /// Returns a stable `type_scope` key used for report breakdowns.
    pub fn breakdown_key(&self) -> &'static str {
        match self {
            Violation::RestPeriod {
                scope: RestScope::Daily,
                ..
            } => "rest_period_daily",
            Violation::RestPeriod {
                scope: RestScope::Weekly,
                ..
            } => "rest_period_weekly",
            Violation::WorkingHours { scope, .. } => match scope {
                HoursScope::Daily => "working_hours_daily",
                HoursScope::Weekly => "working_hours_weekly",
                HoursScope::OvertimeWeekly => "overtime_weekly",
                HoursScope::Overtime4Weeks => "overtime_4_weeks",
                HoursScope::OvertimeYearly => "overtime_yearly",
            },
        }
    }

    /// Returns a human-readable one-line description of the violation.
    ///
    /// Used for report detail rows, CSV export, and visual indicators.
    pub fn summary(&self) -> String {
        match self {
            Violation::RestPeriod {
                scope,
                required_rest_hours,
                actual_rest_hours,
                ..
            } => {
                let window = match scope {
                    RestScope::Daily => "between shifts",
                    RestScope::Weekly => "within the 7-day window",
                };
                format!(
                    "Rest of {} hours {} is below the required {} hours",
                    actual_rest_hours.normalize(),
                    window,
                    required_rest_hours.normalize()
                )
            }
            Violation::WorkingHours {
                scope,
                limit_hours,
                actual_hours,
                ..
            } => {
                let horizon = match scope {
                    HoursScope::Daily => "Daily hours",
                    HoursScope::Weekly => "Weekly hours",
                    HoursScope::OvertimeWeekly => "Weekly overtime",
                    HoursScope::Overtime4Weeks => "4-week overtime",
                    HoursScope::OvertimeYearly => "Yearly overtime",
                };
                format!(
                    "{} of {} exceeds the {} hour limit",
                    horizon,
                    actual_hours.normalize(),
                    limit_hours.normalize()
                )
            }
        }
    }

    /// Returns how far past the limit (or short of the requirement) the
    /// measured value is, in hours. Always non-negative.
    pub fn excess_hours(&self) -> Decimal {
        match self {
            Violation::RestPeriod {
                required_rest_hours,
                actual_rest_hours,
                ..
            } => (*required_rest_hours - *actual_rest_hours).max(Decimal::ZERO),
            Violation::WorkingHours {
                limit_hours,
                actual_hours,
                ..
            } => (*actual_hours - *limit_hours).max(Decimal::ZERO),
        }
    }
}
