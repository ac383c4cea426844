//! Visual compliance indicators.
//!
//! Thin presentation mapper turning violations and summary counts into
//! severity-tagged indicators for UI badges. Pure threshold
//! classification; the business logic stays in the validators.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RestScope, Violation};

/// Severity tier of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational; warnings only.
    Low,
    /// A modest breach.
    Medium,
    /// A serious breach.
    High,
    /// A severe breach requiring immediate attention.
    Critical,
}

/// Overall status of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStatus {
    /// No violations, no warnings.
    Compliant,
    /// No violations, but warnings present.
    Warning,
    /// At least one violation.
    Violation,
}

/// A human-facing compliance indicator. Serialize-only: indicators are
/// produced for the UI, never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceIndicator {
    /// The overall status.
    pub status: IndicatorStatus,
    /// Display color hint.
    pub color: &'static str,
    /// Severity tier.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Suggested remediations, most direct first.
    pub quick_fixes: Vec<String>,
}

fn color_for(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "red",
        Severity::High => "orange",
        Severity::Medium => "yellow",
        Severity::Low => "blue",
    }
}

/// Classifies how far a limit was missed: more than 5 hours is critical,
/// more than 2 is high, anything else medium.
fn severity_for_excess(excess: Decimal) -> Severity {
    if excess > Decimal::from(5) {
        Severity::Critical
    } else if excess > Decimal::from(2) {
        Severity::High
    } else {
        Severity::Medium
    }
}

fn quick_fixes_for(violation: &Violation) -> Vec<String> {
    match violation {
        Violation::RestPeriod {
            scope: RestScope::Daily,
            ..
        } => vec![
            "Move the shift start later to restore the rest break".to_string(),
            "Assign the shift to another employee".to_string(),
        ],
        Violation::RestPeriod {
            scope: RestScope::Weekly,
            ..
        } => vec![
            "Schedule a full day off inside the week".to_string(),
            "Swap shifts with a colleague to open a rest window".to_string(),
        ],
        Violation::WorkingHours { .. } => vec![
            "Shorten the shift or split it between employees".to_string(),
            "Move hours to a lighter week".to_string(),
        ],
    }
}

/// Maps a single violation to a severity-tagged indicator.
///
/// # Example
///
/// ```
/// use compliance_engine::models::{RestScope, Violation};
/// use compliance_engine::visual::{indicator_for_violation, Severity};
/// use rust_decimal::Decimal;
///
/// let violation = Violation::RestPeriod {
///     scope: RestScope::Daily,
///     required_rest_hours: Decimal::from(11),
///     actual_rest_hours: Decimal::from(4),
///     affected_shift_ids: vec![],
/// };
/// // 7 hours short of the requirement.
/// let indicator = indicator_for_violation(&violation);
/// assert_eq!(indicator.severity, Severity::Critical);
/// assert_eq!(indicator.color, "red");
/// ```
pub fn indicator_for_violation(violation: &Violation) -> ComplianceIndicator {
    let severity = severity_for_excess(violation.excess_hours());
    ComplianceIndicator {
        status: IndicatorStatus::Violation,
        color: color_for(severity),
        severity,
        message: violation.summary(),
        quick_fixes: quick_fixes_for(violation),
    }
}

/// Maps summary counts to an overall indicator.
///
/// More than 5 violations is critical, 3 to 5 high, 1 or 2 medium. With
/// no violations but warnings present the status is
/// [`IndicatorStatus::Warning`] at low severity; otherwise compliant.
pub fn summary_indicator(violation_count: u32, warning_count: u32) -> ComplianceIndicator {
    if violation_count == 0 {
        return if warning_count > 0 {
            ComplianceIndicator {
                status: IndicatorStatus::Warning,
                color: color_for(Severity::Low),
                severity: Severity::Low,
                message: format!("{} shifts are close to a statutory limit", warning_count),
                quick_fixes: vec!["Review the flagged shifts before publishing".to_string()],
            }
        } else {
            ComplianceIndicator {
                status: IndicatorStatus::Compliant,
                color: "green",
                severity: Severity::Low,
                message: "All shifts comply with statutory limits".to_string(),
                quick_fixes: Vec::new(),
            }
        };
    }

    let severity = if violation_count > 5 {
        Severity::Critical
    } else if violation_count >= 3 {
        Severity::High
    } else {
        Severity::Medium
    };

    ComplianceIndicator {
        status: IndicatorStatus::Violation,
        color: color_for(severity),
        severity,
        message: format!("{} compliance violations found", violation_count),
        quick_fixes: vec!["Open the compliance report for affected employees".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AffectedPeriod, HoursScope};
    use chrono::NaiveDateTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rest_violation(actual: &str) -> Violation {
        Violation::RestPeriod {
            scope: RestScope::Daily,
            required_rest_hours: dec("11"),
            actual_rest_hours: dec(actual),
            affected_shift_ids: vec![],
        }
    }

    fn hours_violation(actual: &str) -> Violation {
        let dt = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
        Violation::WorkingHours {
            scope: HoursScope::Daily,
            limit_hours: dec("9"),
            actual_hours: dec(actual),
            affected_period: AffectedPeriod {
                start: dt("2026-03-02 00:00:00"),
                end: dt("2026-03-03 00:00:00"),
            },
        }
    }

    #[test]
    fn test_rest_shortfall_over_5_hours_is_critical() {
        let indicator = indicator_for_violation(&rest_violation("5"));
        assert_eq!(indicator.severity, Severity::Critical);
        assert_eq!(indicator.color, "red");
        assert_eq!(indicator.status, IndicatorStatus::Violation);
    }

    #[test]
    fn test_rest_shortfall_over_2_hours_is_high() {
        let indicator = indicator_for_violation(&rest_violation("8"));
        assert_eq!(indicator.severity, Severity::High);
        assert_eq!(indicator.color, "orange");
    }

    #[test]
    fn test_small_rest_shortfall_is_medium() {
        let indicator = indicator_for_violation(&rest_violation("10"));
        assert_eq!(indicator.severity, Severity::Medium);
        assert_eq!(indicator.color, "yellow");
    }

    #[test]
    fn test_hours_excess_uses_same_tiers() {
        assert_eq!(
            indicator_for_violation(&hours_violation("15")).severity,
            Severity::Critical
        );
        assert_eq!(
            indicator_for_violation(&hours_violation("12")).severity,
            Severity::High
        );
        assert_eq!(
            indicator_for_violation(&hours_violation("10")).severity,
            Severity::Medium
        );
    }

    #[test]
    fn test_violation_indicator_has_quick_fixes() {
        let indicator = indicator_for_violation(&rest_violation("8"));
        assert!(!indicator.quick_fixes.is_empty());
    }

    #[test]
    fn test_summary_zero_counts_is_compliant() {
        let indicator = summary_indicator(0, 0);
        assert_eq!(indicator.status, IndicatorStatus::Compliant);
        assert_eq!(indicator.color, "green");
        assert!(indicator.quick_fixes.is_empty());
    }

    #[test]
    fn test_summary_warnings_only_is_low_warning() {
        let indicator = summary_indicator(0, 3);
        assert_eq!(indicator.status, IndicatorStatus::Warning);
        assert_eq!(indicator.severity, Severity::Low);
    }

    #[test]
    fn test_summary_violation_tiers() {
        assert_eq!(summary_indicator(1, 0).severity, Severity::Medium);
        assert_eq!(summary_indicator(2, 0).severity, Severity::Medium);
        assert_eq!(summary_indicator(3, 0).severity, Severity::High);
        assert_eq!(summary_indicator(5, 0).severity, Severity::High);
        assert_eq!(summary_indicator(6, 0).severity, Severity::Critical);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }
}
