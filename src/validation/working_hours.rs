//! Working-hours validation.
//!
//! This module checks the daily and weekly hour caps and the three
//! overtime ceilings (weekly, 4-week, yearly). Overtime accrues per shift
//! against the daily cap, not against a weekly baseline.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::config::ComplianceConfig;
use crate::models::{AffectedPeriod, HoursScope, ShiftData, Violation};

/// Sums the worked hours of a user's shifts starting inside `[start, end)`.
fn hours_in_window(
    user_id: &str,
    shifts: &[&ShiftData],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Decimal {
    shifts
        .iter()
        .filter(|s| s.user_id == user_id && s.start_time >= start && s.start_time < end)
        .map(|s| s.worked_hours())
        .sum()
}

/// Sums per-shift overtime for shifts starting inside `[start, end)`.
///
/// A shift's overtime is the portion of its worked hours beyond the daily
/// cap; shifts at or under the cap contribute nothing.
fn overtime_in_window(
    user_id: &str,
    shifts: &[ShiftData],
    start: NaiveDateTime,
    end: NaiveDateTime,
    config: &ComplianceConfig,
) -> Decimal {
    shifts
        .iter()
        .filter(|s| s.user_id == user_id && s.start_time >= start && s.start_time < end)
        .map(|s| (s.worked_hours() - config.max_daily_hours).max(Decimal::ZERO))
        .sum()
}

/// Checks the daily hour cap for a candidate shift.
///
/// Two independent checks, both of which may fire:
/// 1. the candidate's own worked hours must not exceed the daily cap;
/// 2. the sum of the employee's shifts starting inside the calendar day
///    `[00:00, 24:00)` containing the candidate's start must not exceed
///    the daily cap.
pub fn validate_daily_hours(
    new_shift: &ShiftData,
    existing_shifts: &[ShiftData],
    config: &ComplianceConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    let shift_hours = new_shift.worked_hours();
    if shift_hours > config.max_daily_hours {
        violations.push(Violation::WorkingHours {
            scope: HoursScope::Daily,
            limit_hours: config.max_daily_hours,
            actual_hours: shift_hours,
            affected_period: AffectedPeriod {
                start: new_shift.start_time,
                end: new_shift.end_time,
            },
        });
    }

    let day_start = new_shift
        .start_date()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time");
    let day_end = day_start + Duration::days(1);

    let mut timeline: Vec<&ShiftData> = existing_shifts.iter().collect();
    timeline.push(new_shift);
    let day_hours = hours_in_window(&new_shift.user_id, &timeline, day_start, day_end);
    if day_hours > config.max_daily_hours {
        violations.push(Violation::WorkingHours {
            scope: HoursScope::Daily,
            limit_hours: config.max_daily_hours,
            actual_hours: day_hours,
            affected_period: AffectedPeriod {
                start: day_start,
                end: day_end,
            },
        });
    }

    violations
}

/// Checks the weekly hour cap for a candidate shift.
///
/// Hours are summed over the 7-day window starting at the candidate's
/// start date. The window follows the shift, not the calendar week.
pub fn validate_weekly_hours(
    new_shift: &ShiftData,
    existing_shifts: &[ShiftData],
    config: &ComplianceConfig,
) -> Vec<Violation> {
    let week_start = new_shift
        .start_date()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time");
    let week_end = week_start + Duration::days(7);

    let mut timeline: Vec<&ShiftData> = existing_shifts.iter().collect();
    timeline.push(new_shift);
    let week_hours = hours_in_window(&new_shift.user_id, &timeline, week_start, week_end);

    if week_hours > config.max_weekly_hours {
        vec![Violation::WorkingHours {
            scope: HoursScope::Weekly,
            limit_hours: config.max_weekly_hours,
            actual_hours: week_hours,
            affected_period: AffectedPeriod {
                start: week_start,
                end: week_end,
            },
        }]
    } else {
        Vec::new()
    }
}

/// Checks the three overtime ceilings as of a reference date.
///
/// Three independent horizons are evaluated over the full shift set:
/// weekly `[ref, ref+7d)`, 4-week `[ref, ref+28d)`, and yearly
/// `[ref-1y, ref]`. Overtime accrues per shift against the daily cap and
/// is compared against the corresponding ceiling per horizon.
pub fn validate_overtime_limits(
    user_id: &str,
    shifts: &[ShiftData],
    reference_date: NaiveDate,
    config: &ComplianceConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    let ref_start = reference_date
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time");

    let horizons = [
        (
            HoursScope::OvertimeWeekly,
            ref_start,
            ref_start + Duration::days(7),
            config.max_overtime_per_week,
        ),
        (
            HoursScope::Overtime4Weeks,
            ref_start,
            ref_start + Duration::days(28),
            config.max_overtime_per_4_weeks,
        ),
        (
            HoursScope::OvertimeYearly,
            ref_start - Duration::days(365),
            ref_start + Duration::days(1),
            config.max_overtime_per_year,
        ),
    ];

    for (scope, start, end, ceiling) in horizons {
        let overtime = overtime_in_window(user_id, shifts, start, end, config);
        if overtime > ceiling {
            violations.push(Violation::WorkingHours {
                scope,
                limit_hours: ceiling,
                actual_hours: overtime,
                affected_period: AffectedPeriod { start, end },
            });
        }
    }

    violations
}

/// Runs all working-hours checks for a candidate shift.
///
/// Order: daily, weekly, then the overtime ceilings with the candidate's
/// start date as the reference. The overtime check sees the candidate
/// merged into the existing shift set.
pub fn validate_all_working_hours(
    new_shift: &ShiftData,
    existing_shifts: &[ShiftData],
    config: &ComplianceConfig,
) -> Vec<Violation> {
    let mut violations = validate_daily_hours(new_shift, existing_shifts, config);
    violations.extend(validate_weekly_hours(new_shift, existing_shifts, config));

    let mut merged = existing_shifts.to_vec();
    merged.push(new_shift.clone());
    violations.extend(validate_overtime_limits(
        &new_shift.user_id,
        &merged,
        new_shift.start_date(),
        config,
    ));

    violations
}
