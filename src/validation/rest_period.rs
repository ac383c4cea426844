//! Rest-period validation.
//!
//! This module checks the daily (continuous rest between consecutive
//! shifts) and weekly (longest continuous rest inside a rolling 7-day
//! window) rest requirements against a shift set.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use crate::config::ComplianceConfig;
use crate::models::{RestScope, ShiftData, Violation};

/// Returns the non-negative span between two instants as decimal hours.
fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> Decimal {
    let minutes = (to - from).num_minutes().max(0);
    Decimal::from(minutes) / Decimal::from(60)
}

/// Checks the rest gaps immediately before and after a candidate shift.
///
/// The candidate is merged with the employee's existing shifts, the
/// timeline is sorted by start time, and the gap to the immediate
/// predecessor and successor is measured independently. Each gap shorter
/// than the configured daily minimum produces one violation, so a shift
/// squeezed between two close neighbours can violate in both directions.
/// The first/last shift in the timeline skips the missing-neighbour side.
///
/// # Example
///
/// ```
/// use compliance_engine::config::ComplianceConfig;
/// use compliance_engine::models::ShiftData;
/// use compliance_engine::validation::validate_daily_rest;
/// use chrono::NaiveDateTime;
///
/// let dt = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let evening = ShiftData::new(
///     Some("s1".into()), "u1".into(),
///     dt("2026-03-02 14:00:00"), dt("2026-03-02 22:00:00"), 0, None,
/// ).unwrap();
/// let morning = ShiftData::new(
///     Some("s2".into()), "u1".into(),
///     dt("2026-03-03 06:00:00"), dt("2026-03-03 14:00:00"), 0, None,
/// ).unwrap();
///
/// // 8 hours between 22:00 and 06:00 is below the 11 hour minimum.
/// let violations = validate_daily_rest(&morning, &[evening], &ComplianceConfig::default());
/// assert_eq!(violations.len(), 1);
/// ```
pub fn validate_daily_rest(
    new_shift: &ShiftData,
    existing_shifts: &[ShiftData],
    config: &ComplianceConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut timeline: Vec<&ShiftData> = existing_shifts
        .iter()
        .filter(|s| s.user_id == new_shift.user_id)
        .collect();
    timeline.push(new_shift);
    timeline.sort_by_key(|s| s.start_time);

    let position = timeline
        .iter()
        .position(|s| std::ptr::eq(*s, new_shift))
        .expect("candidate shift is in the timeline");

    if position > 0 {
        let predecessor = timeline[position - 1];
        let rest = hours_between(predecessor.end_time, new_shift.start_time);
        if rest < config.min_daily_rest_hours {
            violations.push(Violation::RestPeriod {
                scope: RestScope::Daily,
                required_rest_hours: config.min_daily_rest_hours,
                actual_rest_hours: rest,
                affected_shift_ids: vec![
                    predecessor.display_id().to_string(),
                    new_shift.display_id().to_string(),
                ],
            });
        }
    }

    if position + 1 < timeline.len() {
        let successor = timeline[position + 1];
        let rest = hours_between(new_shift.end_time, successor.start_time);
        if rest < config.min_daily_rest_hours {
            violations.push(Violation::RestPeriod {
                scope: RestScope::Daily,
                required_rest_hours: config.min_daily_rest_hours,
                actual_rest_hours: rest,
                affected_shift_ids: vec![
                    new_shift.display_id().to_string(),
                    successor.display_id().to_string(),
                ],
            });
        }
    }

    violations
}

/// Checks the weekly continuous-rest requirement over a period.
///
/// A 7-day window slides one day at a time across `[period_start,
/// period_end]`. For every window containing at least one of the
/// employee's shifts, the longest continuous rest inside the window is
/// computed: the gap before the first shift, the gaps between consecutive
/// shifts, and the gap after the last shift, with shifts clamped to the
/// window. A window whose longest rest falls short of the configured
/// weekly minimum produces one violation. Windows are anchored to the
/// period start, not to calendar weeks.
pub fn validate_weekly_rest(
    user_id: &str,
    shifts: &[ShiftData],
    period_start: NaiveDateTime,
    period_end: NaiveDateTime,
    config: &ComplianceConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut user_shifts: Vec<&ShiftData> =
        shifts.iter().filter(|s| s.user_id == user_id).collect();
    user_shifts.sort_by_key(|s| s.start_time);

    let mut window_start = period_start;
    while window_start + Duration::days(7) <= period_end {
        let window_end = window_start + Duration::days(7);

        let in_window: Vec<&ShiftData> = user_shifts
            .iter()
            .copied()
            .filter(|s| s.end_time > window_start && s.start_time < window_end)
            .collect();

        if !in_window.is_empty() {
            let mut longest = Decimal::ZERO;
            let mut cursor = window_start;
            for shift in &in_window {
                let occupied_from = shift.start_time.max(window_start);
                let occupied_to = shift.end_time.min(window_end);
                if occupied_from > cursor {
                    longest = longest.max(hours_between(cursor, occupied_from));
                }
                cursor = cursor.max(occupied_to);
            }
            longest = longest.max(hours_between(cursor, window_end));

            if longest < config.min_weekly_rest_hours {
                violations.push(Violation::RestPeriod {
                    scope: RestScope::Weekly,
                    required_rest_hours: config.min_weekly_rest_hours,
                    actual_rest_hours: longest,
                    affected_shift_ids: in_window
                        .iter()
                        .map(|s| s.display_id().to_string())
                        .collect(),
                });
            }
        }

        window_start += Duration::days(1);
    }

    violations
}

/// Runs both rest-period checks for a candidate shift.
///
/// Returns the union of [`validate_daily_rest`] and
/// [`validate_weekly_rest`] with daily violations first, in each
/// validator's own order. The weekly check sees the candidate merged into
/// the existing shift set.
pub fn validate_all_rest_periods(
    new_shift: &ShiftData,
    existing_shifts: &[ShiftData],
    period_start: NaiveDateTime,
    period_end: NaiveDateTime,
    config: &ComplianceConfig,
) -> Vec<Violation> {
    let mut violations = validate_daily_rest(new_shift, existing_shifts, config);

    let mut merged = existing_shifts.to_vec();
    merged.push(new_shift.clone());
    violations.extend(validate_weekly_rest(
        &new_shift.user_id,
        &merged,
        period_start,
        period_end,
        config,
    ));

    violations
}
