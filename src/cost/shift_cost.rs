//! Shift cost calculation.
//!
//! Splits worked hours into regular and overtime portions against the
//! daily cap and prices them with the overtime premium multiplier.

use chrono::Duration;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::ComplianceConfig;
use crate::models::{LaborCost, ShiftData};

/// Rounds an hour or monetary amount to 2 decimal places, half-up.
fn round_output(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Unrounded cost components, aggregated before any rounding happens.
#[derive(Debug, Clone, Copy, Default)]
struct RawCost {
    regular_hours: Decimal,
    overtime_hours: Decimal,
    regular_cost: Decimal,
    overtime_cost: Decimal,
}

impl RawCost {
    fn for_shift(shift: &ShiftData, config: &ComplianceConfig) -> Self {
        let rate = shift.rate_or_zero();
        let total_hours = shift.worked_hours();
        let regular_hours = total_hours.min(config.max_daily_hours);
        let overtime_hours = (total_hours - config.max_daily_hours).max(Decimal::ZERO);

        Self {
            regular_hours,
            overtime_hours,
            regular_cost: regular_hours * rate,
            overtime_cost: overtime_hours * rate * config.overtime_multiplier,
        }
    }

    fn add(&mut self, other: &RawCost) {
        self.regular_hours += other.regular_hours;
        self.overtime_hours += other.overtime_hours;
        self.regular_cost += other.regular_cost;
        self.overtime_cost += other.overtime_cost;
    }

    /// Rounds the components and derives the totals from the rounded
    /// values, so the breakdown invariants hold exactly.
    fn into_labor_cost(self, hourly_rate: Decimal, multiplier: Decimal) -> LaborCost {
        let regular_hours = round_output(self.regular_hours);
        let overtime_hours = round_output(self.overtime_hours);
        let regular_cost = round_output(self.regular_cost);
        let overtime_cost = round_output(self.overtime_cost);

        LaborCost {
            hourly_rate,
            total_hours: regular_hours + overtime_hours,
            regular_hours,
            overtime_hours,
            regular_cost,
            overtime_cost,
            total_cost: regular_cost + overtime_cost,
            overtime_multiplier: multiplier,
        }
    }
}

/// Returns the rate shared by every shift, or zero when rates differ.
fn uniform_rate(shifts: &[ShiftData]) -> Decimal {
    let mut rates = shifts.iter().map(ShiftData::rate_or_zero);
    match rates.next() {
        Some(first) if rates.all(|r| r == first) => first,
        _ => Decimal::ZERO,
    }
}

/// Calculates the cost breakdown of a single shift.
///
/// Hours up to the daily cap are regular; hours beyond it are overtime and
/// are priced at `rate * overtime_multiplier`. A shift without a rate
/// costs zero regardless of its hours.
///
/// # Example
///
/// ```
/// use compliance_engine::config::ComplianceConfig;
/// use compliance_engine::cost::calculate_shift_cost;
/// use compliance_engine::models::ShiftData;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dt = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let shift = ShiftData::new(
///     Some("s1".into()), "u1".into(),
///     dt("2026-03-02 08:00:00"), dt("2026-03-02 19:00:00"),
///     0, Some(Decimal::from(200)),
/// ).unwrap();
///
/// let cost = calculate_shift_cost(&shift, &ComplianceConfig::default());
/// assert_eq!(cost.regular_hours, Decimal::from_str("9.00").unwrap());
/// assert_eq!(cost.overtime_hours, Decimal::from_str("2.00").unwrap());
/// // 2 overtime hours at 200 * 1.4
/// assert_eq!(cost.overtime_cost, Decimal::from_str("560.00").unwrap());
/// ```
pub fn calculate_shift_cost(shift: &ShiftData, config: &ComplianceConfig) -> LaborCost {
    RawCost::for_shift(shift, config)
        .into_labor_cost(shift.rate_or_zero(), config.overtime_multiplier)
}

/// Calculates the element-wise sum of the per-shift cost breakdowns.
///
/// Components are summed unrounded and rounded once at the output, so a
/// large shift set does not compound per-shift rounding error. The
/// `hourly_rate` field carries the shared rate when all shifts agree on
/// one, and zero otherwise.
pub fn calculate_total_cost(shifts: &[ShiftData], config: &ComplianceConfig) -> LaborCost {
    let mut total = RawCost::default();
    for shift in shifts {
        total.add(&RawCost::for_shift(shift, config));
    }
    total.into_labor_cost(uniform_rate(shifts), config.overtime_multiplier)
}

/// Estimates the cost of the week of work starting with the earliest shift.
///
/// Only shifts starting inside the 7-day window anchored at the earliest
/// shift's start are counted. An empty shift set yields an all-zero
/// breakdown.
pub fn estimate_weekly_cost(shifts: &[ShiftData], config: &ComplianceConfig) -> LaborCost {
    let Some(window_start) = shifts.iter().map(|s| s.start_time).min() else {
        return RawCost::default().into_labor_cost(Decimal::ZERO, config.overtime_multiplier);
    };
    let window_end = window_start + Duration::days(7);

    let in_week: Vec<ShiftData> = shifts
        .iter()
        .filter(|s| s.start_time >= window_start && s.start_time < window_end)
        .cloned()
        .collect();

    calculate_total_cost(&in_week, config)
}
