//! Shift model.
//!
//! This module defines the [`ShiftData`] struct representing a scheduled
//! work interval, the unit every validator and cost calculation operates on.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A scheduled work interval for one employee.
///
/// Shifts are plain value objects: the engine never mutates or retains them.
/// The `end_time > start_time` invariant is enforced by [`ShiftData::new`];
/// shifts arriving through deserialization should be checked with
/// [`ShiftData::validate`] before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftData {
    /// Identifier of the shift. `None` for shifts not yet persisted.
    #[serde(default)]
    pub id: Option<String>,
    /// Identifier of the employee the shift belongs to.
    pub user_id: String,
    /// The start time of the shift.
    pub start_time: NaiveDateTime,
    /// The end time of the shift. Must be after `start_time`.
    pub end_time: NaiveDateTime,
    /// Unpaid break minutes, subtracted from the worked duration.
    #[serde(default)]
    pub break_minutes: u32,
    /// Hourly rate for cost calculations. `None` is treated as 0.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// When the shift was published to the employee, if ever.
    #[serde(default)]
    pub published_at: Option<NaiveDateTime>,
}

impl ShiftData {
    /// Creates a validated shift.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] when `end_time` is not after
    /// `start_time`, when the unpaid break is at least as long as the shift
    /// itself, or when the hourly rate is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use compliance_engine::models::ShiftData;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = ShiftData::new(
    ///     Some("shift_001".to_string()),
    ///     "user_001".to_string(),
    ///     NaiveDateTime::parse_from_str("2026-03-02 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     NaiveDateTime::parse_from_str("2026-03-02 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     30,
    ///     Some(Decimal::from(210)),
    /// ).unwrap();
    /// assert_eq!(shift.worked_hours(), Decimal::new(75, 1)); // 7.5 hours
    /// ```
    pub fn new(
        id: Option<String>,
        user_id: String,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        break_minutes: u32,
        hourly_rate: Option<Decimal>,
    ) -> EngineResult<Self> {
        let shift = Self {
            id,
            user_id,
            start_time,
            end_time,
            break_minutes,
            hourly_rate,
            published_at: None,
        };
        shift.validate()?;
        Ok(shift)
    }

    /// Checks the shift invariants.
    ///
    /// Use this on shifts constructed through deserialization, where
    /// [`ShiftData::new`] was bypassed.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_time <= self.start_time {
            return Err(EngineError::InvalidShift {
                shift_id: self.display_id().to_string(),
                message: format!(
                    "end time {} is not after start time {}",
                    self.end_time, self.start_time
                ),
            });
        }

        let total_minutes = (self.end_time - self.start_time).num_minutes();
        if i64::from(self.break_minutes) >= total_minutes {
            return Err(EngineError::InvalidShift {
                shift_id: self.display_id().to_string(),
                message: format!(
                    "break of {} minutes consumes the entire {} minute shift",
                    self.break_minutes, total_minutes
                ),
            });
        }

        if let Some(rate) = self.hourly_rate {
            if rate < Decimal::ZERO {
                return Err(EngineError::InvalidShift {
                    shift_id: self.display_id().to_string(),
                    message: format!("hourly rate {} is negative", rate),
                });
            }
        }

        Ok(())
    }

    /// Calculates the worked hours for the shift.
    ///
    /// The worked duration is the scheduled span minus the unpaid break,
    /// expressed as decimal hours.
    pub fn worked_hours(&self) -> Decimal {
        let total_minutes = (self.end_time - self.start_time).num_minutes();
        let worked_minutes = total_minutes - i64::from(self.break_minutes);
        Decimal::from(worked_minutes) / Decimal::from(60)
    }

    /// Returns the hourly rate, treating an absent rate as zero.
    pub fn rate_or_zero(&self) -> Decimal {
        self.hourly_rate.unwrap_or(Decimal::ZERO)
    }

    /// Returns the calendar date the shift starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// Returns the shift id, or "unsaved" for shifts not yet persisted.
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("unsaved")
    }
}
