//! Configuration types for compliance evaluation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The statutory minimum overtime premium multiplier (140% of the base rate).
///
/// Configurations may raise the multiplier but never lower it below this value.
pub const STATUTORY_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(14, 0, 0, false, 1);

/// Metadata about the jurisdiction a configuration implements.
///
/// Contains identifying information about the statute, including its
/// code, name, version, and source URL.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// The statute code (e.g., "AML-2005").
    pub code: String,
    /// The human-readable name of the statute.
    pub name: String,
    /// The version or effective date of the statute.
    pub version: String,
    /// URL to the official statute documentation.
    pub source_url: String,
}

/// Statutory limits for compliance evaluation.
///
/// One value set per organization/jurisdiction, immutable for the duration
/// of an evaluation. All hour values are expressed in hours as decimals.
///
/// # Example
///
/// ```
/// use compliance_engine::config::ComplianceConfig;
/// use rust_decimal::Decimal;
///
/// let config = ComplianceConfig::default();
/// assert_eq!(config.max_daily_hours, Decimal::from(9));
/// assert_eq!(config.min_weekly_rest_hours, Decimal::from(35));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceConfig {
    /// Maximum working hours per day.
    pub max_daily_hours: Decimal,
    /// Maximum working hours per 7-day window.
    pub max_weekly_hours: Decimal,
    /// Minimum continuous rest between two shifts on consecutive days.
    pub min_daily_rest_hours: Decimal,
    /// Minimum longest continuous rest inside any 7-day window.
    pub min_weekly_rest_hours: Decimal,
    /// Number of days before a shift starts by which it must be published.
    pub publish_deadline_days: u32,
    /// Maximum overtime hours accrued per 7-day window.
    pub max_overtime_per_week: Decimal,
    /// Maximum overtime hours accrued per 28-day window.
    pub max_overtime_per_4_weeks: Decimal,
    /// Maximum overtime hours accrued per rolling year.
    pub max_overtime_per_year: Decimal,
    /// Premium multiplier applied to overtime hours.
    pub overtime_multiplier: Decimal,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            max_daily_hours: Decimal::from(9),
            max_weekly_hours: Decimal::from(40),
            min_daily_rest_hours: Decimal::from(11),
            min_weekly_rest_hours: Decimal::from(35),
            publish_deadline_days: 14,
            max_overtime_per_week: Decimal::from(10),
            max_overtime_per_4_weeks: Decimal::from(25),
            max_overtime_per_year: Decimal::from(200),
            overtime_multiplier: STATUTORY_OVERTIME_MULTIPLIER,
        }
    }
}

impl ComplianceConfig {
    /// Checks the configuration against its legal ranges.
    ///
    /// Every hour limit must be positive and the overtime multiplier must
    /// be at least the statutory minimum of 1.4.
    ///
    /// # Example
    ///
    /// ```
    /// use compliance_engine::config::ComplianceConfig;
    /// use rust_decimal::Decimal;
    ///
    /// let mut config = ComplianceConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.overtime_multiplier = Decimal::new(12, 1); // 1.2
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        let positive_fields = [
            ("max_daily_hours", self.max_daily_hours),
            ("max_weekly_hours", self.max_weekly_hours),
            ("min_daily_rest_hours", self.min_daily_rest_hours),
            ("min_weekly_rest_hours", self.min_weekly_rest_hours),
            ("max_overtime_per_week", self.max_overtime_per_week),
            ("max_overtime_per_4_weeks", self.max_overtime_per_4_weeks),
            ("max_overtime_per_year", self.max_overtime_per_year),
        ];

        for (field, value) in positive_fields {
            if value <= Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must be positive, got {}", value),
                });
            }
        }

        if self.overtime_multiplier < STATUTORY_OVERTIME_MULTIPLIER {
            return Err(EngineError::InvalidConfig {
                field: "overtime_multiplier".to_string(),
                message: format!(
                    "must be at least the statutory minimum {}, got {}",
                    STATUTORY_OVERTIME_MULTIPLIER, self.overtime_multiplier
                ),
            });
        }

        Ok(())
    }
}
