//! Compliance report structures.
//!
//! The report is immutable once produced and must serialize
//! reproducibly: collections are either sorted vectors or `BTreeMap`s, so
//! identical snapshots yield byte-identical JSON. Field names and types
//! are a stable export contract; changes must be additive only.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::collaborators::OrganizationInfo;
use crate::models::Violation;

/// Compliance classification of a single shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftComplianceStatus {
    /// No violations and not near any limit.
    Compliant,
    /// No violations, but within one hour of a working-hours cap.
    Warning,
    /// At least one violation.
    Violation,
}

/// The date range a report covers, both ends inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period.
    pub end: NaiveDate,
}

/// Aggregate counts for the report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOverview {
    /// Number of shifts in the period.
    pub total_shifts: u32,
    /// Number of distinct employees with shifts in the period.
    pub total_employees: u32,
    /// Shifts classified [`ShiftComplianceStatus::Compliant`].
    pub compliant_shifts: u32,
    /// Shifts classified [`ShiftComplianceStatus::Warning`].
    pub warning_shifts: u32,
    /// Shifts classified [`ShiftComplianceStatus::Violation`].
    pub violation_shifts: u32,
    /// Percentage of compliant shifts, 2 decimal places. 100 when the
    /// period holds no shifts.
    pub compliance_rate: Decimal,
    /// Shifts published later than the statutory deadline, or never.
    pub late_publications: u32,
}

/// One shift of one employee, with its compliance classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftDetailRow {
    /// The shift's identifier, when persisted.
    pub shift_id: Option<String>,
    /// The date the shift starts on.
    pub date: NaiveDate,
    /// Scheduled start.
    pub start_time: NaiveDateTime,
    /// Scheduled end.
    pub end_time: NaiveDateTime,
    /// Scheduled worked hours, 2 decimal places.
    pub planned_hours: Decimal,
    /// Clocked hours, when a record exists for the shift.
    pub actual_hours: Option<Decimal>,
    /// Hours beyond the daily cap, 2 decimal places.
    pub overtime_hours: Decimal,
    /// Compliance classification of the shift.
    pub status: ShiftComplianceStatus,
    /// Violations attributable to this shift.
    pub violations: Vec<Violation>,
}

/// Per-employee aggregate for the reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeComplianceSummary {
    /// The employee's identifier.
    pub user_id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's payroll number.
    pub employee_number: String,
    /// The department the employee belongs to.
    pub department: String,
    /// Sum of scheduled hours, 2 decimal places.
    pub planned_hours: Decimal,
    /// Sum of clocked hours, 2 decimal places.
    pub actual_hours: Decimal,
    /// Sum of per-shift overtime, 2 decimal places.
    pub overtime_hours: Decimal,
    /// All violations found for the employee, shift-level first.
    pub violations: Vec<Violation>,
    /// The employee's shifts, sorted by start time.
    pub shifts: Vec<ShiftDetailRow>,
}

/// One violation with its reporting context, for the flat detail list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationDetail {
    /// The employee the violation concerns.
    pub user_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The date the violation pertains to, formatted `YYYY-MM-DD`.
    pub date: String,
    /// Human-readable description.
    pub description: String,
    /// The violation itself.
    pub violation: Violation,
}

/// An audit-ready compliance report for one organization and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Deterministic identifier, derived from organization, period, and
    /// generation timestamp.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The organization the report covers.
    pub organization: OrganizationInfo,
    /// The period the report covers.
    pub period: ReportPeriod,
    /// Aggregate counts.
    pub overview: ReportOverview,
    /// Violation counts keyed by `type_scope` (e.g. "rest_period_daily").
    pub violations_by_type: BTreeMap<String, u32>,
    /// Per-employee aggregates, sorted by user id.
    pub employees: Vec<EmployeeComplianceSummary>,
    /// Flat list of all violations with context.
    pub violation_details: Vec<ViolationDetail>,
}
