//! Collaborator interfaces consumed by the report generator.
//!
//! The engine never holds a database handle or a logger of its own. A
//! repository supplies shift and actual-hours snapshots, a directory
//! supplies organization and employee metadata, and an audit sink receives
//! fire-and-forget events. Production wires real stores here; tests use
//! in-memory fakes.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::ShiftData;

/// Hours an employee actually worked, as recorded by the time clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualHoursRecord {
    /// The employee the record belongs to.
    pub user_id: String,
    /// The shift the record was clocked against, when known.
    #[serde(default)]
    pub shift_id: Option<String>,
    /// The date the hours were worked.
    pub date: NaiveDate,
    /// The worked hours.
    pub hours: Decimal,
}

/// Identifying metadata for an organization, used in report headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationInfo {
    /// The organization's display name.
    pub name: String,
    /// The organization's legal registration number.
    pub registration_number: String,
}

/// Identifying metadata for an employee, used in report rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    /// The employee's display name.
    pub name: String,
    /// The employee's payroll number.
    pub employee_number: String,
    /// The department the employee belongs to.
    pub department: String,
}

/// An event recorded on the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Unique identifier of the event.
    pub event_id: Uuid,
    /// When the event occurred.
    pub occurred_at: DateTime<Utc>,
    /// Machine-readable event kind (e.g., "report_generated").
    pub kind: String,
    /// Event payload.
    pub detail: serde_json::Value,
}

impl AuditEvent {
    /// Creates a new event with a fresh id.
    pub fn new(
        kind: impl Into<String>,
        occurred_at: DateTime<Utc>,
        detail: serde_json::Value,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            kind: kind.into(),
            detail,
        }
    }
}

/// Source of shift and actual-hours snapshots for a reporting period.
pub trait ShiftRepository {
    /// Returns all shifts of the organization starting inside the period
    /// (both dates inclusive).
    fn find_shifts_in_range(
        &self,
        org_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<ShiftData>>;

    /// Returns all actual-hours records of the organization inside the
    /// period (both dates inclusive).
    fn find_actual_hours_in_range(
        &self,
        org_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<ActualHoursRecord>>;
}

/// Lookup of organization and employee metadata for report headers/rows.
pub trait OrganizationDirectory {
    /// Returns the organization's metadata.
    fn organization(&self, org_id: &str) -> EngineResult<OrganizationInfo>;

    /// Returns an employee's metadata.
    fn employee(&self, org_id: &str, user_id: &str) -> EngineResult<EmployeeInfo>;
}

/// Fire-and-forget audit trail sink.
///
/// The generator logs and swallows errors returned here: a failed audit
/// write degrades observability, never the compliance determination.
pub trait AuditSink {
    /// Records one event.
    fn record(&self, event: AuditEvent) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_event_carries_kind_and_detail() {
        let event = AuditEvent::new(
            "report_generated",
            Utc::now(),
            serde_json::json!({"org_id": "org_001"}),
        );
        assert_eq!(event.kind, "report_generated");
        assert_eq!(event.detail["org_id"], "org_001");
    }

    #[test]
    fn test_audit_events_get_distinct_ids() {
        let now = Utc::now();
        let a = AuditEvent::new("x", now, serde_json::Value::Null);
        let b = AuditEvent::new("x", now, serde_json::Value::Null);
        assert_ne!(a.event_id, b.event_id);
    }
}
