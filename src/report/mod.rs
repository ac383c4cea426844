//! Compliance report generation and export.
//!
//! The generator aggregates validator output and cost data per employee
//! into an audit-ready report. All I/O (shift history, organization
//! metadata, audit trail) goes through injected collaborator traits so the
//! core stays pure and testable with in-memory fakes.

mod collaborators;
mod export;
mod generator;
mod model;

pub use collaborators::{
    ActualHoursRecord, AuditEvent, AuditSink, EmployeeInfo, OrganizationDirectory,
    OrganizationInfo, ShiftRepository,
};
pub use export::{to_csv, to_json};
pub use generator::ReportGenerator;
pub use model::{
    ComplianceReport, EmployeeComplianceSummary, ReportOverview, ReportPeriod,
    ShiftComplianceStatus, ShiftDetailRow, ViolationDetail,
};
