//! Report export formats.
//!
//! JSON carries the full report; CSV flattens it to one row per shift for
//! spreadsheet consumers. Both renditions are deterministic for a given
//! report, and the CSV column set is a stable contract.

use crate::error::{EngineError, EngineResult};

use super::model::ComplianceReport;

/// The CSV column contract, in order.
const CSV_HEADER: [&str; 10] = [
    "Employee Name",
    "Employee Number",
    "Department",
    "Date",
    "Start Time",
    "End Time",
    "Planned Hours",
    "Actual Hours",
    "Overtime",
    "Violations",
];

/// Renders the report as a JSON document with full fidelity.
///
/// Field names and types are stable across versions; downstream consumers
/// may rely on them, so changes must be additive only.
pub fn to_json(report: &ComplianceReport) -> EngineResult<String> {
    serde_json::to_string_pretty(report).map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}

/// Renders the report as CSV with one row per shift.
///
/// The violation column joins the human-readable violation summaries of
/// the row's shift with `;`. Shifts without a clocked actual-hours record
/// leave that column empty.
pub fn to_csv(report: &ComplianceReport) -> EngineResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| EngineError::ExportError {
            message: e.to_string(),
        })?;

    for employee in &report.employees {
        for shift in &employee.shifts {
            let violations = shift
                .violations
                .iter()
                .map(|v| v.summary())
                .collect::<Vec<_>>()
                .join(";");
            let overtime = if shift.overtime_hours.is_zero() {
                "no"
            } else {
                "yes"
            };

            writer
                .write_record([
                    employee.name.as_str(),
                    employee.employee_number.as_str(),
                    employee.department.as_str(),
                    &shift.date.format("%Y-%m-%d").to_string(),
                    &shift.start_time.format("%H:%M").to_string(),
                    &shift.end_time.format("%H:%M").to_string(),
                    &shift.planned_hours.to_string(),
                    &shift
                        .actual_hours
                        .map(|h| h.to_string())
                        .unwrap_or_default(),
                    overtime,
                    &violations,
                ])
                .map_err(|e| EngineError::ExportError {
                    message: e.to_string(),
                })?;
        }
    }

    let bytes = writer.into_inner().map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}
