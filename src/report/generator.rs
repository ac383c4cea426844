//! Compliance report generation.
//!
//! Pulls a shift/actual-hours snapshot from the injected repository, runs
//! the rest-period and working-hours validators per shift, classifies each
//! shift, and assembles the aggregate report. Given the same snapshot and
//! generation timestamp, two invocations produce byte-identical output.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{info, warn};
use uuid::Uuid;

use super::collaborators::{
    ActualHoursRecord, AuditEvent, AuditSink, OrganizationDirectory, ShiftRepository,
};
use super::model::{
    ComplianceReport, EmployeeComplianceSummary, ReportOverview, ReportPeriod,
    ShiftComplianceStatus, ShiftDetailRow, ViolationDetail,
};
use crate::config::ComplianceConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftData, Violation};
use crate::validation::{
    validate_daily_hours, validate_daily_rest, validate_overtime_limits, validate_weekly_hours,
    validate_weekly_rest,
};

fn round_hours(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Generates audit-ready compliance reports.
///
/// Holds the statutory limits and the injected collaborators; the
/// generator itself performs no I/O beyond them and keeps no state
/// between calls.
pub struct ReportGenerator<R, D, A> {
    config: ComplianceConfig,
    repository: R,
    directory: D,
    audit: A,
}

impl<R, D, A> ReportGenerator<R, D, A>
where
    R: ShiftRepository,
    D: OrganizationDirectory,
    A: AuditSink,
{
    /// Creates a generator over the given collaborators.
    pub fn new(config: ComplianceConfig, repository: R, directory: D, audit: A) -> Self {
        Self {
            config,
            repository,
            directory,
            audit,
        }
    }

    /// Generates a report for the period, stamped with the current time.
    pub fn generate_report(
        &self,
        org_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<ComplianceReport> {
        self.generate_report_at(org_id, start, end, Utc::now())
    }

    /// Generates a report with an explicit generation timestamp.
    ///
    /// This is the reproducible core: the timestamp is the only
    /// non-deterministic input of [`ReportGenerator::generate_report`], so
    /// pinning it makes two runs over the same snapshot byte-identical.
    pub fn generate_report_at(
        &self,
        org_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        generated_at: DateTime<Utc>,
    ) -> EngineResult<ComplianceReport> {
        if end < start {
            return Err(EngineError::InvalidPeriod {
                message: format!("period end {} is before start {}", end, start),
            });
        }

        let organization = self.directory.organization(org_id)?;
        let shifts = self.repository.find_shifts_in_range(org_id, start, end)?;
        let actuals = self
            .repository
            .find_actual_hours_in_range(org_id, start, end)?;

        for shift in &shifts {
            shift.validate()?;
        }

        let period_start = start.and_hms_opt(0, 0, 0).expect("midnight is valid");
        let period_end = (end + Duration::days(1))
            .and_hms_opt(0, 0, 0)
            .expect("midnight is valid");

        // Group by employee; BTreeMap gives the stable employee order.
        let mut by_user: BTreeMap<String, Vec<ShiftData>> = BTreeMap::new();
        for shift in shifts {
            by_user.entry(shift.user_id.clone()).or_default().push(shift);
        }
        for user_shifts in by_user.values_mut() {
            user_shifts.sort_by(|a, b| {
                a.start_time
                    .cmp(&b.start_time)
                    .then_with(|| a.id.cmp(&b.id))
            });
        }

        let mut overview = ReportOverview {
            total_shifts: 0,
            total_employees: by_user.len() as u32,
            compliant_shifts: 0,
            warning_shifts: 0,
            violation_shifts: 0,
            compliance_rate: Decimal::ZERO,
            late_publications: 0,
        };
        let mut violations_by_type: BTreeMap<String, u32> = BTreeMap::new();
        let mut employees = Vec::new();
        let mut violation_details = Vec::new();

        for (user_id, user_shifts) in &by_user {
            let employee = self.directory.employee(org_id, user_id)?;
            let mut employee_violations = Vec::new();
            let mut detail_rows = Vec::new();

            for shift in user_shifts {
                let others: Vec<ShiftData> = user_shifts
                    .iter()
                    .filter(|s| !std::ptr::eq(*s, shift))
                    .cloned()
                    .collect();

                let mut shift_violations = validate_daily_rest(shift, &others, &self.config);
                shift_violations.extend(validate_daily_hours(shift, &others, &self.config));
                shift_violations.extend(validate_weekly_hours(shift, &others, &self.config));

                let status = if !shift_violations.is_empty() {
                    overview.violation_shifts += 1;
                    ShiftComplianceStatus::Violation
                } else if self.is_near_hours_limit(shift, &others) {
                    overview.warning_shifts += 1;
                    ShiftComplianceStatus::Warning
                } else {
                    overview.compliant_shifts += 1;
                    ShiftComplianceStatus::Compliant
                };
                overview.total_shifts += 1;

                if self.is_published_late(shift) {
                    overview.late_publications += 1;
                }

                let shift_date = shift.start_date();
                for violation in &shift_violations {
                    violation_details.push(ViolationDetail {
                        user_id: user_id.clone(),
                        employee_name: employee.name.clone(),
                        date: shift_date.format("%Y-%m-%d").to_string(),
                        description: violation.summary(),
                        violation: violation.clone(),
                    });
                }

                let overtime =
                    (shift.worked_hours() - self.config.max_daily_hours).max(Decimal::ZERO);
                detail_rows.push(ShiftDetailRow {
                    shift_id: shift.id.clone(),
                    date: shift_date,
                    start_time: shift.start_time,
                    end_time: shift.end_time,
                    planned_hours: round_hours(shift.worked_hours()),
                    actual_hours: actual_hours_for(shift, &actuals),
                    overtime_hours: round_hours(overtime),
                    status,
                    violations: shift_violations.clone(),
                });

                employee_violations.extend(shift_violations);
            }

            let mut user_level = validate_weekly_rest(
                user_id,
                user_shifts,
                period_start,
                period_end,
                &self.config,
            );
            user_level.extend(validate_overtime_limits(
                user_id,
                user_shifts,
                start,
                &self.config,
            ));
            for violation in &user_level {
                violation_details.push(ViolationDetail {
                    user_id: user_id.clone(),
                    employee_name: employee.name.clone(),
                    date: violation_date(violation, start).format("%Y-%m-%d").to_string(),
                    description: violation.summary(),
                    violation: violation.clone(),
                });
            }
            employee_violations.extend(user_level);

            for violation in &employee_violations {
                *violations_by_type
                    .entry(violation.breakdown_key().to_string())
                    .or_insert(0) += 1;
            }

            let planned: Decimal = user_shifts.iter().map(ShiftData::worked_hours).sum();
            let actual: Decimal = actuals
                .iter()
                .filter(|a| a.user_id == *user_id)
                .map(|a| a.hours)
                .sum();
            let overtime: Decimal = user_shifts
                .iter()
                .map(|s| (s.worked_hours() - self.config.max_daily_hours).max(Decimal::ZERO))
                .sum();

            employees.push(EmployeeComplianceSummary {
                user_id: user_id.clone(),
                name: employee.name,
                employee_number: employee.employee_number,
                department: employee.department,
                planned_hours: round_hours(planned),
                actual_hours: round_hours(actual),
                overtime_hours: round_hours(overtime),
                violations: employee_violations,
                shifts: detail_rows,
            });
        }

        overview.compliance_rate = if overview.total_shifts == 0 {
            Decimal::new(10000, 2)
        } else {
            round_hours(
                Decimal::from(overview.compliant_shifts) / Decimal::from(overview.total_shifts)
                    * Decimal::from(100),
            )
        };

        let report = ComplianceReport {
            report_id: report_id(org_id, start, end, generated_at),
            generated_at,
            organization,
            period: ReportPeriod { start, end },
            overview,
            violations_by_type,
            employees,
            violation_details,
        };

        info!(
            org_id = %org_id,
            shifts = report.overview.total_shifts,
            violations = report.violation_details.len(),
            "generated compliance report"
        );

        let event = AuditEvent::new(
            "report_generated",
            generated_at,
            serde_json::json!({
                "org_id": org_id,
                "report_id": report.report_id,
                "period_start": start,
                "period_end": end,
                "total_shifts": report.overview.total_shifts,
            }),
        );
        if let Err(err) = self.audit.record(event) {
            warn!(error = %err, "audit sink rejected report_generated event");
        }

        Ok(report)
    }

    /// A shift is near-limit when its own hours or its 7-day window total
    /// come within one hour of the respective cap without breaching it.
    fn is_near_hours_limit(&self, shift: &ShiftData, others: &[ShiftData]) -> bool {
        let one = Decimal::ONE;

        let own = shift.worked_hours();
        if own >= self.config.max_daily_hours - one {
            return true;
        }

        let week_start = shift
            .start_date()
            .and_hms_opt(0, 0, 0)
            .expect("midnight is valid");
        let week_end = week_start + Duration::days(7);
        let week_total: Decimal = others
            .iter()
            .chain(std::iter::once(shift))
            .filter(|s| s.start_time >= week_start && s.start_time < week_end)
            .map(|s| s.worked_hours())
            .sum();
        week_total >= self.config.max_weekly_hours - one
    }

    /// A shift is published late when it was never published, or published
    /// after the statutory deadline before its start.
    fn is_published_late(&self, shift: &ShiftData) -> bool {
        let deadline =
            shift.start_time - Duration::days(i64::from(self.config.publish_deadline_days));
        match shift.published_at {
            Some(published_at) => published_at > deadline,
            None => true,
        }
    }
}

/// The date a user-level violation pertains to, for the detail list.
fn violation_date(violation: &Violation, period_start: NaiveDate) -> NaiveDate {
    match violation {
        Violation::WorkingHours {
            affected_period, ..
        } => affected_period.start.date(),
        Violation::RestPeriod { .. } => period_start,
    }
}

/// Matches a shift to its clocked hours, by shift id.
fn actual_hours_for(shift: &ShiftData, actuals: &[ActualHoursRecord]) -> Option<Decimal> {
    let shift_id = shift.id.as_deref()?;
    actuals
        .iter()
        .find(|a| a.shift_id.as_deref() == Some(shift_id))
        .map(|a| round_hours(a.hours))
}

/// Derives the deterministic report id from its identifying inputs.
fn report_id(
    org_id: &str,
    start: NaiveDate,
    end: NaiveDate,
    generated_at: DateTime<Utc>,
) -> Uuid {
    let name = format!(
        "{}:{}:{}:{}",
        org_id,
        start,
        end,
        generated_at.to_rfc3339()
    );
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::cell::RefCell;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    struct InMemoryRepository {
        shifts: Vec<ShiftData>,
        actuals: Vec<ActualHoursRecord>,
    }

    impl ShiftRepository for InMemoryRepository {
        fn find_shifts_in_range(
            &self,
            _org_id: &str,
            start: NaiveDate,
            end: NaiveDate,
        ) -> EngineResult<Vec<ShiftData>> {
            Ok(self
                .shifts
                .iter()
                .filter(|s| s.start_date() >= start && s.start_date() <= end)
                .cloned()
                .collect())
        }

        fn find_actual_hours_in_range(
            &self,
            _org_id: &str,
            start: NaiveDate,
            end: NaiveDate,
        ) -> EngineResult<Vec<ActualHoursRecord>> {
            Ok(self
                .actuals
                .iter()
                .filter(|a| a.date >= start && a.date <= end)
                .cloned()
                .collect())
        }
    }

    struct StaticDirectory;

    impl OrganizationDirectory for StaticDirectory {
        fn organization(&self, org_id: &str) -> EngineResult<crate::report::OrganizationInfo> {
            if org_id == "org_001" {
                Ok(crate::report::OrganizationInfo {
                    name: "Fjord Care AS".to_string(),
                    registration_number: "NO 987 654 321".to_string(),
                })
            } else {
                Err(EngineError::UnknownOrganization {
                    org_id: org_id.to_string(),
                })
            }
        }

        fn employee(&self, _org_id: &str, user_id: &str) -> EngineResult<crate::report::EmployeeInfo> {
            Ok(crate::report::EmployeeInfo {
                name: format!("Employee {user_id}"),
                employee_number: format!("E-{user_id}"),
                department: "Care".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        events: RefCell<Vec<AuditEvent>>,
    }

    impl AuditSink for RecordingSink {
        fn record(
            &self,
            event: AuditEvent,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            self.events.borrow_mut().push(event);
            Ok(())
        }
    }

    struct FailingSink;

    impl AuditSink for FailingSink {
        fn record(
            &self,
            _event: AuditEvent,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            Err("audit store unreachable".into())
        }
    }

    fn shift(id: &str, user: &str, start: &str, end: &str) -> ShiftData {
        let mut shift = ShiftData::new(
            Some(id.to_string()),
            user.to_string(),
            dt(start),
            dt(end),
            0,
            Some(dec("200")),
        )
        .unwrap();
        // Published well ahead of the deadline.
        shift.published_at = Some(shift.start_time - Duration::days(30));
        shift
    }

    fn generator_with(
        shifts: Vec<ShiftData>,
        actuals: Vec<ActualHoursRecord>,
    ) -> ReportGenerator<InMemoryRepository, StaticDirectory, RecordingSink> {
        ReportGenerator::new(
            ComplianceConfig::default(),
            InMemoryRepository { shifts, actuals },
            StaticDirectory,
            RecordingSink::default(),
        )
    }

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    #[test]
    fn test_compliant_week_reports_full_rate() {
        let shifts: Vec<ShiftData> = (2..7)
            .map(|day| {
                shift(
                    &format!("s{day}"),
                    "u1",
                    &format!("2026-03-{day:02} 09:00:00"),
                    &format!("2026-03-{day:02} 16:00:00"),
                )
            })
            .collect();

        let generator = generator_with(shifts, Vec::new());
        let report = generator
            .generate_report("org_001", march(2), march(8))
            .unwrap();

        assert_eq!(report.overview.total_shifts, 5);
        assert_eq!(report.overview.total_employees, 1);
        assert_eq!(report.overview.compliant_shifts, 5);
        assert_eq!(report.overview.violation_shifts, 0);
        assert_eq!(report.overview.compliance_rate, dec("100.00"));
        assert!(report.violation_details.is_empty());
        assert_eq!(report.employees[0].planned_hours, dec("35.00"));
    }

    #[test]
    fn test_short_rest_produces_violation_rows() {
        let shifts = vec![
            shift("s1", "u1", "2026-03-02 14:00:00", "2026-03-02 22:00:00"),
            shift("s2", "u1", "2026-03-03 06:00:00", "2026-03-03 14:00:00"),
        ];

        let generator = generator_with(shifts, Vec::new());
        let report = generator
            .generate_report("org_001", march(2), march(8))
            .unwrap();

        // Both shifts see the 8-hour gap between them.
        assert_eq!(report.overview.violation_shifts, 2);
        assert_eq!(
            report.violations_by_type.get("rest_period_daily"),
            Some(&2)
        );
        assert!(report
            .violation_details
            .iter()
            .all(|d| d.employee_name == "Employee u1"));
    }

    #[test]
    fn test_near_cap_shift_is_a_warning() {
        // 8.5 hours is within one hour of the 9-hour daily cap.
        let shifts = vec![shift("s1", "u1", "2026-03-02 08:00:00", "2026-03-02 16:30:00")];

        let generator = generator_with(shifts, Vec::new());
        let report = generator
            .generate_report("org_001", march(2), march(8))
            .unwrap();

        assert_eq!(report.overview.warning_shifts, 1);
        assert_eq!(
            report.employees[0].shifts[0].status,
            ShiftComplianceStatus::Warning
        );
    }

    #[test]
    fn test_late_and_unpublished_shifts_counted() {
        let mut published_late = shift("s1", "u1", "2026-03-20 09:00:00", "2026-03-20 17:00:00");
        published_late.published_at = Some(dt("2026-03-15 12:00:00"));
        let mut never_published = shift("s2", "u1", "2026-03-21 09:00:00", "2026-03-21 17:00:00");
        never_published.published_at = None;
        let on_time = shift("s3", "u1", "2026-03-22 09:00:00", "2026-03-22 17:00:00");

        let generator = generator_with(vec![published_late, never_published, on_time], Vec::new());
        let report = generator
            .generate_report("org_001", march(16), march(28))
            .unwrap();

        assert_eq!(report.overview.late_publications, 2);
    }

    #[test]
    fn test_actual_hours_matched_by_shift_id() {
        let shifts = vec![shift("s1", "u1", "2026-03-02 09:00:00", "2026-03-02 17:00:00")];
        let actuals = vec![ActualHoursRecord {
            user_id: "u1".to_string(),
            shift_id: Some("s1".to_string()),
            date: march(2),
            hours: dec("7.75"),
        }];

        let generator = generator_with(shifts, actuals);
        let report = generator
            .generate_report("org_001", march(2), march(8))
            .unwrap();

        assert_eq!(report.employees[0].shifts[0].actual_hours, Some(dec("7.75")));
        assert_eq!(report.employees[0].actual_hours, dec("7.75"));
    }

    #[test]
    fn test_unknown_organization_fails_fast() {
        let generator = generator_with(Vec::new(), Vec::new());
        let err = generator
            .generate_report("org_999", march(2), march(8))
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownOrganization { .. }));
    }

    #[test]
    fn test_inverted_period_rejected() {
        let generator = generator_with(Vec::new(), Vec::new());
        let err = generator
            .generate_report("org_001", march(8), march(2))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_audit_sink_receives_event() {
        let generator = generator_with(Vec::new(), Vec::new());
        generator
            .generate_report("org_001", march(2), march(8))
            .unwrap();

        let events = generator.audit.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, "report_generated");
        assert_eq!(events[0].detail["org_id"], "org_001");
    }

    #[test]
    fn test_failing_audit_sink_does_not_block_report() {
        let generator = ReportGenerator::new(
            ComplianceConfig::default(),
            InMemoryRepository {
                shifts: Vec::new(),
                actuals: Vec::new(),
            },
            StaticDirectory,
            FailingSink,
        );

        let report = generator.generate_report("org_001", march(2), march(8));
        assert!(report.is_ok());
    }

    #[test]
    fn test_report_is_byte_identical_for_pinned_timestamp() {
        let shifts = vec![
            shift("s1", "u1", "2026-03-02 14:00:00", "2026-03-02 22:00:00"),
            shift("s2", "u1", "2026-03-03 06:00:00", "2026-03-03 14:00:00"),
            shift("s3", "u2", "2026-03-02 08:00:00", "2026-03-02 20:00:00"),
        ];
        let generated_at = DateTime::parse_from_rfc3339("2026-04-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let generator = generator_with(shifts, Vec::new());
        let first = generator
            .generate_report_at("org_001", march(2), march(8), generated_at)
            .unwrap();
        let second = generator
            .generate_report_at("org_001", march(2), march(8), generated_at)
            .unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        assert_eq!(first.report_id, second.report_id);
    }

    #[test]
    fn test_employees_sorted_by_user_id() {
        let shifts = vec![
            shift("s1", "zeta", "2026-03-02 09:00:00", "2026-03-02 17:00:00"),
            shift("s2", "alpha", "2026-03-03 09:00:00", "2026-03-03 17:00:00"),
        ];

        let generator = generator_with(shifts, Vec::new());
        let report = generator
            .generate_report("org_001", march(2), march(8))
            .unwrap();

        let ids: Vec<&str> = report.employees.iter().map(|e| e.user_id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_empty_period_reports_full_compliance() {
        let generator = generator_with(Vec::new(), Vec::new());
        let report = generator
            .generate_report("org_001", march(2), march(8))
            .unwrap();

        assert_eq!(report.overview.total_shifts, 0);
        assert_eq!(report.overview.compliance_rate, dec("100.00"));
    }
}
