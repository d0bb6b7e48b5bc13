use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::collections::HashMap;

use super::directory::department_name;
use super::status::{derive_status, AttendanceStatus};
use crate::api::{AttendanceRecord, Department, Employee};
use crate::types::EmployeeId;

/// The newest `limit` records, by date only. Records sharing a date keep
/// their input order.
pub fn recent_records(records: &[AttendanceRecord], limit: usize) -> Vec<&AttendanceRecord> {
    let mut sorted: Vec<&AttendanceRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentRow {
    pub employee_id: EmployeeId,
    pub name: String,
    pub department: String,
    pub date: NaiveDate,
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub status: AttendanceStatus,
}

/// Display rows for the recent-records list. Names and departments prefer the
/// values denormalized onto the record and fall back to the roster.
pub fn recent_rows(
    records: &[AttendanceRecord],
    employees: &[Employee],
    departments: &[Department],
    cutoff: NaiveTime,
    limit: usize,
) -> Vec<RecentRow> {
    let roster: HashMap<EmployeeId, &Employee> = employees.iter().map(|e| (e.id, e)).collect();

    recent_records(records, limit)
        .into_iter()
        .map(|record| {
            let employee = roster.get(&record.employee_id);
            let name = record
                .employee_name
                .clone()
                .or_else(|| employee.map(|e| e.full_name()))
                .unwrap_or_else(|| format!("Employee #{}", record.employee_id));
            let department = record.department_name.clone().unwrap_or_else(|| {
                department_name(departments, employee.and_then(|e| e.department_id))
            });
            RecentRow {
                employee_id: record.employee_id,
                name,
                department,
                date: record.date,
                time_in: record.time_in.clone(),
                time_out: record.time_out.clone(),
                status: derive_status(Some(record), cutoff),
            }
        })
        .collect()
}
