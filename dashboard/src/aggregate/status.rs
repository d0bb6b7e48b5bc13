//! Per-employee, per-day attendance status.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::api::AttendanceRecord;
use crate::types::EmployeeId;
use crate::utils::time::parse_time_of_day;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    OnTime,
    Late,
    Absent,
}

impl AttendanceStatus {
    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::OnTime => "On Time",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status for one (employee, day). Only a missing record or a missing (blank)
/// time-in counts as absent. A time-in that does not parse is still a
/// check-in and is compared to the cutoff as a fixed-width `HH:MM:SS` string.
pub fn derive_status(record: Option<&AttendanceRecord>, cutoff: NaiveTime) -> AttendanceStatus {
    let Some(raw) = record
        .and_then(|r| r.time_in.as_deref())
        .filter(|raw| !raw.trim().is_empty())
    else {
        return AttendanceStatus::Absent;
    };
    let on_time = match parse_time_of_day(raw) {
        Some(time_in) => time_in <= cutoff,
        None => {
            tracing::warn!(time_in = raw, "Comparing unparseable time-in as text");
            raw.trim() <= cutoff.format("%H:%M:%S").to_string().as_str()
        }
    };
    if on_time {
        AttendanceStatus::OnTime
    } else {
        AttendanceStatus::Late
    }
}

/// First record for the employee on that date, if any.
pub fn find_record(
    records: &[AttendanceRecord],
    employee_id: EmployeeId,
    date: NaiveDate,
) -> Option<&AttendanceRecord> {
    records
        .iter()
        .find(|r| r.employee_id == employee_id && r.date == date)
}

pub fn status_for(
    records: &[AttendanceRecord],
    employee_id: EmployeeId,
    date: NaiveDate,
    cutoff: NaiveTime,
) -> AttendanceStatus {
    derive_status(find_record(records, employee_id, date), cutoff)
}

/// (employee, date) lookup with the same first-match behavior as [`find_record`].
#[derive(Debug, Default)]
pub struct AttendanceIndex<'a> {
    by_key: HashMap<(EmployeeId, NaiveDate), &'a AttendanceRecord>,
}

impl<'a> AttendanceIndex<'a> {
    pub fn new(records: &'a [AttendanceRecord]) -> Self {
        let mut by_key = HashMap::with_capacity(records.len());
        for record in records {
            by_key
                .entry((record.employee_id, record.date))
                .or_insert(record);
        }
        Self { by_key }
    }

    pub fn get(&self, employee_id: EmployeeId, date: NaiveDate) -> Option<&'a AttendanceRecord> {
        self.by_key.get(&(employee_id, date)).copied()
    }

    pub fn status(
        &self,
        employee_id: EmployeeId,
        date: NaiveDate,
        cutoff: NaiveTime,
    ) -> AttendanceStatus {
        derive_status(self.get(employee_id, date), cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AttendanceId;

    fn cutoff() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    fn record(id: i64, employee: i64, time_in: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            id: AttendanceId::new(id),
            employee_id: EmployeeId::new(employee),
            date: day(),
            time_in: time_in.map(str::to_string),
            time_out: None,
            employee_name: None,
            department_name: None,
        }
    }

    #[test]
    fn cutoff_itself_is_on_time() {
        let r = record(1, 1, Some("09:00:00"));
        assert_eq!(derive_status(Some(&r), cutoff()), AttendanceStatus::OnTime);
    }

    #[test]
    fn one_second_after_cutoff_is_late() {
        let r = record(1, 1, Some("09:00:01"));
        assert_eq!(derive_status(Some(&r), cutoff()), AttendanceStatus::Late);
    }

    #[test]
    fn missing_record_or_time_in_is_absent() {
        assert_eq!(derive_status(None, cutoff()), AttendanceStatus::Absent);
        let no_time = record(1, 1, None);
        assert_eq!(derive_status(Some(&no_time), cutoff()), AttendanceStatus::Absent);
        let blank = record(2, 1, Some(""));
        assert_eq!(derive_status(Some(&blank), cutoff()), AttendanceStatus::Absent);
    }

    #[test]
    fn time_in_without_seconds_is_compared_to_cutoff() {
        let early = record(1, 1, Some("08:55"));
        let late = record(2, 2, Some("09:15"));
        assert_eq!(derive_status(Some(&early), cutoff()), AttendanceStatus::OnTime);
        assert_eq!(derive_status(Some(&late), cutoff()), AttendanceStatus::Late);
    }

    #[test]
    fn unparseable_time_in_still_counts_as_checked_in() {
        let early = record(1, 1, Some("08:30 AM"));
        let late = record(2, 1, Some("nine o'clock"));
        assert_eq!(derive_status(Some(&early), cutoff()), AttendanceStatus::OnTime);
        assert_eq!(derive_status(Some(&late), cutoff()), AttendanceStatus::Late);
    }

    #[test]
    fn status_for_uses_first_matching_record() {
        let records = vec![record(1, 1, Some("08:30:00")), record(2, 1, Some("10:00:00"))];
        assert_eq!(
            status_for(&records, EmployeeId::new(1), day(), cutoff()),
            AttendanceStatus::OnTime
        );
        let index = AttendanceIndex::new(&records);
        assert_eq!(index.get(EmployeeId::new(1), day()).unwrap().id, AttendanceId::new(1));
        assert_eq!(
            index.status(EmployeeId::new(2), day(), cutoff()),
            AttendanceStatus::Absent
        );
    }

    #[test]
    fn status_labels_match_dashboard_badges() {
        assert_eq!(AttendanceStatus::OnTime.to_string(), "On Time");
        assert_eq!(
            serde_json::to_value(AttendanceStatus::OnTime).unwrap(),
            serde_json::json!("on_time")
        );
    }
}
