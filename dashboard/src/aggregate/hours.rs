use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::api::AttendanceRecord;
use crate::types::EmployeeId;
use crate::utils::time::{is_present, minutes_since_midnight};

/// Average worked hours for a day. `NoData` when nobody has both a time-in
/// and a time-out, so an empty day never reads as "0.0 hours".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "hours", rename_all = "snake_case")]
pub enum AverageHours {
    NoData,
    Hours(f64),
}

impl AverageHours {
    pub fn hours(self) -> Option<f64> {
        match self {
            AverageHours::NoData => None,
            AverageHours::Hours(h) => Some(h),
        }
    }
}

impl fmt::Display for AverageHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageHours::NoData => f.write_str("N/A"),
            AverageHours::Hours(h) => write!(f, "{:.1}", h),
        }
    }
}

/// Minutes between time-in and time-out. `None` unless both are present.
/// A time-out at or before the time-in, or a pair that does not parse,
/// contributes nothing but still qualifies.
pub fn worked_minutes(record: &AttendanceRecord) -> Option<f64> {
    if !is_present(record.time_in.as_deref()) || !is_present(record.time_out.as_deref()) {
        return None;
    }
    match (record.clock_in(), record.clock_out()) {
        (Some(time_in), Some(time_out)) if time_out > time_in => {
            Some(minutes_since_midnight(time_out) - minutes_since_midnight(time_in))
        }
        (Some(_), Some(_)) => Some(0.0),
        _ => {
            tracing::warn!(
                time_in = ?record.time_in,
                time_out = ?record.time_out,
                "Counting unparseable shift as zero minutes"
            );
            Some(0.0)
        }
    }
}

/// `sum(out - in) / qualifying / 60`, rounded to one decimal. Only the first
/// record per employee on `date` is considered.
pub fn average_worked_hours(date: NaiveDate, records: &[AttendanceRecord]) -> AverageHours {
    let mut seen: HashSet<EmployeeId> = HashSet::new();
    let mut total_minutes = 0.0;
    let mut qualifying = 0usize;

    for record in records.iter().filter(|r| r.date == date) {
        if !seen.insert(record.employee_id) {
            continue;
        }
        if let Some(minutes) = worked_minutes(record) {
            total_minutes += minutes;
            qualifying += 1;
        }
    }

    if qualifying == 0 {
        return AverageHours::NoData;
    }
    let hours = total_minutes / qualifying as f64 / 60.0;
    AverageHours::Hours(round_one_decimal(hours))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AttendanceId;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    fn record(employee: i64, time_in: Option<&str>, time_out: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            id: AttendanceId::new(employee),
            employee_id: EmployeeId::new(employee),
            date: day(),
            time_in: time_in.map(str::to_string),
            time_out: time_out.map(str::to_string),
            employee_name: None,
            department_name: None,
        }
    }

    #[test]
    fn nine_to_six_is_540_minutes() {
        let r = record(1, Some("09:00:00"), Some("18:00:00"));
        assert_eq!(worked_minutes(&r), Some(540.0));
        assert_eq!(average_worked_hours(day(), &[r]), AverageHours::Hours(9.0));
    }

    #[test]
    fn seconds_count_as_fractional_minutes() {
        let r = record(1, Some("09:00:00"), Some("09:00:30"));
        assert_eq!(worked_minutes(&r), Some(0.5));
    }

    #[test]
    fn no_qualifying_employee_yields_sentinel() {
        let records = vec![record(1, Some("09:00:00"), None), record(2, None, None)];
        let average = average_worked_hours(day(), &records);
        assert_eq!(average, AverageHours::NoData);
        assert_eq!(average.to_string(), "N/A");
        assert!(average.hours().is_none());
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let records = vec![
            record(1, Some("09:00:00"), Some("17:10:00")),
            record(2, Some("08:30:00"), Some("17:00:00")),
        ];
        // (490 + 510) / 2 / 60 = 8.333..
        let average = average_worked_hours(day(), &records);
        assert_eq!(average, AverageHours::Hours(8.3));
        assert_eq!(average.to_string(), "8.3");
    }

    #[test]
    fn reversed_times_count_as_qualifying_with_zero_minutes() {
        let records = vec![
            record(1, Some("18:00:00"), Some("09:00:00")),
            record(2, Some("09:00:00"), Some("18:00:00")),
        ];
        assert_eq!(average_worked_hours(day(), &records), AverageHours::Hours(4.5));
    }

    #[test]
    fn other_dates_are_ignored() {
        let mut other = record(1, Some("09:00:00"), Some("18:00:00"));
        other.date = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        assert_eq!(average_worked_hours(day(), &[other]), AverageHours::NoData);
    }

    #[test]
    fn shift_without_seconds_qualifies() {
        let r = record(1, Some("08:55"), Some("17:55"));
        assert_eq!(worked_minutes(&r), Some(540.0));
        assert_eq!(average_worked_hours(day(), &[r]), AverageHours::Hours(9.0));
    }

    #[test]
    fn unparseable_pair_qualifies_with_zero_minutes() {
        let records = vec![
            record(1, Some("9am"), Some("6pm")),
            record(2, Some("09:00:00"), Some("18:00:00")),
        ];
        assert_eq!(worked_minutes(&records[0]), Some(0.0));
        assert_eq!(average_worked_hours(day(), &records), AverageHours::Hours(4.5));
    }
}
