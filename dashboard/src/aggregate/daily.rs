//! Per-date roll-up of attendance status across the whole employee roster.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::collections::BTreeSet;

use super::status::{AttendanceIndex, AttendanceStatus};
use crate::api::{AttendanceRecord, Employee};
use crate::utils::time::{week_bounds, weekday_label};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub weekday: String,
    /// Employees who arrived on time.
    pub present: usize,
    pub late: usize,
    pub absent: usize,
}

impl DailySummary {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            weekday: weekday_label(date),
            present: 0,
            late: 0,
            absent: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.present + self.late + self.absent
    }

    pub fn count(&self, status: AttendanceStatus) -> usize {
        match status {
            AttendanceStatus::OnTime => self.present,
            AttendanceStatus::Late => self.late,
            AttendanceStatus::Absent => self.absent,
        }
    }

    /// Share of the roster with the given status, in percent. 0 for an empty roster.
    pub fn share(&self, status: AttendanceStatus) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(status) as f64 * 100.0 / total as f64
    }

    pub fn attendance_rate(&self) -> f64 {
        self.share(AttendanceStatus::OnTime)
    }

    fn record(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::OnTime => self.present += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::Absent => self.absent += 1,
        }
    }
}

/// Every date that appears in the data, ascending.
pub fn distinct_dates(records: &[AttendanceRecord]) -> Vec<NaiveDate> {
    records
        .iter()
        .map(|r| r.date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Most recent date in the data. Callers opt into this as their reference
/// date explicitly; nothing in this module infers "today" on its own.
pub fn latest_date(records: &[AttendanceRecord]) -> Option<NaiveDate> {
    records.iter().map(|r| r.date).max()
}

/// Counts every known employee, with or without a record on `date`.
pub fn summarize_day(
    date: NaiveDate,
    employees: &[Employee],
    index: &AttendanceIndex<'_>,
    cutoff: NaiveTime,
) -> DailySummary {
    let mut summary = DailySummary::empty(date);
    for employee in employees {
        summary.record(index.status(employee.id, date, cutoff));
    }
    summary
}

/// One row per date, in the order given.
pub fn daily_summaries(
    dates: &[NaiveDate],
    employees: &[Employee],
    records: &[AttendanceRecord],
    cutoff: NaiveTime,
) -> Vec<DailySummary> {
    let index = AttendanceIndex::new(records);
    dates
        .iter()
        .map(|date| summarize_day(*date, employees, &index, cutoff))
        .collect()
}

pub fn today_summary(
    reference: NaiveDate,
    employees: &[Employee],
    records: &[AttendanceRecord],
    cutoff: NaiveTime,
) -> DailySummary {
    let index = AttendanceIndex::new(records);
    summarize_day(reference, employees, &index, cutoff)
}

/// Rows for the dates with data inside the Monday-Sunday week of `reference`.
pub fn weekly_summaries(
    reference: NaiveDate,
    employees: &[Employee],
    records: &[AttendanceRecord],
    cutoff: NaiveTime,
) -> Vec<DailySummary> {
    let Some((start, end)) = week_bounds(reference) else {
        return Vec::new();
    };
    let dates: Vec<NaiveDate> = distinct_dates(records)
        .into_iter()
        .filter(|date| (start..=end).contains(date))
        .collect();
    daily_summaries(&dates, employees, records, cutoff)
}
