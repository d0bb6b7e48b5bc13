//! The derived views each dashboard panel renders, built in one pass from a
//! freshly fetched record set.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use super::{
    daily::{daily_summaries, distinct_dates, today_summary, weekly_summaries, DailySummary},
    department::{
        payroll_by_department, performance_by_department, DepartmentPayroll,
        DepartmentPerformance,
    },
    hours::{average_worked_hours, AverageHours},
    payroll::{payroll_totals, PayrollTotals},
    performance::{performance_stats, PerformanceStats},
    recent::{recent_rows, RecentRow},
};
use crate::api::{AttendanceRecord, Department, Employee, PayrollRecord, PerformanceReview};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttendanceSettings {
    pub cutoff: NaiveTime,
    pub recent_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceOverview {
    pub reference_date: NaiveDate,
    pub employee_count: usize,
    pub today: DailySummary,
    pub average_hours: AverageHours,
    /// Dates with data in the reference week.
    pub week: Vec<DailySummary>,
    /// Every date with data, ascending.
    pub history: Vec<DailySummary>,
    pub recent: Vec<RecentRow>,
}

impl AttendanceOverview {
    pub fn build(
        reference_date: NaiveDate,
        employees: &[Employee],
        records: &[AttendanceRecord],
        departments: &[Department],
        settings: AttendanceSettings,
    ) -> Self {
        let dates = distinct_dates(records);
        Self {
            reference_date,
            employee_count: employees.len(),
            today: today_summary(reference_date, employees, records, settings.cutoff),
            average_hours: average_worked_hours(reference_date, records),
            week: weekly_summaries(reference_date, employees, records, settings.cutoff),
            history: daily_summaries(&dates, employees, records, settings.cutoff),
            recent: recent_rows(
                records,
                employees,
                departments,
                settings.cutoff,
                settings.recent_limit,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollOverview {
    pub totals: PayrollTotals,
    pub departments: Vec<DepartmentPayroll>,
}

impl PayrollOverview {
    pub fn build(
        payrolls: &[PayrollRecord],
        employees: &[Employee],
        departments: &[Department],
    ) -> Self {
        Self {
            totals: payroll_totals(payrolls),
            departments: payroll_by_department(payrolls, employees, departments),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceOverview {
    pub stats: PerformanceStats,
    pub departments: Vec<DepartmentPerformance>,
}

impl PerformanceOverview {
    pub fn build(
        reviews: &[PerformanceReview],
        employees: &[Employee],
        departments: &[Department],
    ) -> Self {
        Self {
            stats: performance_stats(reviews),
            departments: performance_by_department(reviews, employees, departments),
        }
    }
}
