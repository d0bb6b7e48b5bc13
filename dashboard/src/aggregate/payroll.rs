use serde::Serialize;

use crate::api::PayrollRecord;

/// Headline payroll cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollTotals {
    pub total_net_pay: f64,
    pub total_bonus: f64,
    pub total_deductions: f64,
    /// Mean base salary; `None` without records.
    pub average_salary: Option<f64>,
    pub records: usize,
}

pub fn payroll_totals(payrolls: &[PayrollRecord]) -> PayrollTotals {
    let records = payrolls.len();
    let total_salary: f64 = payrolls.iter().map(|p| p.salary).sum();
    PayrollTotals {
        total_net_pay: payrolls.iter().map(PayrollRecord::net_pay).sum(),
        total_bonus: payrolls.iter().map(PayrollRecord::bonus).sum(),
        total_deductions: payrolls.iter().map(PayrollRecord::deduction).sum(),
        average_salary: (records > 0).then(|| total_salary / records as f64),
        records,
    }
}
