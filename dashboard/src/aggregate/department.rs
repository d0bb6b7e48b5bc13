//! Payroll and performance roll-ups per department.
//!
//! Groups are keyed by the employee's department id, never by the display
//! name, so "Engineering" and "engineering" can only diverge if they really
//! are two departments. Records whose employee has no department (or is not in
//! the roster) land in the `None` group, which keeps totals conserved.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::directory::department_name;
use crate::api::{Department, Employee, PayrollRecord, PerformanceReview};
use crate::types::{DepartmentId, EmployeeId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentPayroll {
    pub department_id: Option<DepartmentId>,
    pub department: String,
    pub total_pay: f64,
    pub employees: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentPerformance {
    pub department_id: Option<DepartmentId>,
    pub department: String,
    pub average_score: f64,
    pub reviews: usize,
    pub employees: usize,
}

struct Group<'a, T> {
    members: BTreeSet<EmployeeId>,
    items: Vec<&'a T>,
}

fn group_by_department<'a, T>(
    items: &'a [T],
    employees: &[Employee],
    employee_of: impl Fn(&T) -> EmployeeId,
) -> BTreeMap<Option<DepartmentId>, Group<'a, T>> {
    let department_of: HashMap<EmployeeId, Option<DepartmentId>> =
        employees.iter().map(|e| (e.id, e.department_id)).collect();

    let mut groups: BTreeMap<Option<DepartmentId>, Group<'a, T>> = BTreeMap::new();
    for item in items {
        let employee_id = employee_of(item);
        let key = department_of.get(&employee_id).copied().flatten();
        let group = groups.entry(key).or_insert_with(|| Group {
            members: BTreeSet::new(),
            items: Vec::new(),
        });
        group.members.insert(employee_id);
        group.items.push(item);
    }
    groups
}

/// Total net pay per department. Departments without payroll records are omitted.
pub fn payroll_by_department(
    payrolls: &[PayrollRecord],
    employees: &[Employee],
    departments: &[Department],
) -> Vec<DepartmentPayroll> {
    group_by_department(payrolls, employees, |p| p.employee_id)
        .into_iter()
        .map(|(key, group)| DepartmentPayroll {
            department_id: key,
            department: department_name(departments, key),
            total_pay: group.items.iter().map(|p| p.net_pay()).sum(),
            employees: group.members.len(),
        })
        .collect()
}

/// Mean review score per department. Departments without reviews are omitted.
pub fn performance_by_department(
    reviews: &[PerformanceReview],
    employees: &[Employee],
    departments: &[Department],
) -> Vec<DepartmentPerformance> {
    group_by_department(reviews, employees, |r| r.employee_id)
        .into_iter()
        .map(|(key, group)| {
            let total: f64 = group.items.iter().map(|r| f64::from(r.score)).sum();
            DepartmentPerformance {
                department_id: key,
                department: department_name(departments, key),
                average_score: total / group.items.len() as f64,
                reviews: group.items.len(),
                employees: group.members.len(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PayrollId, ReviewId};
    use chrono::NaiveDate;

    fn employee(id: i64, dept: Option<i64>) -> Employee {
        Employee {
            id: EmployeeId::new(id),
            first_name: "E".into(),
            last_name: id.to_string(),
            date_of_birth: None,
            phone: None,
            email: None,
            gender: None,
            department_id: dept.map(DepartmentId::new),
        }
    }

    fn departments() -> Vec<Department> {
        vec![
            Department {
                id: DepartmentId::new(1),
                name: "Engineering".into(),
            },
            Department {
                id: DepartmentId::new(2),
                name: "engineering".into(),
            },
        ]
    }

    fn payroll(id: i64, employee: i64, salary: f64, bonus: f64, deduction: f64) -> PayrollRecord {
        PayrollRecord {
            id: PayrollId::new(id),
            employee_id: EmployeeId::new(employee),
            salary,
            bonus: Some(bonus),
            deduction: Some(deduction),
            pay_date: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
        }
    }

    fn review(id: i64, employee: i64, score: i32) -> PerformanceReview {
        PerformanceReview {
            id: ReviewId::new(id),
            employee_id: EmployeeId::new(employee),
            review_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            score,
            comments: None,
            working_hours: 480,
        }
    }

    #[test]
    fn payroll_groups_by_department_id() {
        let employees = vec![employee(1, Some(1)), employee(4, Some(1)), employee(2, Some(2))];
        let payrolls = vec![
            payroll(1, 1, 20_000_000.0, 1_000_000.0, 0.0),
            payroll(2, 4, 21_000_000.0, 0.0, 0.0),
            payroll(3, 2, 18_000_000.0, 0.0, 500_000.0),
        ];

        let rollup = payroll_by_department(&payrolls, &employees, &departments());

        assert_eq!(rollup.len(), 2);
        assert_eq!(rollup[0].department, "Engineering");
        assert_eq!(rollup[0].total_pay, 42_000_000.0);
        assert_eq!(rollup[0].employees, 2);
        assert_eq!(rollup[1].department, "engineering");
        assert_eq!(rollup[1].total_pay, 17_500_000.0);
    }

    #[test]
    fn unassigned_and_unknown_employees_share_the_none_group() {
        let employees = vec![employee(1, None)];
        let payrolls = vec![payroll(1, 1, 100.0, 0.0, 0.0), payroll(2, 99, 50.0, 0.0, 0.0)];
        let rollup = payroll_by_department(&payrolls, &employees, &departments());
        assert_eq!(rollup.len(), 1);
        assert_eq!(rollup[0].department_id, None);
        assert_eq!(rollup[0].department, "No Department");
        assert_eq!(rollup[0].total_pay, 150.0);
        assert_eq!(rollup[0].employees, 2);
    }

    #[test]
    fn employees_count_distinct_members_not_records() {
        let employees = vec![employee(1, Some(1))];
        let payrolls = vec![payroll(1, 1, 100.0, 0.0, 0.0), payroll(2, 1, 100.0, 0.0, 0.0)];
        let rollup = payroll_by_department(&payrolls, &employees, &departments());
        assert_eq!(rollup[0].employees, 1);
        assert_eq!(rollup[0].total_pay, 200.0);
    }

    #[test]
    fn performance_averages_scores_per_department() {
        let employees = vec![employee(1, Some(1)), employee(4, Some(1)), employee(3, Some(3))];
        let reviews = vec![review(1, 1, 8), review(2, 4, 6), review(3, 3, 9)];

        let rollup = performance_by_department(&reviews, &employees, &departments());

        assert_eq!(rollup.len(), 2);
        assert_eq!(rollup[0].department, "Engineering");
        assert_eq!(rollup[0].average_score, 7.0);
        assert_eq!(rollup[0].employees, 2);
        // Department 3 is referenced by the employee but missing from the list.
        assert_eq!(rollup[1].department, "Unknown");
        assert_eq!(rollup[1].average_score, 9.0);
    }

    #[test]
    fn empty_input_produces_no_groups() {
        assert!(payroll_by_department(&[], &[], &departments()).is_empty());
        assert!(performance_by_department(&[], &[], &departments()).is_empty());
    }
}
