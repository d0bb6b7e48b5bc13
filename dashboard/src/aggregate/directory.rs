use crate::api::{Department, Employee};
use crate::types::DepartmentId;

pub const NO_DEPARTMENT: &str = "No Department";
pub const UNKNOWN_DEPARTMENT: &str = "Unknown";

/// Display name for a department reference.
pub fn department_name(departments: &[Department], id: Option<DepartmentId>) -> String {
    let Some(id) = id else {
        return NO_DEPARTMENT.to_string();
    };
    departments
        .iter()
        .find(|d| d.id == id)
        .map(|d| d.name.clone())
        .unwrap_or_else(|| UNKNOWN_DEPARTMENT.to_string())
}

/// Case-insensitive search over "First Last" and email, optionally narrowed
/// to one department. A blank search matches everyone.
pub fn filter_employees<'a>(
    employees: &'a [Employee],
    search: &str,
    department: Option<DepartmentId>,
) -> Vec<&'a Employee> {
    let needle = search.trim().to_lowercase();
    employees
        .iter()
        .filter(|employee| {
            let matches_search = needle.is_empty()
                || employee.full_name().to_lowercase().contains(&needle)
                || employee
                    .email
                    .as_deref()
                    .is_some_and(|email| email.to_lowercase().contains(&needle));
            let matches_department =
                department.map_or(true, |id| employee.department_id == Some(id));
            matches_search && matches_department
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmployeeId;

    fn employee(id: i64, first: &str, last: &str, email: Option<&str>, dept: Option<i64>) -> Employee {
        Employee {
            id: EmployeeId::new(id),
            first_name: first.into(),
            last_name: last.into(),
            date_of_birth: None,
            phone: None,
            email: email.map(str::to_string),
            gender: None,
            department_id: dept.map(DepartmentId::new),
        }
    }

    fn roster() -> Vec<Employee> {
        vec![
            employee(1, "Thai", "Ba Hung", Some("hung@corp.vn"), Some(1)),
            employee(2, "Le", "Nguyen Gia Binh", None, Some(2)),
            employee(3, "Chi", "Le", Some("CHI@corp.vn"), None),
        ]
    }

    #[test]
    fn department_name_distinguishes_missing_and_unknown() {
        let departments = vec![Department {
            id: DepartmentId::new(1),
            name: "Engineering".into(),
        }];
        assert_eq!(department_name(&departments, Some(DepartmentId::new(1))), "Engineering");
        assert_eq!(department_name(&departments, Some(DepartmentId::new(7))), "Unknown");
        assert_eq!(department_name(&departments, None), "No Department");
    }

    #[test]
    fn filter_matches_full_name_case_insensitively() {
        let employees = roster();
        let ids: Vec<i64> = filter_employees(&employees, "ba hung", None)
            .iter()
            .map(|e| e.id.get())
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn filter_matches_email_and_name_across_employees() {
        let employees = roster();
        let ids: Vec<i64> = filter_employees(&employees, "le", None)
            .iter()
            .map(|e| e.id.get())
            .collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(filter_employees(&employees, "chi@", None).len(), 1);
    }

    #[test]
    fn filter_by_department_and_blank_search() {
        let employees = roster();
        assert_eq!(filter_employees(&employees, "  ", None).len(), 3);
        let engineering = filter_employees(&employees, "", Some(DepartmentId::new(1)));
        assert_eq!(engineering.len(), 1);
        assert_eq!(engineering[0].id, EmployeeId::new(1));
        assert!(filter_employees(&employees, "chi", Some(DepartmentId::new(1))).is_empty());
    }
}
