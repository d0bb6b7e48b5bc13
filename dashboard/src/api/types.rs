use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{AttendanceId, DepartmentId, EmployeeId, PayrollId, ReviewId};
use crate::utils::time::parse_time_of_day;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "EmployeeID")]
    pub id: EmployeeId,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "DOB", default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(rename = "Phone", default)]
    pub phone: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    /// 0 or 1 in the backend schema.
    #[serde(rename = "Gender", default)]
    pub gender: Option<u8>,
    #[serde(rename = "DepartmentID", default)]
    pub department_id: Option<DepartmentId>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create/update payload: an [`Employee`] without its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EmployeeInput {
    #[serde(rename = "FirstName")]
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[serde(rename = "LastName")]
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[serde(rename = "DOB", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(rename = "Phone", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 15))]
    pub phone: Option<String>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(rename = "Gender", skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 1))]
    pub gender: Option<u8>,
    #[serde(rename = "DepartmentID", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
}

impl From<&Employee> for EmployeeInput {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            date_of_birth: employee.date_of_birth,
            phone: employee.phone.clone(),
            email: employee.email.clone(),
            gender: employee.gender,
            department_id: employee.department_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "DepartmentID")]
    pub id: DepartmentId,
    #[serde(rename = "DeptName")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DepartmentInput {
    #[serde(rename = "DeptName")]
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// One attendance row. Times stay as the backend's `HH:MM:SS` strings so a
/// single malformed row does not fail the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "AttendanceID")]
    pub id: AttendanceId,
    #[serde(rename = "EmployeeID")]
    pub employee_id: EmployeeId,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "timeIn", default)]
    pub time_in: Option<String>,
    #[serde(rename = "timeOut", default)]
    pub time_out: Option<String>,
    #[serde(rename = "EmployeeName", default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(rename = "DepartmentName", default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
}

impl AttendanceRecord {
    pub fn clock_in(&self) -> Option<NaiveTime> {
        self.time_in.as_deref().and_then(parse_time_of_day)
    }

    pub fn clock_out(&self) -> Option<NaiveTime> {
        self.time_out.as_deref().and_then(parse_time_of_day)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceInput {
    #[serde(rename = "EmployeeID")]
    pub employee_id: EmployeeId,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "timeIn", skip_serializing_if = "Option::is_none")]
    pub time_in: Option<String>,
    #[serde(rename = "timeOut", skip_serializing_if = "Option::is_none")]
    pub time_out: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    #[serde(rename = "PayrollID")]
    pub id: PayrollId,
    #[serde(rename = "EmployeeID")]
    pub employee_id: EmployeeId,
    #[serde(rename = "Salary")]
    pub salary: f64,
    #[serde(rename = "Bonus", default)]
    pub bonus: Option<f64>,
    #[serde(rename = "Deduction", default)]
    pub deduction: Option<f64>,
    #[serde(rename = "PayDate")]
    pub pay_date: NaiveDate,
}

impl PayrollRecord {
    pub fn bonus(&self) -> f64 {
        self.bonus.unwrap_or(0.0)
    }

    pub fn deduction(&self) -> f64 {
        self.deduction.unwrap_or(0.0)
    }

    /// `salary + bonus - deduction`.
    pub fn net_pay(&self) -> f64 {
        self.salary + self.bonus() - self.deduction()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReview {
    #[serde(rename = "ReviewID")]
    pub id: ReviewId,
    #[serde(rename = "EmployeeID")]
    pub employee_id: EmployeeId,
    #[serde(rename = "ReviewDate")]
    pub review_date: NaiveDate,
    /// 1..=10, enforced by the backend.
    #[serde(rename = "Score")]
    pub score: i32,
    #[serde(rename = "Comments", default)]
    pub comments: Option<String>,
    #[serde(rename = "WorkingHours")]
    pub working_hours: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollSummaryResponse {
    pub total_payroll: f64,
    pub total_bonus: f64,
    pub total_deductions: f64,
    pub average_salary: f64,
    pub employee_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentPayrollResponse {
    pub department: String,
    #[serde(default)]
    pub total_pay: f64,
    #[serde(default)]
    pub employees: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceSummaryResponse {
    pub average_score: f64,
    pub average_working_hours: f64,
    pub review_count: u32,
}

/// Binary payroll report as served by `GET /payrolls/report`.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollReport {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}
