use reqwest::{
    header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    Method,
};
use serde_json::Value;

use super::{
    client::ApiClient,
    error::ApiError,
    types::{DepartmentPayrollResponse, PayrollRecord, PayrollReport, PayrollSummaryResponse},
};

impl ApiClient {
    pub async fn list_payrolls(&self) -> Result<Vec<PayrollRecord>, ApiError> {
        let request = self.authorized(Method::GET, "/payrolls/")?;
        self.send_json(request).await
    }

    pub async fn payroll_summary(&self) -> Result<PayrollSummaryResponse, ApiError> {
        let request = self.authorized(Method::GET, "/payrolls/summary")?;
        self.send_json(request).await
    }

    pub async fn payroll_department_summary(
        &self,
    ) -> Result<Vec<DepartmentPayrollResponse>, ApiError> {
        let request = self.authorized(Method::GET, "/payrolls/department-summary")?;
        self.send_json(request).await
    }

    pub async fn payroll_report(&self) -> Result<PayrollReport, ApiError> {
        let request = self.authorized(Method::GET, "/payrolls/report")?;
        let response = self.send(request).await?;

        let headers = response.headers();
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let file_name = headers
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(attachment_file_name);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(PayrollReport {
            bytes: bytes.to_vec(),
            content_type,
            file_name,
        })
    }

    /// The backend decides which pay period is next; the response is passed through.
    pub async fn process_next_payroll(&self) -> Result<Value, ApiError> {
        let request = self.authorized(Method::POST, "/payrolls/process-next")?;
        self.send_json(request).await
    }
}

/// `attachment; filename="payroll.pdf"` -> `payroll.pdf`.
fn attachment_file_name(disposition: &str) -> Option<String> {
    disposition
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_file_name_strips_quotes() {
        assert_eq!(
            attachment_file_name(r#"attachment; filename="payroll-2025-05.pdf""#).as_deref(),
            Some("payroll-2025-05.pdf")
        );
        assert_eq!(
            attachment_file_name("attachment; filename=report.csv").as_deref(),
            Some("report.csv")
        );
        assert!(attachment_file_name("inline").is_none());
    }
}
