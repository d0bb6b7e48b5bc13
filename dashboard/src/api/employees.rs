use reqwest::Method;
use validator::Validate;

use super::{
    client::ApiClient,
    error::ApiError,
    types::{Employee, EmployeeInput},
};
use crate::types::EmployeeId;

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let request = self.authorized(Method::GET, "/employees/")?;
        self.send_json(request).await
    }

    pub async fn get_employee(&self, id: EmployeeId) -> Result<Employee, ApiError> {
        let request = self.authorized(Method::GET, &format!("/employees/{}", id))?;
        self.send_json(request).await
    }

    /// Validates locally before anything goes over the wire.
    pub async fn create_employee(&self, input: &EmployeeInput) -> Result<Employee, ApiError> {
        input.validate()?;
        let request = self.authorized(Method::POST, "/employees/")?.json(input);
        self.send_json(request).await
    }

    pub async fn update_employee(
        &self,
        id: EmployeeId,
        input: &EmployeeInput,
    ) -> Result<Employee, ApiError> {
        input.validate()?;
        let request = self
            .authorized(Method::PUT, &format!("/employees/{}", id))?
            .json(input);
        self.send_json(request).await
    }

    pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), ApiError> {
        let request = self.authorized(Method::DELETE, &format!("/employees/{}", id))?;
        self.send_empty(request).await
    }
}
