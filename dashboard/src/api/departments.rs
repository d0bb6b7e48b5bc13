use reqwest::Method;
use validator::Validate;

use super::{
    client::ApiClient,
    error::ApiError,
    types::{Department, DepartmentInput},
};
use crate::types::DepartmentId;

impl ApiClient {
    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        let request = self.authorized(Method::GET, "/departments/")?;
        self.send_json(request).await
    }

    pub async fn get_department(&self, id: DepartmentId) -> Result<Department, ApiError> {
        let request = self.authorized(Method::GET, &format!("/departments/{}", id))?;
        self.send_json(request).await
    }

    pub async fn create_department(
        &self,
        input: &DepartmentInput,
    ) -> Result<Department, ApiError> {
        input.validate()?;
        let request = self.authorized(Method::POST, "/departments/")?.json(input);
        self.send_json(request).await
    }

    pub async fn update_department(
        &self,
        id: DepartmentId,
        input: &DepartmentInput,
    ) -> Result<Department, ApiError> {
        input.validate()?;
        let request = self
            .authorized(Method::PUT, &format!("/departments/{}", id))?
            .json(input);
        self.send_json(request).await
    }

    pub async fn delete_department(&self, id: DepartmentId) -> Result<(), ApiError> {
        let request = self.authorized(Method::DELETE, &format!("/departments/{}", id))?;
        self.send_empty(request).await
    }
}
