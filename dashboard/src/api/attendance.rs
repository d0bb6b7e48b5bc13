use reqwest::Method;

use super::{
    client::ApiClient,
    error::ApiError,
    types::{AttendanceInput, AttendanceRecord},
};
use crate::types::AttendanceId;
use crate::utils::time::parse_time_of_day;

impl ApiClient {
    pub async fn list_attendances(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        let request = self.authorized(Method::GET, "/attendances/")?;
        self.send_json(request).await
    }

    pub async fn create_attendance(
        &self,
        input: &AttendanceInput,
    ) -> Result<AttendanceRecord, ApiError> {
        validate_attendance(input)?;
        let request = self.authorized(Method::POST, "/attendances/")?.json(input);
        self.send_json(request).await
    }

    pub async fn update_attendance(
        &self,
        id: AttendanceId,
        input: &AttendanceInput,
    ) -> Result<AttendanceRecord, ApiError> {
        validate_attendance(input)?;
        let request = self
            .authorized(Method::PUT, &format!("/attendances/{}", id))?
            .json(input);
        self.send_json(request).await
    }

    pub async fn delete_attendance(&self, id: AttendanceId) -> Result<(), ApiError> {
        let request = self.authorized(Method::DELETE, &format!("/attendances/{}", id))?;
        self.send_empty(request).await
    }
}

fn validate_attendance(input: &AttendanceInput) -> Result<(), ApiError> {
    let mut details = Vec::new();
    for (field, value) in [("timeIn", &input.time_in), ("timeOut", &input.time_out)] {
        if let Some(value) = value {
            if parse_time_of_day(value).is_none() {
                details.push(format!("{}: expected HH:MM:SS", field));
            }
        }
    }
    if details.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation("Validation failed", details))
    }
}
