use reqwest::Method;

use super::{
    client::ApiClient,
    error::ApiError,
    types::{PerformanceReview, PerformanceSummaryResponse},
};

impl ApiClient {
    pub async fn list_performance_reviews(&self) -> Result<Vec<PerformanceReview>, ApiError> {
        let request = self.authorized(Method::GET, "/performance_reviews/")?;
        self.send_json(request).await
    }

    pub async fn performance_summary(&self) -> Result<PerformanceSummaryResponse, ApiError> {
        let request = self.authorized(Method::GET, "/performance_reviews/summary")?;
        self.send_json(request).await
    }
}
