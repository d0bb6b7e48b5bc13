use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, Method, RequestBuilder, Response, StatusCode,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::{config::Config, state::auth::AuthContext};

/// REST client for the HRIS backend. The session is read from the injected
/// [`AuthContext`] on every call, never from ambient state.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth: AuthContext,
}

impl ApiClient {
    pub fn new(config: &Config, auth: AuthContext) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Request(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    #[cfg(test)]
    pub(crate) fn new_with_base_url(base_url: impl Into<String>, auth: AuthContext) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
        }
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        let bearer = self.auth.bearer().ok_or(ApiError::NotAuthenticated)?;
        let value = HeaderValue::from_str(&bearer)
            .map_err(|_| ApiError::Request("Invalid token format".into()))?;
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// Request builder carrying the bearer header.
    pub(crate) fn authorized(
        &self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, ApiError> {
        let headers = self.get_auth_headers()?;
        tracing::debug!(method = %method, path, "API request");
        Ok(self
            .client
            .request(method, self.url(path))
            .headers(headers))
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            self.auth.expire();
        }
    }

    /// Sends an authenticated request and turns non-success statuses into errors.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), path = response.url().path(), "API response");
        self.handle_unauthorized_status(status);
        if status.is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response).await)
        }
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }
}

pub(crate) async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_status(status, &body);
    tracing::warn!(status = status.as_u16(), code = error.code(), error = %error, "API error");
    error
}
