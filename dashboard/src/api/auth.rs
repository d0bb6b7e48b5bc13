use reqwest::StatusCode;

use super::{
    client::{error_from_response, ApiClient},
    error::{error_message, ApiError},
    types::{LoginRequest, LoginResponse},
};
use crate::state::auth::{mask_secret, Session};

impl ApiClient {
    /// `POST /token` with a form-encoded body. The token is stored in the
    /// client's [`crate::state::AuthContext`] on success.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        tracing::debug!(path = "/token", username, "API request");
        let response = self
            .http_client()
            .post(self.url("/token"))
            .form(&request)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let login: LoginResponse = response
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            tracing::debug!(token = %mask_secret(&login.access_token), "Received access token");
            let session = Session::from_login(username, login);
            self.auth().begin(session.clone());
            Ok(session)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::BAD_REQUEST {
            // A rejected login is not an expired session; leave the context alone.
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::InvalidCredentials(error_message(status, &body)))
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// The backend keeps no server-side session, so logging out only drops the token.
    pub fn logout(&self) {
        self.auth().end();
    }
}
