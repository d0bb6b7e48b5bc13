use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Session expired: {0}")]
    Unauthorized(String),
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("Not signed in")]
    NotAuthenticated,
    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<String>,
    },
    #[error("{0}")]
    NotFound(String),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Request(_) => "REQUEST_FAILED",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::InvalidCredentials(_) => "INVALID_CREDENTIALS",
            ApiError::NotAuthenticated => "NOT_AUTHENTICATED",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Status { .. } => "HTTP_ERROR",
            ApiError::Decode(_) => "DECODE_ERROR",
        }
    }

    pub fn validation(message: impl Into<String>, details: Vec<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            details,
        }
    }

    /// True when the caller has to sign in again before retrying.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_) | ApiError::NotAuthenticated)
    }

    /// Maps a non-success status and its body to an error.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let (message, details) = ErrorBody::parse(body, status);
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::Validation { message, details }
            }
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            _ => ApiError::Status {
                status: status.as_u16(),
                message,
            },
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let code = e.code.as_ref();
                    format!("{}: {}", field, code)
                })
            })
            .collect();
        messages.sort();
        ApiError::validation("Validation failed", messages)
    }
}

/// Human-readable message carried by an error body.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    ErrorBody::parse(body, status).0
}

/// FastAPI error payload: `{"detail": "..."}` or `{"detail": [{"loc": [..], "msg": ".."}]}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

impl ErrorBody {
    fn parse(body: &str, status: StatusCode) -> (String, Vec<String>) {
        let fallback = || {
            status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string()
        };
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.detail);

        match detail {
            Some(Value::String(message)) => (message, Vec::new()),
            Some(Value::Array(items)) => {
                let details: Vec<String> = items.iter().map(describe_validation_item).collect();
                let message = details.first().cloned().unwrap_or_else(fallback);
                (message, details)
            }
            Some(other) => (other.to_string(), Vec::new()),
            None if !body.trim().is_empty() && body.len() <= 200 => {
                (body.trim().to_string(), Vec::new())
            }
            None => (fallback(), Vec::new()),
        }
    }
}

fn describe_validation_item(item: &Value) -> String {
    let msg = item
        .get("msg")
        .and_then(Value::as_str)
        .unwrap_or("invalid value");
    let field = item
        .get("loc")
        .and_then(Value::as_array)
        .and_then(|loc| loc.last())
        .map(|last| match last {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });
    match field {
        Some(field) => format!("{}: {}", field, msg),
        None => msg.to_string(),
    }
}
