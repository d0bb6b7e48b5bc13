use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::watch;

use crate::api::LoginResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    SignedOut,
    SignedIn,
    /// The backend rejected the token; the user has to sign in again.
    Expired,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub subject: String,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn from_login(username: &str, response: LoginResponse) -> Self {
        let subject =
            decode_subject(&response.access_token).unwrap_or_else(|| username.to_string());
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            subject,
            signed_in_at: Utc::now(),
        }
    }

    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Session holder shared between the API client and whoever renders the
/// login view. Cloning shares the same session.
#[derive(Clone)]
pub struct AuthContext {
    inner: Arc<Inner>,
}

struct Inner {
    session: RwLock<Option<Session>>,
    status: watch::Sender<AuthStatus>,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("status", &self.status())
            .finish()
    }
}

impl AuthContext {
    pub fn new() -> Self {
        let (status, _) = watch::channel(AuthStatus::SignedOut);
        Self {
            inner: Arc::new(Inner {
                session: RwLock::new(None),
                status,
            }),
        }
    }

    pub fn with_session(session: Session) -> Self {
        let context = Self::new();
        context.begin(session);
        context
    }

    pub fn begin(&self, session: Session) {
        tracing::info!(subject = %session.subject, "Signed in");
        self.replace(Some(session), AuthStatus::SignedIn);
    }

    pub fn end(&self) {
        tracing::info!("Signed out");
        self.replace(None, AuthStatus::SignedOut);
    }

    /// Drops the session after the backend answered 401.
    pub fn expire(&self) {
        tracing::warn!("Session rejected by backend; clearing stored token");
        self.replace(None, AuthStatus::Expired);
    }

    pub fn session(&self) -> Option<Session> {
        self.inner
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn bearer(&self) -> Option<String> {
        self.inner
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Session::authorization_value)
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == AuthStatus::SignedIn
    }

    pub fn status(&self) -> AuthStatus {
        *self.inner.status.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthStatus> {
        self.inner.status.subscribe()
    }

    fn replace(&self, session: Option<Session>, status: AuthStatus) {
        *self
            .inner
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner) = session;
        self.inner.status.send_replace(status);
    }
}

/// Reads the `sub` claim without verifying the signature; display only.
fn decode_subject(token: &str) -> Option<String> {
    let mut parts = token.split('.');
    parts.next()?;
    let payload = parts.next()?;
    let decoded = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let value: Value = serde_json::from_slice(&decoded).ok()?;
    value
        .get("sub")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

pub(crate) fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(4).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}
