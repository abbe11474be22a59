use axum_extra::extract::cookie::CookieJar;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::IdentityConfig;

pub mod context;
pub mod identity;
pub mod policy;

pub use context::AuthContext;
pub use identity::{IdentityClient, RemoteIdentityClient, SessionTokens};
pub use policy::{decide, decide_lookup, GateDecision, RouteClass, RoutePolicy};

/// Shown wherever a user has not set a display name
pub const DISPLAY_NAME_PLACEHOLDER: &str = "Friend";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DISPLAY_NAME_PLACEHOLDER)
    }
}

/// Session recognized by the identity service. Only referenced, never owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user: User,
    pub expires_at: DateTime<Utc>,
}

/// Raised when the identity service could not answer, as opposed to
/// answering "no session".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("identity service unreachable: {0}")]
    Transport(String),

    #[error("identity service returned status {0}")]
    Status(u16),

    #[error("unreadable identity response: {0}")]
    Decode(String),
}

/// `Ok(Some)` when a session is present, `Ok(None)` when absent,
/// `Err` when the verifier itself failed.
pub type SessionLookup = Result<Option<Session>, VerificationError>;

/// Credential material carried by the request cookies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Credentials {
    pub fn from_jar(jar: &CookieJar, identity: &IdentityConfig) -> Self {
        let read = |name: &str| {
            jar.get(name)
                .map(|c| c.value().trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            access_token: read(&identity.access_cookie),
            refresh_token: read(&identity.refresh_cookie),
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            refresh_token: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.access_token.is_none()
    }
}
