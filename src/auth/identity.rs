use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, DecodingKey, Validation};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use super::{Credentials, Session, SessionLookup, User, VerificationError};
use crate::config::IdentityConfig;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid identity configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Verification(#[from] VerificationError),
}

/// Tokens issued by the identity service on sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

/// Capability surface of the hosted identity service.
///
/// `current_session` reports "no session" as `Ok(None)` and keeps `Err`
/// for the cases where the service could not give an answer.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    async fn current_session(&self, credentials: &Credentials) -> SessionLookup;

    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionTokens, IdentityError>;

    async fn sign_out(&self, credentials: &Credentials) -> Result<(), IdentityError>;
}

/// HTTP client for a GoTrue-style identity API (`/auth/v1/*`)
#[derive(Clone)]
pub struct RemoteIdentityClient {
    http: reqwest::Client,
    base: Url,
    anon_key: String,
}

#[derive(Debug, Deserialize)]
struct IdentityUser {
    id: Uuid,
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    full_name: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AccessClaims {
    sub: String,
    exp: i64,
    session_id: Option<String>,
}

impl RemoteIdentityClient {
    pub fn new(config: &IdentityConfig) -> Result<Self, IdentityError> {
        let base = Url::parse(&config.url).map_err(|e| IdentityError::Config(e.to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| IdentityError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base,
            anon_key: config.anon_key.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(&format!("{}/{}", self.base.path().trim_end_matches('/'), path));
        url
    }
}

#[async_trait]
impl IdentityClient for RemoteIdentityClient {
    async fn current_session(&self, credentials: &Credentials) -> SessionLookup {
        let Some(token) = credentials.access_token.as_deref() else {
            return Ok(None);
        };

        let response = self
            .http
            .get(self.endpoint("auth/v1/user"))
            .bearer_auth(token)
            .header("apikey", &self.anon_key)
            .send()
            .await
            .map_err(|e| VerificationError::Transport(e.to_string()))?;

        let status = response.status();
        if matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            tracing::debug!("Identity service rejected access token ({})", status);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(VerificationError::Status(status.as_u16()));
        }

        let body: IdentityUser = response
            .json()
            .await
            .map_err(|e| VerificationError::Decode(e.to_string()))?;

        let claims = read_claims(token)?;
        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| VerificationError::Decode(format!("invalid exp {}", claims.exp)))?;
        if expires_at <= Utc::now() {
            return Ok(None);
        }

        Ok(Some(Session {
            id: claims.session_id.unwrap_or(claims.sub),
            user: User {
                id: body.id,
                email: body.email,
                display_name: body.user_metadata.full_name.or(body.user_metadata.name),
            },
            expires_at,
        }))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionTokens, IdentityError> {
        let mut url = self.endpoint("auth/v1/token");
        url.set_query(Some("grant_type=password"));

        let response = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| VerificationError::Transport(e.to_string()))?;

        let status = response.status();
        if matches!(status, StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED) {
            return Err(IdentityError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(VerificationError::Status(status.as_u16()).into());
        }

        response
            .json::<SessionTokens>()
            .await
            .map_err(|e| VerificationError::Decode(e.to_string()).into())
    }

    async fn sign_out(&self, credentials: &Credentials) -> Result<(), IdentityError> {
        let Some(token) = credentials.access_token.as_deref() else {
            return Ok(());
        };

        let response = self
            .http
            .post(self.endpoint("auth/v1/logout"))
            .bearer_auth(token)
            .header("apikey", &self.anon_key)
            .send()
            .await
            .map_err(|e| VerificationError::Transport(e.to_string()))?;

        let status = response.status();
        // Already expired or revoked sessions count as signed out
        if status.is_success()
            || matches!(
                status,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
            )
        {
            Ok(())
        } else {
            Err(VerificationError::Status(status.as_u16()).into())
        }
    }
}

/// Reads session id and expiry from an access token the identity service
/// has already accepted. The signature is the service's concern.
fn read_claims(token: &str) -> Result<AccessClaims, VerificationError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<AccessClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| VerificationError::Decode(e.to_string()))
}
