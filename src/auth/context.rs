use std::convert::Infallible;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use tokio::sync::OnceCell;

use super::policy::{decide_lookup, GateDecision, RouteClass};
use super::{Credentials, IdentityClient, Session, SessionLookup};
use crate::state::AppState;

/// Per-request handle on the session lookup.
///
/// Clones share one memoized result, so the identity service is asked at
/// most once per request no matter how many layers or handlers call
/// `session()`. A new context is built for every request.
#[derive(Clone)]
pub struct AuthContext {
    inner: Arc<Inner>,
}

struct Inner {
    client: Arc<dyn IdentityClient>,
    credentials: Credentials,
    lookup: OnceCell<SessionLookup>,
}

impl AuthContext {
    pub fn new(client: Arc<dyn IdentityClient>, credentials: Credentials) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                credentials,
                lookup: OnceCell::new(),
            }),
        }
    }

    pub async fn session(&self) -> &SessionLookup {
        let inner = &self.inner;
        inner
            .lookup
            .get_or_init(|| async {
                if inner.credentials.is_empty() {
                    return Ok(None);
                }
                inner.client.current_session(&inner.credentials).await
            })
            .await
    }

    /// Session to serve protected content with, if the gate would allow it.
    /// Verification failures resolve to `None`.
    pub async fn authorized(&self) -> Option<&Session> {
        let lookup = self.session().await;
        match (decide_lookup(RouteClass::Protected, lookup), lookup) {
            (GateDecision::Allow, Ok(Some(session))) => Some(session),
            _ => None,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    pub fn client(&self) -> &Arc<dyn IdentityClient> {
        &self.inner.client
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Reuse the context the edge gate already installed for this request
        if let Some(ctx) = parts.extensions.get::<AuthContext>() {
            return Ok(ctx.clone());
        }

        let jar = CookieJar::from_headers(&parts.headers);
        let credentials = Credentials::from_jar(&jar, &state.config.identity);
        Ok(AuthContext::new(state.identity.clone(), credentials))
    }
}
