// Route classification and the gate truth table.
//
// Both enforcement points (edge middleware and page handlers) call into
// `decide_lookup`, so there is exactly one copy of the table.

use serde::Serialize;

use super::SessionLookup;
use crate::config::GateConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RouteClass {
    Protected,
    AuthOnly,
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GateDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

/// Prefix sets used to classify request paths
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    protected: Vec<String>,
    auth_only: Vec<String>,
    exempt: Vec<String>,
    login_path: String,
    home_path: String,
}

impl RoutePolicy {
    pub fn new(config: &GateConfig) -> Self {
        let normalize = |prefixes: &[String]| {
            prefixes
                .iter()
                .map(|p| p.trim_end_matches('/').to_string())
                .filter(|p| !p.is_empty())
                .collect()
        };
        Self {
            protected: normalize(&config.protected_prefixes),
            auth_only: normalize(&config.auth_only_prefixes),
            exempt: normalize(&config.exempt_prefixes),
            login_path: config.login_path.clone(),
            home_path: config.home_path.clone(),
        }
    }

    pub fn classify(&self, path: &str) -> RouteClass {
        if self.protected.iter().any(|p| matches_prefix(path, p)) {
            RouteClass::Protected
        } else if self.auth_only.iter().any(|p| matches_prefix(path, p)) {
            RouteClass::AuthOnly
        } else {
            RouteClass::Public
        }
    }

    /// Static assets and the API namespace skip the edge gate.
    ///
    /// A file-like last segment only exempts public paths, so
    /// `/journal/entry.json` is still gated.
    pub fn is_exempt(&self, path: &str) -> bool {
        if self.exempt.iter().any(|p| matches_prefix(path, p)) {
            return true;
        }
        if self.classify(path) != RouteClass::Public {
            return false;
        }
        path.rsplit('/')
            .next()
            .map(|last| last.contains('.'))
            .unwrap_or(false)
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self::new(&GateConfig::default())
    }
}

/// Segment-aware prefix match: `/journal` covers `/journal/x` but not `/journalism`.
fn matches_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}

pub fn decide(class: RouteClass, session_present: bool) -> GateDecision {
    match (class, session_present) {
        (RouteClass::Protected, false) => GateDecision::RedirectToLogin,
        (RouteClass::Protected, true) => GateDecision::Allow,
        (RouteClass::AuthOnly, true) => GateDecision::RedirectToHome,
        (RouteClass::AuthOnly, false) => GateDecision::Allow,
        (RouteClass::Public, _) => GateDecision::Allow,
    }
}

/// Fail-closed: a verifier failure is treated as "no session".
pub fn decide_lookup(class: RouteClass, lookup: &SessionLookup) -> GateDecision {
    let present = match lookup {
        Ok(session) => session.is_some(),
        Err(e) => {
            tracing::warn!("Session verification failed, treating as anonymous: {}", e);
            false
        }
    };
    decide(class, present)
}
