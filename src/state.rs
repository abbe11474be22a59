use std::sync::Arc;

use crate::auth::{IdentityClient, RoutePolicy};
use crate::config::AppConfig;
use crate::database::DataStore;

/// Dependencies handed to every request. Nothing here is mutated per request;
/// per-request state lives in `AuthContext`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub policy: Arc<RoutePolicy>,
    pub identity: Arc<dyn IdentityClient>,
    pub store: Arc<dyn DataStore>,
}

impl AppState {
    pub fn new(config: AppConfig, identity: Arc<dyn IdentityClient>, store: Arc<dyn DataStore>) -> Self {
        let policy = RoutePolicy::new(&config.gate);
        Self {
            config: Arc::new(config),
            policy: Arc::new(policy),
            identity,
            store,
        }
    }
}
