use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub identity: IdentityConfig,
    pub gate: GateConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

/// Hosted identity service the session verifier talks to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub url: String,
    pub anon_key: String,
    pub timeout_secs: u64,
    pub access_cookie: String,
    pub refresh_cookie: String,
}

/// Route prefix sets consumed by the route classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    pub protected_prefixes: Vec<String>,
    pub auth_only_prefixes: Vec<String>,
    pub exempt_prefixes: Vec<String>,
    pub login_path: String,
    pub home_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
    pub secure_cookies: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = Some(v);
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }

        // Identity overrides
        if let Ok(v) = env::var("IDENTITY_URL") {
            self.identity.url = v;
        }
        if let Ok(v) = env::var("IDENTITY_ANON_KEY") {
            self.identity.anon_key = v;
        }
        if let Ok(v) = env::var("IDENTITY_TIMEOUT_SECS") {
            self.identity.timeout_secs = v.parse().unwrap_or(self.identity.timeout_secs);
        }
        if let Ok(v) = env::var("SESSION_ACCESS_COOKIE") {
            self.identity.access_cookie = v;
        }
        if let Ok(v) = env::var("SESSION_REFRESH_COOKIE") {
            self.identity.refresh_cookie = v;
        }

        // Gate overrides
        if let Ok(v) = env::var("GATE_PROTECTED_PREFIXES") {
            self.gate.protected_prefixes = split_list(&v);
        }
        if let Ok(v) = env::var("GATE_AUTH_ONLY_PREFIXES") {
            self.gate.auth_only_prefixes = split_list(&v);
        }
        if let Ok(v) = env::var("GATE_EXEMPT_PREFIXES") {
            self.gate.exempt_prefixes = split_list(&v);
        }
        if let Ok(v) = env::var("GATE_LOGIN_PATH") {
            self.gate.login_path = v;
        }
        if let Ok(v) = env::var("GATE_HOME_PATH") {
            self.gate.home_path = v;
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = split_list(&v);
        }
        if let Ok(v) = env::var("SECURITY_SECURE_COOKIES") {
            self.security.secure_cookies = v.parse().unwrap_or(self.security.secure_cookies);
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 5,
                connection_timeout: 30,
            },
            identity: IdentityConfig {
                url: "http://localhost:54321".to_string(),
                anon_key: String::new(),
                timeout_secs: 10,
                access_cookie: "sb-access-token".to_string(),
                refresh_cookie: "sb-refresh-token".to_string(),
            },
            gate: GateConfig::default(),
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["http://localhost:3000".to_string()],
                secure_cookies: false,
            },
        }
    }

    fn staging() -> Self {
        let mut config = Self::development();
        config.environment = Environment::Staging;
        config.server.host = "0.0.0.0".to_string();
        config.database.max_connections = 10;
        config.database.connection_timeout = 10;
        config.identity.timeout_secs = 5;
        config.security.cors_origins = vec!["https://staging.example.com".to_string()];
        config.security.secure_cookies = true;
        config
    }

    fn production() -> Self {
        let mut config = Self::development();
        config.environment = Environment::Production;
        config.server.host = "0.0.0.0".to_string();
        config.database.max_connections = 20;
        config.database.connection_timeout = 5;
        config.identity.timeout_secs = 5;
        config.security.cors_origins = vec!["https://app.example.com".to_string()];
        config.security.secure_cookies = true;
        config
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            protected_prefixes: owned(&["/dashboard", "/chat", "/journal", "/activities", "/insights"]),
            auth_only_prefixes: owned(&["/login"]),
            exempt_prefixes: owned(&["/api", "/static", "/favicon.ico"]),
            login_path: "/login".to_string(),
            home_path: "/dashboard".to_string(),
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
