#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use mindwell::auth::identity::IdentityError;
use mindwell::auth::{Credentials, IdentityClient, Session, SessionTokens, User, VerificationError};
use mindwell::config::AppConfig;
use mindwell::database::{Activity, ActivityFilter, DataStore, DatabaseError, JournalEntry, JournalFilter};
use mindwell::{app, AppState};

pub const PASSWORD: &str = "correct-horse";

/// Identity service double: tokens map to sessions, sign-out revokes them
#[derive(Default)]
pub struct FakeIdentity {
    sessions: Mutex<HashMap<String, Session>>,
    pub lookups: AtomicUsize,
    pub fail: AtomicBool,
}

impl FakeIdentity {
    pub fn with_user(&self, token: &str, display_name: Option<&str>) -> Session {
        let session = Session {
            id: format!("session-{}", token),
            user: User {
                id: Uuid::new_v4(),
                email: Some(format!("{}@example.com", token)),
                display_name: display_name.map(str::to_string),
            },
            expires_at: Utc::now() + Duration::hours(1),
        };
        self.sessions.lock().unwrap().insert(token.to_string(), session.clone());
        session
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl IdentityClient for FakeIdentity {
    async fn current_session(&self, credentials: &Credentials) -> Result<Option<Session>, VerificationError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(VerificationError::Transport("connection refused".to_string()));
        }
        let token = credentials.access_token.as_deref().unwrap_or_default();
        Ok(self.sessions.lock().unwrap().get(token).cloned())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionTokens, IdentityError> {
        if password != PASSWORD {
            return Err(IdentityError::InvalidCredentials);
        }
        let token = format!("token-{}", email);
        self.with_user(&token, None);
        Ok(SessionTokens {
            access_token: token,
            refresh_token: "refresh".to_string(),
            expires_in: 3600,
        })
    }

    async fn sign_out(&self, credentials: &Credentials) -> Result<(), IdentityError> {
        if let Some(token) = credentials.access_token.as_deref() {
            self.sessions.lock().unwrap().remove(token);
        }
        Ok(())
    }
}

/// Store double that records activity filters it receives
#[derive(Default)]
pub struct MemoryStore {
    pub activities: Vec<Activity>,
    pub journal: Vec<JournalEntry>,
    pub fail: bool,
    pub activity_filters: Mutex<Vec<ActivityFilter>>,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), DatabaseError> {
        if self.fail {
            Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn list_activities(&self, filter: &ActivityFilter) -> Result<Vec<Activity>, DatabaseError> {
        self.activity_filters.lock().unwrap().push(filter.clone());
        self.check()?;
        Ok(self
            .activities
            .iter()
            .filter(|a| filter.category.as_deref().map_or(true, |c| a.category == c))
            .cloned()
            .collect())
    }

    async fn get_activity(&self, id: Uuid) -> Result<Option<Activity>, DatabaseError> {
        self.check()?;
        Ok(self.activities.iter().find(|a| a.id == id).cloned())
    }

    async fn list_journal_entries(&self, filter: &JournalFilter) -> Result<Vec<JournalEntry>, DatabaseError> {
        self.check()?;
        Ok(self
            .journal
            .iter()
            .filter(|e| e.user_id == filter.user_id)
            .filter(|e| filter.mood.is_none() || e.mood == filter.mood)
            .cloned()
            .collect())
    }

    async fn get_journal_entry(&self, user_id: Uuid, id: Uuid) -> Result<Option<JournalEntry>, DatabaseError> {
        self.check()?;
        Ok(self.journal.iter().find(|e| e.id == id && e.user_id == user_id).cloned())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        self.check()
    }
}

pub fn activity(title: &str, category: &str) -> Activity {
    Activity {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: Some(format!("{} for ten minutes", title)),
        category: category.to_string(),
        duration_minutes: Some(10),
        created_at: Utc::now(),
    }
}

pub fn journal_entry(user_id: Uuid, title: &str) -> JournalEntry {
    JournalEntry {
        id: Uuid::new_v4(),
        user_id,
        title: title.to_string(),
        content: "Slept well, felt calmer.".to_string(),
        mood: Some("calm".to_string()),
        created_at: Utc::now(),
    }
}

pub struct Harness {
    pub identity: Arc<FakeIdentity>,
    pub store: Arc<MemoryStore>,
    pub state: AppState,
    pub app: Router,
}

pub fn harness_with(identity: FakeIdentity, store: MemoryStore) -> Harness {
    let identity = Arc::new(identity);
    let store = Arc::new(store);
    let state = AppState::new(AppConfig::development(), identity.clone(), store.clone());
    Harness {
        identity,
        store,
        app: app(state.clone()),
        state,
    }
}

pub fn harness(store: MemoryStore) -> Harness {
    harness_with(FakeIdentity::default(), store)
}

pub fn session_cookie(token: &str) -> String {
    format!("sb-access-token={}", token)
}

pub fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(path: &str, cookie: Option<&str>, form: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}
