use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use serde_json::json;

use crate::state::AppState;
use crate::views;

/// GET / - landing page
pub async fn home(State(state): State<AppState>) -> Html<String> {
    views::layout(
        "Welcome",
        None,
        &format!(
            r#"<h1>Mindwell</h1><p>Track your mood, keep a journal and find activities that help.</p><a href="{}">Sign in</a>"#,
            views::escape(state.policy.login_path())
        ),
    )
}

/// GET /health - liveness plus a database ping
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "error": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now
                    }
                })),
            )
        }
    }
}
