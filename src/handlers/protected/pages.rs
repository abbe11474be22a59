use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use super::guard_page;
use crate::auth::AuthContext;
use crate::state::AppState;
use crate::views;

/// GET /dashboard
pub async fn dashboard_page(State(state): State<AppState>, ctx: AuthContext) -> Response {
    let session = match guard_page(&state, &ctx).await {
        Ok(session) => session,
        Err(prompt) => return prompt,
    };
    let user = &session.user;

    views::layout(
        "Dashboard",
        Some(user),
        &format!(
            r#"<h1>Welcome back, {}</h1><p>How are you feeling today?</p><ul><li><a href="/journal">Write in your journal</a></li><li><a href="/activities">Find an activity</a></li><li><a href="/chat">Talk it through</a></li></ul>"#,
            views::escape(user.display_name())
        ),
    )
    .into_response()
}

/// GET /chat - shell only, the assistant lives in the front end
pub async fn chat_page(State(state): State<AppState>, ctx: AuthContext) -> Response {
    let session = match guard_page(&state, &ctx).await {
        Ok(session) => session,
        Err(prompt) => return prompt,
    };

    views::layout(
        "Chat",
        Some(&session.user),
        r#"<h1>Chat</h1><section id="chat"></section>"#,
    )
    .into_response()
}

/// GET /insights
pub async fn insights_page(State(state): State<AppState>, ctx: AuthContext) -> Response {
    let session = match guard_page(&state, &ctx).await {
        Ok(session) => session,
        Err(prompt) => return prompt,
    };

    views::layout(
        "Insights",
        Some(&session.user),
        r#"<h1>Insights</h1><section id="mood-chart"></section><section id="activity-chart"></section>"#,
    )
    .into_response()
}
