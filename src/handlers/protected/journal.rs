use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use super::guard_page;
use crate::auth::AuthContext;
use crate::services::journal;
use crate::state::AppState;
use crate::views;

/// GET /journal - the signed-in user's entries
pub async fn journal_page(State(state): State<AppState>, ctx: AuthContext) -> Response {
    let session = match guard_page(&state, &ctx).await {
        Ok(session) => session,
        Err(prompt) => return prompt,
    };

    match journal::list(state.store.as_ref(), session.user.id, None).await {
        Ok(entries) => views::layout(
            "Journal",
            Some(&session.user),
            &format!("<h1>Journal</h1>{}", views::journal_list(&entries)),
        )
        .into_response(),
        Err(e) => (e.status_code(), views::error_page(Some(&session.user), e.message())).into_response(),
    }
}

/// GET /journal/:id - a single entry, or the not-found view
pub async fn journal_entry_page(
    State(state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<String>,
) -> Response {
    let session = match guard_page(&state, &ctx).await {
        Ok(session) => session,
        Err(prompt) => return prompt,
    };

    let Ok(id) = Uuid::parse_str(&id) else {
        return (StatusCode::NOT_FOUND, views::not_found("This journal entry")).into_response();
    };

    match journal::get(state.store.as_ref(), session.user.id, id).await {
        Ok(entry) => views::layout(&entry.title, Some(&session.user), &views::journal_entry(&entry)).into_response(),
        Err(e) if e.is_not_found() => (StatusCode::NOT_FOUND, views::not_found("This journal entry")).into_response(),
        Err(e) => (e.status_code(), views::error_page(Some(&session.user), e.message())).into_response(),
    }
}
