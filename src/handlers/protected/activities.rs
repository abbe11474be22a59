use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::guard_page;
use crate::auth::AuthContext;
use crate::services::activities;
use crate::state::AppState;
use crate::views;

#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// GET /activities?category= - recommended activities
pub async fn activities_page(
    State(state): State<AppState>,
    ctx: AuthContext,
    Query(query): Query<CategoryQuery>,
) -> Response {
    let session = match guard_page(&state, &ctx).await {
        Ok(session) => session,
        Err(prompt) => return prompt,
    };

    match activities::list(state.store.as_ref(), query.category.as_deref()).await {
        Ok(list) => views::layout(
            "Activities",
            Some(&session.user),
            &format!("<h1>Activities</h1>{}", views::activity_list(&list)),
        )
        .into_response(),
        Err(e) => (e.status_code(), views::error_page(Some(&session.user), e.message())).into_response(),
    }
}
