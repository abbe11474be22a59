use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use super::require_session;
use crate::auth::AuthContext;
use crate::database::JournalEntry;
use crate::error::ApiError;
use crate::services::journal;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JournalQuery {
    pub mood: Option<String>,
}

/// GET /api/journal?mood= - the caller's entries
pub async fn journal_list_get(
    State(state): State<AppState>,
    ctx: AuthContext,
    Query(query): Query<JournalQuery>,
) -> Result<Json<Vec<JournalEntry>>, ApiError> {
    let session = require_session(&ctx).await?;
    let entries = journal::list(state.store.as_ref(), session.user.id, query.mood.as_deref()).await?;
    Ok(Json(entries))
}

/// GET /api/journal/:id
pub async fn journal_entry_get(
    State(state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<String>,
) -> Result<Json<JournalEntry>, ApiError> {
    let session = require_session(&ctx).await?;
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Journal entry not found"))?;
    let entry = journal::get(state.store.as_ref(), session.user.id, id).await?;
    Ok(Json(entry))
}
