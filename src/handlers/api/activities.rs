use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::Activity;
use crate::error::ApiError;
use crate::services::activities;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ActivitiesQuery {
    pub category: Option<String>,
}

/// GET /api/activities?category= - JSON array of activities
pub async fn activities_get(
    State(state): State<AppState>,
    Query(query): Query<ActivitiesQuery>,
) -> Result<Json<Vec<Activity>>, ApiError> {
    let list = activities::list(state.store.as_ref(), query.category.as_deref()).await?;
    Ok(Json(list))
}

/// GET /api/activities/:id
pub async fn activity_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Activity>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Activity not found"))?;
    let activity = activities::get(state.store.as_ref(), id).await?;
    Ok(Json(activity))
}
