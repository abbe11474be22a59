use uuid::Uuid;

use super::normalize_filter;
use crate::database::{Activity, ActivityFilter, DataStore};
use crate::error::ApiError;

/// List activities, optionally narrowed to one category (case-insensitive)
pub async fn list(store: &dyn DataStore, category: Option<&str>) -> Result<Vec<Activity>, ApiError> {
    let filter = ActivityFilter {
        category: normalize_filter(category),
    };
    tracing::debug!("Listing activities with {:?}", filter);

    Ok(store.list_activities(&filter).await?)
}

pub async fn get(store: &dyn DataStore, id: Uuid) -> Result<Activity, ApiError> {
    match store.get_activity(id).await {
        Ok(Some(activity)) => Ok(activity),
        Ok(None) => Err(ApiError::not_found("Activity not found")),
        Err(e) => Err(e.into()),
    }
}
