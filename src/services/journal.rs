use uuid::Uuid;

use super::normalize_filter;
use crate::database::{DataStore, JournalEntry, JournalFilter};
use crate::error::ApiError;

/// List a user's journal entries, newest first
pub async fn list(store: &dyn DataStore, user_id: Uuid, mood: Option<&str>) -> Result<Vec<JournalEntry>, ApiError> {
    let filter = JournalFilter {
        user_id,
        mood: normalize_filter(mood),
    };

    Ok(store.list_journal_entries(&filter).await?)
}

/// Entries belonging to other users are reported as missing
pub async fn get(store: &dyn DataStore, user_id: Uuid, id: Uuid) -> Result<JournalEntry, ApiError> {
    match store.get_journal_entry(user_id, id).await {
        Ok(Some(entry)) => Ok(entry),
        Ok(None) => Err(ApiError::not_found("Journal entry not found")),
        Err(e) => Err(e.into()),
    }
}
