use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::manager::DatabaseError;
use super::models::{Activity, JournalEntry};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    /// Already lowercased by the caller
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalFilter {
    pub user_id: Uuid,
    pub mood: Option<String>,
}

/// Row access for the resources the app reads. `get_*` returns `Ok(None)`
/// for a missing row; `Err` is reserved for backend failures.
#[async_trait]
pub trait DataStore: Send + Sync {
    async fn list_activities(&self, filter: &ActivityFilter) -> Result<Vec<Activity>, DatabaseError>;

    async fn get_activity(&self, id: Uuid) -> Result<Option<Activity>, DatabaseError>;

    async fn list_journal_entries(&self, filter: &JournalFilter) -> Result<Vec<JournalEntry>, DatabaseError>;

    async fn get_journal_entry(&self, user_id: Uuid, id: Uuid) -> Result<Option<JournalEntry>, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;
}

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DataStore for PgStore {
    async fn list_activities(&self, filter: &ActivityFilter) -> Result<Vec<Activity>, DatabaseError> {
        let rows = sqlx::query_as::<_, Activity>(
            "SELECT id, title, description, category, duration_minutes, created_at
             FROM activities
             WHERE ($1::text IS NULL OR lower(category) = $1)
             ORDER BY created_at DESC",
        )
        .bind(filter.category.as_deref())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_activity(&self, id: Uuid) -> Result<Option<Activity>, DatabaseError> {
        let row = sqlx::query_as::<_, Activity>(
            "SELECT id, title, description, category, duration_minutes, created_at
             FROM activities
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_journal_entries(&self, filter: &JournalFilter) -> Result<Vec<JournalEntry>, DatabaseError> {
        let rows = sqlx::query_as::<_, JournalEntry>(
            "SELECT id, user_id, title, content, mood, created_at
             FROM journal_entries
             WHERE user_id = $1
             AND ($2::text IS NULL OR lower(mood) = $2)
             ORDER BY created_at DESC",
        )
        .bind(filter.user_id)
        .bind(filter.mood.as_deref())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_journal_entry(&self, user_id: Uuid, id: Uuid) -> Result<Option<JournalEntry>, DatabaseError> {
        let row = sqlx::query_as::<_, JournalEntry>(
            "SELECT id, user_id, title, content, mood, created_at
             FROM journal_entries
             WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
