// handlers/api/mod.rs - JSON endpoints
//
// The API namespace is exempt from the edge gate. Routes that read
// user-owned rows call `require_session` themselves.

use crate::auth::{AuthContext, Session};
use crate::error::ApiError;

pub mod activities;
pub mod journal;

pub use activities::{activities_get, activity_get};
pub use journal::{journal_entry_get, journal_list_get};

/// 401 unless the request carries a verified session
pub async fn require_session(ctx: &AuthContext) -> Result<Session, ApiError> {
    ctx.authorized()
        .await
        .cloned()
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))
}
