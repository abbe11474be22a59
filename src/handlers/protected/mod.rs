// handlers/protected/mod.rs - Pages behind the session gate
//
// The edge gate already redirects anonymous requests, but every page here
// re-checks through `guard_page` before rendering. Both checks use the same
// `decide_lookup` table.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::auth::{AuthContext, Session};
use crate::state::AppState;
use crate::views;

pub mod activities;
pub mod journal;
pub mod pages;

pub use activities::activities_page;
pub use journal::{journal_entry_page, journal_page};
pub use pages::{chat_page, dashboard_page, insights_page};

/// Session for rendering, or the inline sign-in prompt when there is none
pub async fn guard_page(state: &AppState, ctx: &AuthContext) -> Result<Session, Response> {
    match ctx.authorized().await {
        Some(session) => Ok(session.clone()),
        None => Err((
            StatusCode::UNAUTHORIZED,
            views::sign_in_prompt(state.policy.login_path()),
        )
            .into_response()),
    }
}
