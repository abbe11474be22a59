use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::response::found;
use crate::auth::{decide_lookup, AuthContext, GateDecision, RouteClass};
use crate::state::AppState;

/// Edge access gate, evaluated before routing.
///
/// Installs the request's `AuthContext` so handlers reuse the same lookup,
/// then classifies the path and either passes the request on or answers
/// with a 302. The session lookup completes before any handler runs.
pub async fn access_gate(
    State(state): State<AppState>,
    ctx: AuthContext,
    mut request: Request,
    next: Next,
) -> Response {
    request.extensions_mut().insert(ctx.clone());

    let path = request.uri().path().to_owned();
    if state.policy.is_exempt(&path) {
        return next.run(request).await;
    }

    let class = state.policy.classify(&path);
    if class == RouteClass::Public {
        return next.run(request).await;
    }

    match decide_lookup(class, ctx.session().await) {
        GateDecision::Allow => next.run(request).await,
        GateDecision::RedirectToLogin => {
            tracing::debug!("Gate: no session for {}, redirecting to login", path);
            found(state.policy.login_path())
        }
        GateDecision::RedirectToHome => {
            tracing::debug!("Gate: session present on {}, redirecting home", path);
            found(state.policy.home_path())
        }
    }
}
