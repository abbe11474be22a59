// Sign-in and sign-out against the hosted identity service.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::auth::{decide_lookup, identity::IdentityError, AuthContext, GateDecision, RouteClass};
use crate::config::AppConfig;
use crate::middleware::{found, no_store_headers};
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Page-level check for the auth-only login route
async fn redirect_if_signed_in(state: &AppState, ctx: &AuthContext) -> Option<Response> {
    match decide_lookup(RouteClass::AuthOnly, ctx.session().await) {
        GateDecision::RedirectToHome => Some(found(state.policy.home_path())),
        _ => None,
    }
}

/// GET /login - sign-in form
pub async fn login_get(State(state): State<AppState>, ctx: AuthContext) -> Response {
    if let Some(redirect) = redirect_if_signed_in(&state, &ctx).await {
        return redirect;
    }
    views::login_form(None).into_response()
}

/// POST /login - exchange email and password for session cookies
pub async fn login_post(
    State(state): State<AppState>,
    ctx: AuthContext,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    if let Some(redirect) = redirect_if_signed_in(&state, &ctx).await {
        return redirect;
    }

    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            views::login_form(Some("Email and password are required")),
        )
            .into_response();
    }

    match state.identity.sign_in(email, &form.password).await {
        Ok(tokens) => {
            tracing::info!("User signed in");
            let jar = jar
                .add(session_cookie(&state.config, &state.config.identity.access_cookie, tokens.access_token))
                .add(session_cookie(&state.config, &state.config.identity.refresh_cookie, tokens.refresh_token));
            (jar, found(state.policy.home_path())).into_response()
        }
        Err(IdentityError::InvalidCredentials) => {
            tracing::info!("Sign-in rejected for submitted credentials");
            (
                StatusCode::UNAUTHORIZED,
                views::login_form(Some("Invalid email or password")),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Sign-in failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                views::login_form(Some("Sign-in is temporarily unavailable, please try again")),
            )
                .into_response()
        }
    }
}

/// POST /auth/signout - end the session and clear client state
///
/// The redirect is sent even when the identity service could not be told,
/// since the cookies are expired either way.
pub async fn signout_post(State(state): State<AppState>, ctx: AuthContext, jar: CookieJar) -> Response {
    if let Err(e) = ctx.client().sign_out(ctx.credentials()).await {
        tracing::error!("Sign-out with identity service failed: {}", e);
    }

    let identity = &state.config.identity;
    let jar = jar
        .remove(Cookie::build((identity.access_cookie.clone(), "")).path("/"))
        .remove(Cookie::build((identity.refresh_cookie.clone(), "")).path("/"));

    (jar, no_store_headers(), found("/")).into_response()
}

fn session_cookie(config: &AppConfig, name: &str, value: String) -> Cookie<'static> {
    Cookie::build((name.to_string(), value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.security.secure_cookies)
        .build()
}
