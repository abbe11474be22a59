use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::middleware::access_gate;
use crate::state::AppState;

/// Full application router. The access gate wraps every route so it runs
/// before routing decides anything.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(handlers::public::home))
        .route("/health", get(handlers::public::health))
        .merge(auth_routes())
        // Protected pages
        .merge(page_routes())
        // JSON API (exempt from the edge gate)
        .merge(api_routes())
        .layer(middleware::from_fn_with_state(state.clone(), access_gate))
        .layer(TraceLayer::new_for_http());

    let router = if state.config.security.enable_cors {
        router.layer(cors_layer(&state))
    } else {
        router
    };

    router.with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use handlers::public;

    Router::new()
        .route("/login", get(public::login_get).post(public::login_post))
        .route("/auth/signout", post(public::signout_post))
}

fn page_routes() -> Router<AppState> {
    use handlers::protected;

    Router::new()
        .route("/dashboard", get(protected::dashboard_page))
        .route("/chat", get(protected::chat_page))
        .route("/insights", get(protected::insights_page))
        .route("/activities", get(protected::activities_page))
        .route("/journal", get(protected::journal_page))
        .route("/journal/:id", get(protected::journal_entry_page))
}

fn api_routes() -> Router<AppState> {
    use handlers::api;

    Router::new()
        .route("/api/activities", get(api::activities_get))
        .route("/api/activities/:id", get(api::activity_get))
        .route("/api/journal", get(api::journal_list_get))
        .route("/api/journal/:id", get(api::journal_entry_get))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let origins: Vec<HeaderValue> = state
        .config
        .security
        .cors_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(true)
}
