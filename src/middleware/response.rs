use axum::{
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
};

/// Instructs the browser to drop cached pages, storage and cookies for the origin
pub const CLEAR_SITE_DATA: HeaderName = HeaderName::from_static("clear-site-data");

/// 302 Found to `location`
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Headers attached to sign-out so no authenticated state survives on the client
pub fn no_store_headers() -> [(HeaderName, &'static str); 4] {
    [
        (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate, max-age=0"),
        (header::PRAGMA, "no-cache"),
        (header::EXPIRES, "0"),
        (CLEAR_SITE_DATA, r#""cache", "cookies", "storage""#),
    ]
}
