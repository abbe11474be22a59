mod common;

use axum::http::{header, StatusCode};
use common::*;

#[tokio::test]
async fn login_sets_session_cookies_and_redirects_home() {
    let h = harness(MemoryStore::default());

    let res = send(
        &h.app,
        post_form("/login", None, &format!("email=robin%40example.com&password={}", PASSWORD)),
    )
    .await;

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/dashboard");

    let cookies: Vec<_> = res
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    let access = cookies
        .iter()
        .find(|c| c.starts_with("sb-access-token="))
        .expect("access cookie");
    assert!(access.contains("HttpOnly"));
    assert!(access.contains("token-robin"));

    // The issued cookie opens the dashboard
    let res = send(&h.app, get("/dashboard", Some(&session_cookie("token-robin@example.com")))).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn wrong_password_rerenders_form() {
    let h = harness(MemoryStore::default());

    let res = send(&h.app, post_form("/login", None, "email=robin%40example.com&password=nope")).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(body_text(res).await.contains("Invalid email or password"));
}

#[tokio::test]
async fn blank_fields_are_rejected() {
    let h = harness(MemoryStore::default());

    let res = send(&h.app, post_form("/login", None, "email=+&password=")).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signed_in_user_cannot_post_login() {
    let h = harness(MemoryStore::default());
    h.identity.with_user("tok", None);

    let res = send(
        &h.app,
        post_form("/login", Some(&session_cookie("tok")), "email=a%40b.c&password=x"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/dashboard");
}
