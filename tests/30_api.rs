mod common;

use axum::http::StatusCode;
use common::*;

#[tokio::test]
async fn activities_category_is_normalized_before_filtering() {
    let h = harness(MemoryStore {
        activities: vec![activity("Walk", "physical"), activity("Breathe", "mindfulness")],
        ..Default::default()
    });

    let res = send(&h.app, get("/api/activities?category=Physical", None)).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    let list = body.as_array().expect("JSON array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "Walk");

    let filters = h.store.activity_filters.lock().unwrap();
    assert_eq!(filters[0].category.as_deref(), Some("physical"));
}

#[tokio::test]
async fn activities_without_category_returns_all() {
    let h = harness(MemoryStore {
        activities: vec![activity("Walk", "physical"), activity("Breathe", "mindfulness")],
        ..Default::default()
    });

    let res = send(&h.app, get("/api/activities", None)).await;

    assert_eq!(body_json(res).await.as_array().unwrap().len(), 2);
    assert_eq!(h.store.activity_filters.lock().unwrap()[0].category, None);
}

#[tokio::test]
async fn activities_backend_failure_is_generic_500() {
    let h = harness(MemoryStore {
        fail: true,
        ..Default::default()
    });

    let res = send(&h.app, get("/api/activities?category=physical", None)).await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(res).await;
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], mindwell::error::GENERIC_FAILURE);
    assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
}

#[tokio::test]
async fn activity_detail_found_and_missing() {
    let walk = activity("Walk", "physical");
    let id = walk.id;
    let h = harness(MemoryStore {
        activities: vec![walk],
        ..Default::default()
    });

    let res = send(&h.app, get(&format!("/api/activities/{}", id), None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["category"], "physical");

    let res = send(&h.app, get(&format!("/api/activities/{}", uuid::Uuid::new_v4()), None)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn journal_detail_requires_session() {
    let h = harness(MemoryStore::default());

    let res = send(&h.app, get(&format!("/api/journal/{}", uuid::Uuid::new_v4()), None)).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(res).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn journal_detail_statuses() {
    let identity = FakeIdentity::default();
    let session = identity.with_user("tok", None);
    let mine = journal_entry(session.user.id, "Mine");
    let theirs = journal_entry(uuid::Uuid::new_v4(), "Theirs");
    let (mine_id, theirs_id) = (mine.id, theirs.id);
    let h = harness_with(
        identity,
        MemoryStore {
            journal: vec![mine, theirs],
            ..Default::default()
        },
    );
    let cookie = session_cookie("tok");

    let res = send(&h.app, get(&format!("/api/journal/{}", mine_id), Some(&cookie))).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["title"], "Mine");

    let res = send(&h.app, get(&format!("/api/journal/{}", theirs_id), Some(&cookie))).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = send(&h.app, get(&format!("/api/journal/{}", uuid::Uuid::new_v4()), Some(&cookie))).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn journal_backend_error_is_generic() {
    let identity = FakeIdentity::default();
    identity.with_user("tok", None);
    let h = harness_with(
        identity,
        MemoryStore {
            fail: true,
            ..Default::default()
        },
    );

    let res = send(
        &h.app,
        get(&format!("/api/journal/{}", uuid::Uuid::new_v4()), Some(&session_cookie("tok"))),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(res).await["message"],
        "An error occurred while processing your request"
    );
}

#[tokio::test]
async fn health_reports_database_state() {
    let h = harness(MemoryStore::default());
    let res = send(&h.app, get("/health", None)).await;
    assert_eq!(res.status(), StatusCode::OK);

    let h = harness(MemoryStore {
        fail: true,
        ..Default::default()
    });
    let res = send(&h.app, get("/health", None)).await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(res).await["success"], false);
}
