mod common;

use anyhow::{Context, Result};
use common::*;
use reqwest::{redirect::Policy, StatusCode};

async fn spawn(h: &Harness) -> Result<String> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    let app = h.app.clone();
    tokio::spawn(async move { axum::serve(listener, app).await });
    Ok(format!("http://127.0.0.1:{}", port))
}

fn client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().redirect(Policy::none()).build()?)
}

#[tokio::test]
async fn live_server_gates_over_http() -> Result<()> {
    let h = harness(MemoryStore::default());
    h.identity.with_user("tok", None);
    let base = spawn(&h).await?;
    let client = client()?;

    let res = client.get(format!("{}/dashboard", base)).send().await?;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()["location"], "/login");

    let res = client
        .get(format!("{}/login", base))
        .header("cookie", session_cookie("tok"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()["location"], "/dashboard");

    Ok(())
}

#[tokio::test]
async fn live_server_health_is_json() -> Result<()> {
    let h = harness(MemoryStore::default());
    let base = spawn(&h).await?;

    let res = client()?.get(format!("{}/health", base)).send().await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["database"], "ok");
    Ok(())
}
