use std::net::SocketAddr;
use std::time::Duration;

use configs::AppConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestApp {
    base_url: String,
    stop: oneshot::Sender<()>,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    cfg.database.url = "sqlite::memory:".into();
    cfg.database.max_connections = 1;
    cfg.database.min_connections = 1;
    cfg.server.stall_probability = 0.0;
    cfg.server.shutdown_timeout_secs = 2;

    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let (stop, stop_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(async move {
        server::startup::serve_until(listener, app, &cfg, async move {
            let _ = stop_rx.await;
        })
        .await
    });

    Ok(TestApp { base_url: format!("http://{}:{}", addr.ip(), addr.port()), stop, handle })
}

#[tokio::test]
async fn e2e_token_then_catalog_round_trip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/v1/token", app.base_url))
        .json(&json!({"username": "kong", "password": "onward"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let token = res.json::<Value>().await?["token"].as_str().unwrap_or_default().to_string();
    assert!(!token.is_empty());

    let res = client.get(format!("{}/v1/services", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/v1/services", app.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["items"].as_array().map(Vec::len), Some(12));

    let res = client
        .post(format!("{}/v1/services", app.base_url))
        .bearer_auth(&token)
        .json(&json!({"name": "Priority Services"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = res.json::<Value>().await?;
    assert_eq!(created["item"]["description"], "No description provided");

    let id = created["item"]["id"].as_str().unwrap_or_default();
    let res = client
        .delete(format!("{}/v1/services/{id}", app.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let _ = app.stop.send(());
    tokio::time::timeout(Duration::from_secs(5), app.handle).await???;
    Ok(())
}
