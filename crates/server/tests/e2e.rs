use std::net::SocketAddr;

use configs::{AppConfig, DatabaseConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestApp {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = AppConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            ..DatabaseConfig::default()
        },
        ..AppConfig::default()
    };
    let app = server::startup::build_app(&cfg).await?;

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server::startup::serve(listener, app, async move {
        let _ = rx.await;
    }));

    Ok(TestApp { base_url, shutdown: Some(tx), handle })
}

#[tokio::test]
async fn e2e_create_get_delete_over_http() -> anyhow::Result<()> {
    let mut app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/ads", app.base_url))
        .json(&json!({"title": "Bike", "description": "Used bike", "owner": "alice"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert!(res.headers()["content-type"].to_str()?.starts_with("application/json"));
    let body = res.json::<serde_json::Value>().await?;
    let id = body["id"].as_i64().expect("id");

    let res = c.get(format!("{}/ads/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let ad = res.json::<serde_json::Value>().await?;
    assert_eq!(ad["owner"], "alice");

    let res = c.delete(format!("{}/ads/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/ads/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    if let Some(tx) = app.shutdown.take() {
        let _ = tx.send(());
    }
    app.handle.await??;
    Ok(())
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}
