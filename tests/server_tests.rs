// Integration tests for server lifecycle over a real socket

mod common;

use anyhow::Result;
use common::StubProvider;
use std::sync::Arc;
use yt_transcript::{AppState, Config, ServerConfig, TranscriptServer};

fn local_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

#[test]
fn test_default_server_config() {
    let config = ServerConfig::default();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3001);
    assert_eq!(config.address(), "0.0.0.0:3001");

    // Server defaults come from the config file defaults
    assert_eq!(config, Config::default().server_config());
}

#[tokio::test]
async fn test_start_serve_stop() -> Result<()> {
    let provider = Arc::new(StubProvider::with_texts(&["a", "b", "c"]));
    let server = TranscriptServer::bind(&local_config(), AppState::new(provider)).await?;
    let addr = server.local_addr();
    assert_ne!(addr.port(), 0);

    let handle = server.start();
    assert_eq!(handle.local_addr(), addr);

    let response = reqwest::get(format!("http://{}/transcript/dQw4w9WgXcQ", addr)).await?;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["transcript"], "a b c");

    handle.stop().await?;

    let after_stop = reqwest::Client::new()
        .get(format!("http://{}/health", addr))
        .send()
        .await;
    assert!(after_stop.is_err(), "Server should not accept requests after stop");

    Ok(())
}

#[tokio::test]
async fn test_error_over_socket() -> Result<()> {
    let provider = Arc::new(StubProvider::failing("Video unavailable"));
    let handle = TranscriptServer::bind(&local_config(), AppState::new(provider))
        .await?
        .start();

    let url = format!("http://{}/transcript/invalid-id", handle.local_addr());
    let response = reqwest::get(url).await?;
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Video unavailable");

    handle.stop().await
}

#[tokio::test]
async fn test_bind_conflict_fails() -> Result<()> {
    let provider = Arc::new(StubProvider::with_texts(&[]));
    let first = TranscriptServer::bind(&local_config(), AppState::new(provider.clone())).await?;

    let taken = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: first.local_addr().port(),
    };
    let second = TranscriptServer::bind(&taken, AppState::new(provider)).await;

    assert!(second.is_err(), "Binding an in-use port should fail");
    Ok(())
}
