// tests/common/mod.rs
pub use axum::Router;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;

use reqwest::Client;

use crate::config::settings::{ApiEnv, ServerConfig, Settings};

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

/// Settings pointing at a mock upstream.
pub fn test_settings(base_url: &str) -> Settings {
    Settings {
        client_id: "test-client".to_owned(),
        client_secret: "test-secret".to_owned(),
        env: ApiEnv::Test,
        base_url: base_url.trim_end_matches('/').to_owned(),
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: "0".to_owned(),
        },
    }
}
