use std::sync::Arc;

use anyhow::Result;
use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::auth::token_manager::TokenManager;
use crate::config::settings::Settings;
use crate::server::routes;
use crate::upstream::UpstreamGateway;

/// Shared per-request context: resolved settings plus the token manager and
/// gateway, constructed once and cloned by reference into every handler.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub tokens: Arc<TokenManager>,
    pub gateway: Arc<UpstreamGateway>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let tokens = Arc::new(TokenManager::new(&settings));
        let gateway = Arc::new(UpstreamGateway::new(&settings, tokens.clone()));
        Self {
            settings: Arc::new(settings),
            tokens,
            gateway,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/search/flights", get(routes::search_flights))
        .route("/search/hotels", get(routes::search_hotels))
        .route("/search/activities", get(routes::search_activities))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn start(state: AppState) -> Result<()> {
    let bind_addr = state.settings.server.host.to_owned();
    let port = state.settings.server.port.to_owned();
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind_addr, port)).await?;
    info!("listening on {}:{}", bind_addr, port);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
