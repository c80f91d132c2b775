use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::auth::credential::Credential;
use crate::config::settings::Settings;
use crate::utils::constants::{DEFAULT_EXPIRES_IN_SECS, TOKEN_TIMEOUT_SECS};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<u64>,
}

/// Owns the single process-wide credential. Shared by reference across
/// request handlers; refresh runs under the write guard so concurrent
/// cold-start requests trigger one upstream call, not several.
#[derive(Debug)]
pub struct TokenManager {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    cached: RwLock<Option<Credential>>,
}

impl TokenManager {
    pub fn new(settings: &Settings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(TOKEN_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            token_url: settings.token_url(),
            client_id: settings.client_id.to_owned(),
            client_secret: settings.client_secret.to_owned(),
            cached: RwLock::new(None),
        }
    }

    /// Serve the cached token while valid; otherwise make exactly one refresh
    /// attempt. A missing token is a normal, handleable outcome for callers.
    pub async fn get_token(&self) -> Option<String> {
        if let Some(token) = self.cached_token().await {
            return Some(token);
        }

        let mut guard = self.cached.write().await;
        // another handler may have refreshed while we waited for the lock
        if let Some(credential) = guard.as_ref().filter(|c| c.is_valid()) {
            return Some(credential.token.to_owned());
        }
        match self.refresh().await {
            Ok(credential) => {
                info!(expires_at = credential.expires_at, "new upstream token obtained");
                let token = credential.token.to_owned();
                *guard = Some(credential);
                Some(token)
            }
            Err(err) => {
                warn!("error obtaining upstream token: {:#}", err);
                None
            }
        }
    }

    async fn cached_token(&self) -> Option<String> {
        self.cached
            .read()
            .await
            .as_ref()
            .filter(|c| c.is_valid())
            .map(|c| c.token.to_owned())
    }

    async fn refresh(&self) -> Result<Credential> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];
        let response = self.client.post(&self.token_url).form(&form).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("token request failed: {} {}", status, body));
        }
        let parsed: TokenResponse = response.json().await?;
        let expires_in = parsed.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS);
        Ok(Credential::from_expires_in(parsed.access_token, expires_in))
    }

    /// Replace the cached credential directly (tests seed expired tokens).
    pub async fn set_cached(&self, credential: Credential) {
        *self.cached.write().await = Some(credential);
    }

    pub async fn cached_expires_at(&self) -> Option<i64> {
        self.cached.read().await.as_ref().map(|c| c.expires_at)
    }
}
