use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::warn;

use crate::auth::token_manager::TokenManager;
use crate::config::settings::Settings;
use crate::utils::constants::SEARCH_TIMEOUT_SECS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// no usable token, the upstream call was never attempted
    Unauthenticated,
    /// upstream answered 2xx but the body carried no `data` field
    NoData,
    /// transport error or non-2xx status
    Upstream,
}

/// Normalized result of one upstream search call
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamOutcome {
    Success { data: Value, meta: Value },
    Failure { kind: FailureKind, message: String },
}

/// Authenticated GET client for the travel API. Failure detail stays in the
/// server-side logs; clients only ever see the normalized outcome.
#[derive(Debug)]
pub struct UpstreamGateway {
    client: Client,
    base_url: String,
    tokens: Arc<TokenManager>,
}

impl UpstreamGateway {
    pub fn new(settings: &Settings, tokens: Arc<TokenManager>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(SEARCH_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            base_url: settings.base_url.to_owned(),
            tokens,
        }
    }

    /// One authenticated GET, no retries. A non-JSON 2xx body is the only
    /// path that escapes as `Err`.
    pub async fn call(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<UpstreamOutcome> {
        let Some(token) = self.tokens.get_token().await else {
            return Ok(UpstreamOutcome::Failure {
                kind: FailureKind::Unauthenticated,
                message: "no upstream token available".to_owned(),
            });
        };

        let url = format!("{}{}", self.base_url, endpoint);
        let response = match self
            .client
            .get(&url)
            .bearer_auth(&token)
            .query(params)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!("upstream request to {} failed: {}", endpoint, err);
                return Ok(UpstreamOutcome::Failure {
                    kind: FailureKind::Upstream,
                    message: err.to_string(),
                });
            }
        };
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("upstream {} returned {}: {}", endpoint, status, body);
            return Ok(UpstreamOutcome::Failure {
                kind: FailureKind::Upstream,
                message: format!("upstream status {status}"),
            });
        }

        let body: Value = response
            .json()
            .await
            .with_context(|| format!("decoding upstream body from {endpoint}"))?;
        match body.get("data") {
            Some(data) => {
                let meta = body.get("meta").cloned().unwrap_or_else(|| json!({}));
                Ok(UpstreamOutcome::Success {
                    data: data.to_owned(),
                    meta,
                })
            }
            None => Ok(UpstreamOutcome::Failure {
                kind: FailureKind::NoData,
                message: "upstream response carried no data field".to_owned(),
            }),
        }
    }
}
