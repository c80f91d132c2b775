use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::utils::logging::LogLevel;

pub const PROD_BASE_URL: &str = "https://api.amadeus.com";
pub const TEST_BASE_URL: &str = "https://test.api.amadeus.com";

/// ================================
/// Command line / environment args
/// ================================
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, env = "AMADEUS_CLIENT_ID")]
    pub client_id: String,
    #[arg(long, env = "AMADEUS_CLIENT_SECRET")]
    pub client_secret: String,
    #[arg(long, env = "AMADEUS_ENV", value_enum, default_value_t = ApiEnv::Prod)]
    pub amadeus_env: ApiEnv,
    /// Overrides the base URL derived from the environment selector
    #[arg(long, env = "AMADEUS_BASE_URL")]
    pub base_url: Option<String>,
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    pub log_level: Option<LogLevel>,
}

/// Upstream environment selector ("prod" or "test")
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnv {
    Prod,
    Test,
}

impl ApiEnv {
    pub fn as_str(&self) -> &'static str {
        match *self {
            ApiEnv::Prod => "prod",
            ApiEnv::Test => "test",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match *self {
            ApiEnv::Prod => PROD_BASE_URL,
            ApiEnv::Test => TEST_BASE_URL,
        }
    }
}

/// ================================
/// Resolved service settings
/// ================================
#[derive(Debug, Clone)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    pub env: ApiEnv,
    pub base_url: String,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: String,
}

impl Settings {
    /// Resolve args into settings; an explicit base URL override wins over
    /// the environment selector.
    pub fn resolve(args: &Args) -> Self {
        let base_url = args
            .base_url
            .to_owned()
            .unwrap_or_else(|| args.amadeus_env.default_base_url().to_owned());
        Self {
            client_id: args.client_id.to_owned(),
            client_secret: args.client_secret.to_owned(),
            env: args.amadeus_env,
            base_url: base_url.trim_end_matches('/').to_owned(),
            server: ServerConfig {
                host: args.host.to_owned(),
                port: args.port.to_owned(),
            },
        }
    }

    pub fn token_url(&self) -> String {
        format!("{}/v1/security/oauth2/token", self.base_url)
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "compact".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}
