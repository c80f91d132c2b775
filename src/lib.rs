//! # Trip Gateway Library
//!
//! Backend proxy for the Amadeus travel API: validates incoming search
//! parameters, maintains a cached OAuth2 access token, and forwards
//! authenticated search calls upstream.
//!
//! Modules:
//! - `config` — environment-sourced service settings
//! - `auth` — credential cache and token refresh
//! - `validate` — per-field validators and validated query types
//! - `upstream` — authenticated gateway to the Amadeus API
//! - `server` — axum routes and response envelopes

pub mod auth;
pub mod config;
pub mod helpers;
pub mod server;
pub mod tests;
pub mod upstream;
pub mod utils;
pub mod validate;

pub use crate::config::settings::Settings;
