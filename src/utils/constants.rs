//! Shared constants and invariants

/// Subtracted from `expires_in` so a token is refreshed before the upstream
/// actually invalidates it.
pub const EXPIRY_SAFETY_MARGIN_SECS: u64 = 300;
/// Floor for the computed lifetime, avoids immediate re-expiry on tiny TTLs.
pub const MIN_TOKEN_TTL_SECS: u64 = 60;
/// Applied when the token endpoint omits `expires_in`.
pub const DEFAULT_EXPIRES_IN_SECS: u64 = 1800;

pub const TOKEN_TIMEOUT_SECS: u64 = 15;
pub const SEARCH_TIMEOUT_SECS: u64 = 20;

pub const RESULT_SOURCE: &str = "Amadeus";
