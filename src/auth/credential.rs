use crate::helpers::time::now_i64;
use crate::utils::constants::{EXPIRY_SAFETY_MARGIN_SECS, MIN_TOKEN_TTL_SECS};

/// Cached upstream access token with computed expiration
#[derive(Debug, Clone)]
pub struct Credential {
    pub token: String,
    pub expires_at: i64, // UNIX timestamp
}

impl Credential {
    pub fn new(token: String, expires_at: i64) -> Self {
        Self { token, expires_at }
    }

    pub fn from_expires_in(token: String, expires_in: u64) -> Self {
        Self::new(token, expiry_from_now(expires_in))
    }

    /// Usable only while the current time is strictly before expiry.
    pub fn is_valid(&self) -> bool {
        now_i64() < self.expires_at
    }
}

/// `now + max(expires_in - margin, floor)`
pub fn expiry_from_now(expires_in: u64) -> i64 {
    let ttl = expires_in
        .saturating_sub(EXPIRY_SAFETY_MARGIN_SECS)
        .max(MIN_TOKEN_TTL_SECS);
    now_i64() + ttl as i64
}
