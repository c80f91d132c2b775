//! Uniform `{success, ...}` JSON envelopes returned to clients.
//!
//! Upstream failure detail never leaves the server: token failures, upstream
//! errors and genuinely empty results all share the 404 "no results" shape,
//! and the 500 body carries a generic message only.

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde_json::json;
use tracing::{error, info};

use crate::upstream::UpstreamOutcome;
use crate::utils::constants::RESULT_SOURCE;
use crate::validate::QueryError;

pub fn search_response(
    outcome: anyhow::Result<UpstreamOutcome>,
    empty_message: &str,
) -> Response {
    match outcome {
        Ok(UpstreamOutcome::Success { data, meta }) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": data,
                "meta": meta,
                "source": RESULT_SOURCE,
            })),
        )
            .into_response(),
        Ok(UpstreamOutcome::Failure { kind, message }) => {
            info!(kind = ?kind, "search returned no results: {}", message);
            not_found(empty_message)
        }
        Err(err) => internal_error(err),
    }
}

pub fn query_error(err: QueryError) -> Response {
    match err {
        QueryError::Missing { required } => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "error": "Missing required parameters",
                "required": required,
            })),
        )
            .into_response(),
        QueryError::Invalid(invalid) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "error": "Invalid parameter",
                "message": invalid.message,
            })),
        )
            .into_response(),
    }
}

fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"success": false, "error": message})),
    )
        .into_response()
}

fn internal_error(err: anyhow::Error) -> Response {
    error!("unexpected failure handling search: {:#}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"success": false, "error": "Internal server error"})),
    )
        .into_response()
}
