use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::server::envelope;
use crate::server::server::AppState;
use crate::validate::{ActivityQuery, FlightQuery, HotelQuery};

pub const FLIGHT_OFFERS_PATH: &str = "/v2/shopping/flight-offers";
pub const HOTEL_OFFERS_PATH: &str = "/v3/shopping/hotel-offers";
pub const ACTIVITIES_PATH: &str = "/v1/shopping/activities";

pub async fn search_flights(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = match FlightQuery::from_params(&params) {
        Ok(query) => query,
        Err(err) => return envelope::query_error(err),
    };
    info!(
        "flights {} -> {} on {} (return: {:?})",
        query.origin, query.destination, query.departure_date, query.return_date
    );
    let outcome = state
        .gateway
        .call(FLIGHT_OFFERS_PATH, &query.to_query_params())
        .await;
    envelope::search_response(outcome, "No flights found")
}

pub async fn search_hotels(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = match HotelQuery::from_params(&params) {
        Ok(query) => query,
        Err(err) => return envelope::query_error(err),
    };
    info!(
        "hotels {} {} -> {}",
        query.city_code, query.check_in, query.check_out
    );
    let outcome = state
        .gateway
        .call(HOTEL_OFFERS_PATH, &query.to_query_params())
        .await;
    envelope::search_response(outcome, "No hotels found")
}

pub async fn search_activities(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = match ActivityQuery::from_params(&params) {
        Ok(query) => query,
        Err(err) => return envelope::query_error(err),
    };
    info!(
        "activities lat={}, lon={}, r={}km",
        query.latitude, query.longitude, query.radius
    );
    let outcome = state
        .gateway
        .call(ACTIVITIES_PATH, &query.to_query_params())
        .await;
    envelope::search_response(outcome, "No activities found")
}

/// Health check with token status and timestamp. Probing the token manager
/// means a cold start performs one refresh attempt here.
pub async fn health(State(state): State<AppState>) -> Response {
    let token = state.tokens.get_token().await;
    Json(json!({
        "status": "healthy",
        "amadeus_env": state.settings.env.as_str(),
        "amadeus_token": if token.is_some() { "valid" } else { "invalid" },
        "timestamp": Utc::now().to_rfc3339(),
    }))
    .into_response()
}

/// Static service-description endpoint.
pub async fn index(State(state): State<AppState>) -> Response {
    Json(json!({
        "name": "Trip Gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/search/flights": "Search flight offers",
            "/search/hotels": "Search hotel offers",
            "/search/activities": "Search activities",
            "/health": "Health check",
        },
        "amadeus_base_url": state.settings.base_url,
        "env": state.settings.env.as_str(),
    }))
    .into_response()
}
