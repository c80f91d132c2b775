use std::collections::HashMap;

use thiserror::Error;

use crate::validate::fields::{
    validate_city_code, validate_date, validate_latitude, validate_longitude,
    validate_positive_int, validate_radius, ValidationError,
};

pub type Params = HashMap<String, String>;

pub const FLIGHT_REQUIRED: &[&str] = &["origin", "destination", "departureDate"];
pub const HOTEL_REQUIRED: &[&str] = &["cityCode", "checkInDate", "checkOutDate"];
pub const ACTIVITY_REQUIRED: &[&str] = &["latitude", "longitude"];

/// Two-phase failure: missing required names are reported together first,
/// then per-field validation short-circuits on the first bad value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Missing required parameters")]
    Missing { required: &'static [&'static str] },
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

fn get<'a>(params: &'a Params, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or("")
}

fn require(params: &Params, required: &'static [&'static str]) -> Result<(), QueryError> {
    if required.iter().any(|name| get(params, name).is_empty()) {
        return Err(QueryError::Missing { required });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl TravelClass {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.to_ascii_uppercase().as_str() {
            "ECONOMY" => Ok(TravelClass::Economy),
            "PREMIUM_ECONOMY" => Ok(TravelClass::PremiumEconomy),
            "BUSINESS" => Ok(TravelClass::Business),
            "FIRST" => Ok(TravelClass::First),
            _ => Err(ValidationError::new(
                "travelClass",
                "travelClass must be one of ECONOMY, PREMIUM_ECONOMY, BUSINESS, FIRST",
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            TravelClass::Economy => "ECONOMY",
            TravelClass::PremiumEconomy => "PREMIUM_ECONOMY",
            TravelClass::Business => "BUSINESS",
            TravelClass::First => "FIRST",
        }
    }
}

/// Validated flight search parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: Option<String>,
    /// untyped pass-through, upstream enforces its own passenger limits
    pub adults: String,
    pub travel_class: TravelClass,
    pub airline: Option<String>,
}

impl FlightQuery {
    pub fn from_params(params: &Params) -> Result<Self, QueryError> {
        require(params, FLIGHT_REQUIRED)?;
        let origin = validate_city_code(get(params, "origin"), "origin")?;
        let destination = validate_city_code(get(params, "destination"), "destination")?;
        let departure_date = validate_date(get(params, "departureDate"), "departureDate")?;
        let return_date = match get(params, "returnDate") {
            "" => None,
            raw => Some(validate_date(raw, "returnDate")?),
        };
        let adults = match get(params, "adults") {
            "" => "1".to_owned(),
            raw => raw.to_owned(),
        };
        let travel_class = match get(params, "travelClass") {
            "" => TravelClass::default(),
            raw => TravelClass::parse(raw)?,
        };
        let airline = match get(params, "airline") {
            "" => None,
            raw => Some(raw.to_ascii_uppercase()),
        };
        Ok(Self {
            origin,
            destination,
            departure_date,
            return_date,
            adults,
            travel_class,
            airline,
        })
    }

    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("originLocationCode".to_owned(), self.origin.to_owned()),
            ("destinationLocationCode".to_owned(), self.destination.to_owned()),
            ("departureDate".to_owned(), self.departure_date.to_owned()),
            ("adults".to_owned(), self.adults.to_owned()),
            ("travelClass".to_owned(), self.travel_class.as_str().to_owned()),
            ("currencyCode".to_owned(), "USD".to_owned()),
            ("max".to_owned(), "50".to_owned()),
        ];
        if let Some(return_date) = &self.return_date {
            params.push(("returnDate".to_owned(), return_date.to_owned()));
        }
        if let Some(airline) = &self.airline {
            params.push(("includedAirlineCodes".to_owned(), airline.to_owned()));
        }
        params
    }
}

/// Validated hotel search parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelQuery {
    pub city_code: String,
    pub check_in: String,
    pub check_out: String,
    pub adults: u32,
    pub rooms: u32,
}

impl HotelQuery {
    pub fn from_params(params: &Params) -> Result<Self, QueryError> {
        require(params, HOTEL_REQUIRED)?;
        let city_code = validate_city_code(get(params, "cityCode"), "cityCode")?;
        let check_in = validate_date(get(params, "checkInDate"), "checkInDate")?;
        let check_out = validate_date(get(params, "checkOutDate"), "checkOutDate")?;
        let adults_raw = match get(params, "adults") {
            "" => "1",
            raw => raw,
        };
        let rooms_raw = match get(params, "roomQuantity") {
            "" => "1",
            raw => raw,
        };
        let adults = validate_positive_int(adults_raw, "adults", 1, 30)?;
        let rooms = validate_positive_int(rooms_raw, "roomQuantity", 1, 10)?;
        Ok(Self {
            city_code,
            check_in,
            check_out,
            adults,
            rooms,
        })
    }

    pub fn to_query_params(&self) -> Vec<(String, String)> {
        vec![
            ("cityCode".to_owned(), self.city_code.to_owned()),
            ("checkInDate".to_owned(), self.check_in.to_owned()),
            ("checkOutDate".to_owned(), self.check_out.to_owned()),
            ("adults".to_owned(), self.adults.to_string()),
            ("roomQuantity".to_owned(), self.rooms.to_string()),
        ]
    }
}

/// Validated activity search parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: u32,
}

impl ActivityQuery {
    pub fn from_params(params: &Params) -> Result<Self, QueryError> {
        require(params, ACTIVITY_REQUIRED)?;
        let latitude = validate_latitude(get(params, "latitude"))?;
        let longitude = validate_longitude(get(params, "longitude"))?;
        let radius = validate_radius(get(params, "radius"))?;
        Ok(Self {
            latitude,
            longitude,
            radius,
        })
    }

    pub fn to_query_params(&self) -> Vec<(String, String)> {
        vec![
            ("latitude".to_owned(), self.latitude.to_string()),
            ("longitude".to_owned(), self.longitude.to_string()),
            ("radius".to_owned(), self.radius.to_string()),
        ]
    }
}
