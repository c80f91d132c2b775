//! Request validation
//!
//! Pure per-field validators and the validated query types built from them.
//! A query type can only be obtained through `from_params`, so anything
//! holding one has already passed validation.

pub mod fields;
pub mod query;

pub use fields::{
    validate_city_code, validate_date, validate_latitude, validate_longitude,
    validate_positive_int, validate_radius, ValidationError,
};
pub use query::{ActivityQuery, FlightQuery, HotelQuery, QueryError, TravelClass};
