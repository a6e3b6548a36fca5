//! Nominatim-compatible geocoding.

mod client;
mod error;
mod types;

pub use client::{GeocodedPlace, GeocodingClient};
pub use error::GeocodingError;
