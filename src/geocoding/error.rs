use crate::errors::error_chain_fmt;
use std::fmt::Formatter;

#[derive(thiserror::Error)]
pub enum GeocodingError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    NotFoundError(String),
    #[error("Geocoding service responded with {status}: {message}")]
    ServiceError { status: u16, message: String },
    #[error("Failed to reach the geocoding service")]
    Transport(#[from] reqwest::Error),
    #[error("Geocoding service returned an unusable payload: {0}")]
    InvalidResponse(String),
}
impl std::fmt::Debug for GeocodingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
