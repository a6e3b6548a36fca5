//! Wire types for the Nominatim `search` and `reverse` endpoints.

use serde::Deserialize;

/// One `search` hit. Nominatim sends coordinates as strings.
#[derive(Debug, Deserialize)]
pub(crate) struct NominatimPlace {
    pub(crate) lat: String,
    pub(crate) lon: String,
    pub(crate) display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NominatimReverse {
    pub(crate) display_name: Option<String>,
    // Set instead of a place when nothing is found, e.g. "Unable to geocode"
    pub(crate) error: Option<String>,
}
