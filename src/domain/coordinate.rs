use std::fmt::Display;
use thiserror::Error;

/// A WGS84 point on the map, the position of the report marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Error)]
pub enum CoordinateError {
    #[error("Invalid coordinate format. Expected 'latitude,longitude' (e.g., '43.8356,25.9657')")]
    InvalidFormat,

    #[error("Coordinates must be finite numbers.")]
    NotFinite,

    #[error("Invalid latitude: {0}. Must be between -90 and 90")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0}. Must be between -180 and 180")]
    InvalidLongitude(f64),
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NotFinite);
        }

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::InvalidLatitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::InvalidLongitude(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse from "latitude,longitude" string format
    ///
    /// Whitespace around either component is ignored, so the output of
    /// `to_display_text` parses back.
    pub fn parse(s: &str) -> Result<Self, CoordinateError> {
        let parts: Vec<&str> = s.split(',').collect();

        if parts.len() != 2 {
            return Err(CoordinateError::InvalidFormat);
        }

        let latitude = parts[0]
            .trim()
            .parse::<f64>()
            .map_err(|_| CoordinateError::InvalidFormat)?;

        let longitude = parts[1]
            .trim()
            .parse::<f64>()
            .map_err(|_| CoordinateError::InvalidFormat)?;

        Self::new(latitude, longitude)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Five decimals, comma-space separated: "43.83560, 25.96570".
    pub fn to_display_text(&self) -> String {
        format!("{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_display_text())
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct CoordinateRepr {
    latitude: f64,
    longitude: f64,
}

// Serialize for JSON API responses
impl serde::Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        CoordinateRepr {
            latitude: self.latitude,
            longitude: self.longitude,
        }
        .serialize(serializer)
    }
}

// Deserialize from JSON API requests, rejecting out-of-range values
impl<'de> serde::Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = CoordinateRepr::deserialize(deserializer)?;
        Coordinate::new(repr.latitude, repr.longitude).map_err(serde::de::Error::custom)
    }
}
