use crate::{
    configuration::GeocodingSettings,
    domain::{AddressQuery, Coordinate},
    errors::extract_service_message,
    geocoding::{
        GeocodingError,
        types::{NominatimPlace, NominatimReverse},
    },
};
use reqwest::{Client, Response, Url, header::ACCEPT};

/// Best forward-geocoding hit for a query.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeocodedPlace {
    pub coordinate: Coordinate,
    pub display_name: Option<String>,
}

/// Thin client over a Nominatim-compatible service.
///
/// Every call is a fresh request: no retries, no caching.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: Client,
    base_url: String,
    region_qualifier: String,
}

impl GeocodingClient {
    pub fn new(
        settings: &GeocodingSettings,
        region_qualifier: String,
    ) -> Result<Self, anyhow::Error> {
        // Nominatim's usage policy requires an identifying User-Agent
        let http = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            region_qualifier,
        })
    }

    /// Resolve a free-text address inside the municipality to a coordinate.
    ///
    /// Blank input is rejected before any request is sent. Only the first
    /// result is considered.
    #[tracing::instrument(name = "Forward geocoding an address", skip(self))]
    pub async fn forward_geocode(&self, query: &str) -> Result<GeocodedPlace, GeocodingError> {
        let query = AddressQuery::parse(query)
            .map_err(|e| GeocodingError::ValidationError(e.to_string()))?;

        let qualified = format!("{}, {}", self.region_qualifier, query.as_str());
        let url = self.endpoint(
            "search",
            &[
                ("q", qualified.as_str()),
                ("format", "json"),
                ("limit", "1"),
            ],
        )?;

        let response = self.http.get(url).header(ACCEPT, "application/json").send().await?;
        let response = ensure_success(response).await?;

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| GeocodingError::InvalidResponse(e.to_string()))?;

        let place = places.into_iter().next().ok_or_else(|| {
            GeocodingError::NotFoundError(
                "Location not found. Move the marker manually.".to_string(),
            )
        })?;

        let coordinate = parse_place_coordinate(&place)?;
        tracing::info!(coordinate = %coordinate, "Address resolved");

        Ok(GeocodedPlace {
            coordinate,
            display_name: place.display_name.filter(|name| !name.trim().is_empty()),
        })
    }

    /// Street-level display address for a coordinate, or an empty string when
    /// the lookup fails for any reason.
    pub async fn reverse_geocode(&self, coordinate: Coordinate) -> String {
        match self.try_reverse_geocode(coordinate).await {
            Ok(display_name) => display_name,
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Reverse geocoding failed");
                String::new()
            }
        }
    }

    #[tracing::instrument(name = "Reverse geocoding a coordinate", skip(self))]
    pub async fn try_reverse_geocode(
        &self,
        coordinate: Coordinate,
    ) -> Result<String, GeocodingError> {
        let lat = coordinate.latitude().to_string();
        let lon = coordinate.longitude().to_string();
        let url = self.endpoint(
            "reverse",
            &[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("format", "json"),
                ("zoom", "18"),
                ("addressdetails", "1"),
            ],
        )?;

        let response = self.http.get(url).header(ACCEPT, "application/json").send().await?;
        let response = ensure_success(response).await?;

        let reverse: NominatimReverse = response
            .json()
            .await
            .map_err(|e| GeocodingError::InvalidResponse(e.to_string()))?;

        match reverse.display_name.filter(|name| !name.trim().is_empty()) {
            Some(display_name) => Ok(display_name),
            None => Err(GeocodingError::NotFoundError(
                reverse
                    .error
                    .unwrap_or_else(|| "Address not found.".to_string()),
            )),
        }
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, GeocodingError> {
        Url::parse_with_params(&format!("{}/{}", self.base_url, path), params)
            .map_err(|e| GeocodingError::InvalidResponse(format!("Invalid service URL: {}", e)))
    }
}

async fn ensure_success(response: Response) -> Result<Response, GeocodingError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(GeocodingError::ServiceError {
        status: status.as_u16(),
        message: extract_service_message(&body)
            .unwrap_or_else(|| "Geocoding request failed.".to_string()),
    })
}

fn parse_place_coordinate(place: &NominatimPlace) -> Result<Coordinate, GeocodingError> {
    let latitude = place
        .lat
        .trim()
        .parse::<f64>()
        .map_err(|_| GeocodingError::InvalidResponse(format!("latitude '{}'", place.lat)))?;
    let longitude = place
        .lon
        .trim()
        .parse::<f64>()
        .map_err(|_| GeocodingError::InvalidResponse(format!("longitude '{}'", place.lon)))?;

    Coordinate::new(latitude, longitude).map_err(|e| GeocodingError::InvalidResponse(e.to_string()))
}
