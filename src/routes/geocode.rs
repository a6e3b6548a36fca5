use crate::{domain::Coordinate, pipeline::SignalPipeline, routes::ApiError};
use actix_web::{HttpResponse, web};

#[derive(serde::Deserialize)]
pub struct ForwardGeocodeRequest {
    address: String,
}

#[derive(serde::Serialize)]
struct ForwardGeocodeResponse {
    latitude: f64,
    longitude: f64,
    text: String,
    display_name: Option<String>,
}

/// Resolve an address and move the marker there.
#[tracing::instrument(
    name = "Locating an address",
    skip(body, pipeline),
    fields(address = %body.address)
)]
pub async fn forward_geocode(
    body: web::Json<ForwardGeocodeRequest>,
    pipeline: web::Data<SignalPipeline>,
) -> Result<HttpResponse, ApiError> {
    let place = pipeline.relocate(&body.address).await?;

    Ok(HttpResponse::Ok().json(ForwardGeocodeResponse {
        latitude: place.coordinate.latitude(),
        longitude: place.coordinate.longitude(),
        text: place.coordinate.to_display_text(),
        // Fall back to what the user typed, as the map sidebar does
        display_name: place
            .display_name
            .or_else(|| Some(body.address.trim().to_string())),
    }))
}

#[derive(serde::Deserialize)]
pub struct ReverseGeocodeQuery {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(serde::Serialize)]
struct ReverseGeocodeResponse {
    display_name: Option<String>,
}

/// Display address for the given point, or for the marker when no point is
/// given. A failed lookup is reported as `null`, never as an error.
#[tracing::instrument(name = "Looking up a display address", skip(query, pipeline))]
pub async fn reverse_geocode(
    query: web::Query<ReverseGeocodeQuery>,
    pipeline: web::Data<SignalPipeline>,
) -> Result<HttpResponse, ApiError> {
    let coordinate = match (query.latitude, query.longitude) {
        (Some(latitude), Some(longitude)) => Coordinate::new(latitude, longitude)
            .map_err(|e| ApiError::ValidationError(e.to_string()))?,
        (None, None) => pipeline.location().snapshot().await,
        _ => {
            return Err(ApiError::ValidationError(
                "Provide both latitude and longitude, or neither.".to_string(),
            ));
        }
    };

    let display_name = pipeline.geocoder().reverse_geocode(coordinate).await;

    Ok(HttpResponse::Ok().json(ReverseGeocodeResponse {
        display_name: Some(display_name).filter(|name| !name.is_empty()),
    }))
}
