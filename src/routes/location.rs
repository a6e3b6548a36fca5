use crate::{domain::Coordinate, pipeline::SignalPipeline};
use actix_web::{HttpResponse, web};

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct LocationResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub text: String,
}
impl From<Coordinate> for LocationResponse {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            latitude: coordinate.latitude(),
            longitude: coordinate.longitude(),
            text: coordinate.to_display_text(),
        }
    }
}

pub async fn get_location(pipeline: web::Data<SignalPipeline>) -> HttpResponse {
    let coordinate = pipeline.location().snapshot().await;
    HttpResponse::Ok().json(LocationResponse::from(coordinate))
}

// Out-of-range coordinates are rejected by the `Coordinate` deserializer
// with a 400 before this runs.
#[tracing::instrument(name = "Moving the marker", skip(pipeline))]
pub async fn set_location(
    body: web::Json<Coordinate>,
    pipeline: web::Data<SignalPipeline>,
) -> HttpResponse {
    let coordinate = body.into_inner();
    pipeline.pin(coordinate).await;
    HttpResponse::Ok().json(LocationResponse::from(coordinate))
}

#[tracing::instrument(name = "Resetting the marker to the default location", skip(pipeline))]
pub async fn reset_location(pipeline: web::Data<SignalPipeline>) -> HttpResponse {
    let coordinate = pipeline.reset_pin().await;
    HttpResponse::Ok().json(LocationResponse::from(coordinate))
}
