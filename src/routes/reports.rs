use crate::{pipeline::SignalPipeline, routes::ApiError};
use actix_web::{HttpResponse, web};

#[derive(serde::Deserialize)]
pub struct GenerateRequest {
    // Validated by the pipeline so blank input gets the pipeline's message
    #[serde(default)]
    problem: String,
}

#[tracing::instrument(name = "Generating a municipal signal", skip(body, pipeline))]
pub async fn generate(
    body: web::Json<GenerateRequest>,
    pipeline: web::Data<SignalPipeline>,
) -> Result<HttpResponse, ApiError> {
    let report = pipeline.generate(&body.problem).await.map_err(|e| {
        tracing::error!(error.cause_chain = ?e, stage = e.stage().as_str(), "Report generation failed");
        ApiError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(report))
}
