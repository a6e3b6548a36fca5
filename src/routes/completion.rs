//! Server-side completion proxy: the browser sends a prompt, the API key
//! never leaves the backend.

use crate::{
    completion::{ChatMessage, CompletionError},
    pipeline::SignalPipeline,
    routes::ApiError,
};
use actix_web::{HttpResponse, web};

/// Returned as `output` when the model answers with no content.
pub const EMPTY_OUTPUT_PLACEHOLDER: &str = "Не беше генериран отговор. Моля, опитайте отново.";

#[derive(serde::Deserialize)]
pub struct CompletionRequest {
    #[serde(default)]
    input: String,
}

#[derive(serde::Serialize)]
struct CompletionResponse {
    output: String,
}

#[tracing::instrument(name = "Proxying a completion request", skip(body, pipeline))]
pub async fn complete(
    body: web::Json<CompletionRequest>,
    pipeline: web::Data<SignalPipeline>,
) -> Result<HttpResponse, ApiError> {
    let input = body.input.trim();
    if input.is_empty() {
        return Err(ApiError::ValidationError("Input cannot be empty.".to_string()));
    }

    let provider = pipeline.provider();
    if !provider.is_configured() {
        return Err(ApiError::ValidationError(
            "The completion service API key is not configured.".to_string(),
        ));
    }

    let output = match provider.complete(&[ChatMessage::user(input)]).await {
        Ok(output) => output,
        Err(CompletionError::EmptyResult) => {
            tracing::warn!("Completion returned no content, using placeholder");
            EMPTY_OUTPUT_PLACEHOLDER.to_string()
        }
        Err(e) => return Err(e.into()),
    };

    Ok(HttpResponse::Ok().json(CompletionResponse { output }))
}
