use crate::{
    completion::CompletionError, errors::error_chain_fmt, geocoding::GeocodingError,
    pipeline::PipelineError,
};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt::Formatter;

const GENERIC_FAILURE: &str = "Something went wrong while processing the request. Please try again.";

#[derive(thiserror::Error)]
pub enum ApiError {
    // Shown to the user as-is
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    NotFoundError(String),
    // An external service failed; `stage` names the step that was running
    #[error("{stage} failed: {message}")]
    ServiceError {
        stage: &'static str,
        message: String,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

#[derive(serde::Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    stage: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::NotFoundError(_) => StatusCode::NOT_FOUND,
            Self::ServiceError { .. } => StatusCode::BAD_GATEWAY,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::ValidationError(message) | Self::NotFoundError(message) => ErrorBody {
                error: message.as_str(),
                stage: None,
                detail: None,
            },
            Self::ServiceError { stage, message, .. } => ErrorBody {
                error: GENERIC_FAILURE,
                stage: Some(*stage),
                detail: Some(message.as_str()),
            },
            Self::UnexpectedError(_) => ErrorBody {
                error: GENERIC_FAILURE,
                stage: None,
                detail: None,
            },
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ApiError {
    fn from_completion(stage: &'static str, e: CompletionError) -> Self {
        match e {
            CompletionError::MissingCredential(_) => Self::ValidationError(e.to_string()),
            CompletionError::ServiceError { ref message, .. } => Self::ServiceError {
                stage,
                message: message.clone(),
                source: e.into(),
            },
            CompletionError::EmptyResult => Self::ServiceError {
                stage,
                message: e.to_string(),
                source: e.into(),
            },
            // Transport and decoding failures
            _ => Self::UnexpectedError(e.into()),
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        let stage = e.stage().as_str();
        match e {
            PipelineError::ValidationError(message) => Self::ValidationError(message),
            PipelineError::ClassificationError(source) | PipelineError::DraftingError(source) => {
                Self::from_completion(stage, source)
            }
        }
    }
}

impl From<CompletionError> for ApiError {
    fn from(e: CompletionError) -> Self {
        Self::from_completion("completion", e)
    }
}

impl From<GeocodingError> for ApiError {
    fn from(e: GeocodingError) -> Self {
        match e {
            GeocodingError::ValidationError(message) => Self::ValidationError(message),
            GeocodingError::NotFoundError(message) => Self::NotFoundError(message),
            GeocodingError::ServiceError { ref message, .. } => Self::ServiceError {
                stage: "geocoding",
                message: message.clone(),
                source: e.into(),
            },
            _ => Self::UnexpectedError(e.into()),
        }
    }
}
