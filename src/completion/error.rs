use crate::errors::error_chain_fmt;
use std::fmt::Formatter;

#[derive(thiserror::Error)]
pub enum CompletionError {
    #[error("No API key configured for {0}.")]
    MissingCredential(String),
    #[error("{provider} responded with {status}: {message}")]
    ServiceError {
        provider: String,
        status: u16,
        message: String,
    },
    #[error("Failed to reach the completion service")]
    Transport(#[from] reqwest::Error),
    #[error("Completion service returned an unusable payload: {0}")]
    InvalidResponse(String),
    #[error("Completion service returned no content")]
    EmptyResult,
}
impl std::fmt::Debug for CompletionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
