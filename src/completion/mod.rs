//! Chat-completion providers.
//!
//! The pipeline only sees [`CompletionProvider`]; which service answers is a
//! configuration choice.

mod chat_completions;
mod error;

pub use chat_completions::ChatCompletionsClient;
pub use error::CompletionError;

use crate::configuration::CompletionSettings;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}
impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &str;

    /// `false` when no usable credential is configured. Callers must not
    /// invoke [`CompletionProvider::complete`] in that case.
    fn is_configured(&self) -> bool;

    /// One completion for `messages`, trimmed.
    ///
    /// Missing or blank content is reported as [`CompletionError::EmptyResult`].
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError>;
}

pub fn build_provider(
    settings: &CompletionSettings,
) -> Result<Arc<dyn CompletionProvider>, anyhow::Error> {
    let client = ChatCompletionsClient::new(settings)?;
    tracing::info!(
        provider = settings.provider.as_str(),
        model = settings.model(),
        configured = settings.has_usable_api_key(),
        "Completion provider ready"
    );
    Ok(Arc::new(client))
}
