//! Client for OpenAI-style `/chat/completions` endpoints.
//!
//! OpenAI and Groq share the wire format; only the base URL and the default
//! model differ, both resolved from [`CompletionSettings`].

use crate::{
    completion::{ChatMessage, CompletionError, CompletionProvider},
    configuration::{CompletionProviderKind, CompletionSettings},
    errors::extract_service_message,
};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

#[derive(serde::Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(serde::Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(serde::Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(serde::Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionResponse {
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
    }
}

pub struct ChatCompletionsClient {
    http: Client,
    kind: CompletionProviderKind,
    endpoint: String,
    api_key: SecretString,
    model: String,
    temperature: f32,
    configured: bool,
}

impl ChatCompletionsClient {
    pub fn new(settings: &CompletionSettings) -> Result<Self, anyhow::Error> {
        Ok(Self {
            http: Client::builder().build()?,
            kind: settings.provider,
            endpoint: format!(
                "{}/chat/completions",
                settings.base_url().trim_end_matches('/')
            ),
            api_key: settings.api_key.clone(),
            model: settings.model().to_string(),
            temperature: settings.temperature,
            configured: settings.has_usable_api_key(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl CompletionProvider for ChatCompletionsClient {
    fn name(&self) -> &str {
        self.kind.as_str()
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    #[tracing::instrument(
        name = "Requesting a chat completion",
        skip(self, messages),
        fields(provider = self.kind.as_str(), model = %self.model, messages = messages.len())
    )]
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        if !self.configured {
            return Err(CompletionError::MissingCredential(
                self.kind.as_str().to_string(),
            ));
        }

        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "Completion request failed");
            return Err(CompletionError::ServiceError {
                provider: self.kind.as_str().to_string(),
                status: status.as_u16(),
                message: extract_service_message(&body)
                    .unwrap_or_else(|| format!("{} API error", self.kind.as_str())),
            });
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        match body.into_text() {
            Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            _ => Err(CompletionError::EmptyResult),
        }
    }
}
