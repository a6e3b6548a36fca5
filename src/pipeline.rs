//! Orchestration of one "generate" run: classify, optionally look up the
//! address of the marker, draft the letter.

use crate::{
    classifier,
    completion::{CompletionError, CompletionProvider},
    domain::{Coordinate, LocationState, ProblemReport, ProblemText},
    drafter,
    errors::error_chain_fmt,
    geocoding::{GeocodedPlace, GeocodingClient, GeocodingError},
};
use chrono::Utc;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Validation,
    Classification,
    Drafting,
}
impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Classification => "classification",
            Self::Drafting => "drafting",
        }
    }
}

#[derive(thiserror::Error)]
pub enum PipelineError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Failed to classify the report")]
    ClassificationError(#[source] CompletionError),
    #[error("Failed to draft the letter")]
    DraftingError(#[source] CompletionError),
}
impl PipelineError {
    pub fn stage(&self) -> PipelineStage {
        match self {
            Self::ValidationError(_) => PipelineStage::Validation,
            Self::ClassificationError(_) => PipelineStage::Classification,
            Self::DraftingError(_) => PipelineStage::Drafting,
        }
    }
}
impl std::fmt::Debug for PipelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Await `step` and hand back its value, or `fallback` if it failed.
///
/// The failure is logged and never reaches the caller.
pub async fn best_effort<T, E, F>(step: F, fallback: T, what: &str) -> T
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    match step.await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(step = what, error = %e, "Best-effort step failed, continuing");
            fallback
        }
    }
}

/// Owns the marker and the clients a report run needs.
///
/// Nothing serialises concurrent runs: each one reads the marker once,
/// right before drafting.
#[derive(Clone)]
pub struct SignalPipeline {
    provider: Arc<dyn CompletionProvider>,
    geocoder: GeocodingClient,
    location: LocationState,
    authority: String,
    enrich_with_address: bool,
}

impl SignalPipeline {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        geocoder: GeocodingClient,
        location: LocationState,
        authority: String,
        enrich_with_address: bool,
    ) -> Self {
        Self {
            provider,
            geocoder,
            location,
            authority,
            enrich_with_address,
        }
    }

    pub fn location(&self) -> &LocationState {
        &self.location
    }

    pub fn geocoder(&self) -> &GeocodingClient {
        &self.geocoder
    }

    pub fn provider(&self) -> &dyn CompletionProvider {
        self.provider.as_ref()
    }

    /// Turn a problem description into a classified, drafted report.
    #[tracing::instrument(
        name = "Generating a problem report",
        skip(self, problem_text),
        fields(report_id = tracing::field::Empty)
    )]
    pub async fn generate(&self, problem_text: &str) -> Result<ProblemReport, PipelineError> {
        // Idle -> guard. Nothing below this block runs without a valid
        // request and a credential.
        let problem = ProblemText::parse(problem_text)
            .map_err(|e| PipelineError::ValidationError(e.to_string()))?;
        if !self.provider.is_configured() {
            return Err(PipelineError::ValidationError(
                "The completion service API key is not configured.".to_string(),
            ));
        }

        let id = Uuid::new_v4();
        tracing::Span::current().record("report_id", tracing::field::display(id));

        let category = classifier::classify(self.provider.as_ref(), &problem)
            .await
            .map_err(PipelineError::ClassificationError)?;

        let coordinate = self.location.snapshot().await;
        let address_text = if self.enrich_with_address {
            let address = best_effort(
                self.geocoder.try_reverse_geocode(coordinate),
                String::new(),
                "reverse geocoding",
            )
            .await;
            Some(address).filter(|a| !a.trim().is_empty())
        } else {
            None
        };
        let location_description =
            drafter::describe_location(Some(coordinate), address_text.as_deref());

        let letter = drafter::draft(
            self.provider.as_ref(),
            &self.authority,
            &problem,
            category,
            &location_description,
        )
        .await
        .map_err(PipelineError::DraftingError)?;

        tracing::info!(category = %category, "Report generated");

        Ok(ProblemReport {
            id,
            problem_text: problem.as_str().to_string(),
            category,
            coordinate,
            address_text,
            location_description,
            drafted_letter: Some(letter),
            created_at: Utc::now(),
        })
    }

    /// Forward-geocode `query` and move the marker to the result.
    pub async fn relocate(&self, query: &str) -> Result<GeocodedPlace, GeocodingError> {
        let place = self.geocoder.forward_geocode(query).await?;
        self.location.set(place.coordinate).await;
        Ok(place)
    }

    pub async fn pin(&self, coordinate: Coordinate) {
        self.location.set(coordinate).await;
    }

    pub async fn reset_pin(&self) -> Coordinate {
        self.location.reset().await
    }
}
