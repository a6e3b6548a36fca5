use crate::domain::{Category, Coordinate};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Outcome of one "generate" run. Never stored; returned to the caller and
/// dropped.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProblemReport {
    pub id: Uuid,
    pub problem_text: String,
    pub category: Category,
    pub coordinate: Coordinate,
    pub address_text: Option<String>,
    pub location_description: String,
    pub drafted_letter: Option<String>,
    pub created_at: DateTime<Utc>,
}
