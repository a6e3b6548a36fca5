use std::fmt::Display;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Free-text description of the problem, as typed by the citizen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemText(String);

#[derive(Debug, Error)]
pub enum ProblemTextError {
    #[error("Please describe the problem.")]
    Empty,

    #[error("Problem description is too long (max 2000 characters, got {0}).")]
    TooLong(usize),
}

impl ProblemText {
    const MAX_LENGTH: usize = 2000;

    /// Rules:
    /// - Cannot be empty or only whitespaces
    /// - At most 2000 graphemes after trimming
    ///
    /// The text is otherwise kept verbatim.
    pub fn parse(s: impl AsRef<str>) -> Result<ProblemText, ProblemTextError> {
        let trimmed = s.as_ref().trim();

        if trimmed.is_empty() {
            return Err(ProblemTextError::Empty);
        }

        let char_count = trimmed.graphemes(true).count();
        if char_count > Self::MAX_LENGTH {
            return Err(ProblemTextError::TooLong(char_count));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProblemText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ProblemText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
