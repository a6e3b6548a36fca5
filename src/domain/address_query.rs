use std::fmt::Display;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Free-text address or neighbourhood the user wants to find on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressQuery(String);

#[derive(Debug, Error)]
pub enum AddressQueryError {
    #[error("Please enter an address or neighbourhood.")]
    Empty,

    #[error("Address is too long (max 200 characters, got {0}).")]
    TooLong(usize),
}

impl AddressQuery {
    const MAX_LENGTH: usize = 200;

    /// Parse an address string into a validated query
    ///
    /// Rules:
    /// - Cannot be empty or only whitespaces
    /// - At most 200 graphemes
    /// - Automatically trims whitespace
    ///
    /// The region qualifier is added by the geocoding client, not here.
    pub fn parse(s: impl AsRef<str>) -> Result<AddressQuery, AddressQueryError> {
        let trimmed = s.as_ref().trim();

        if trimmed.is_empty() {
            return Err(AddressQueryError::Empty);
        }

        let char_count = trimmed.graphemes(true).count();
        if char_count > Self::MAX_LENGTH {
            return Err(AddressQueryError::TooLong(char_count));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AddressQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for AddressQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
