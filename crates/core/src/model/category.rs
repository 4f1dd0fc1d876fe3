use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category key is empty")]
    Empty,

    #[error("category key contains an invalid character: {found:?}")]
    InvalidCharacter { found: char },
}

/// Validated category key: the path segment that selects a question set
/// on the server, e.g. `python` in `/quiz/python/get_question`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Create a validated category key.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::Empty` if the key is empty after trimming.
    /// Returns `CategoryError::InvalidCharacter` for separators or whitespace,
    /// which would change the meaning of the request path.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CategoryError::Empty);
        }
        if let Some(found) = trimmed
            .chars()
            .find(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace())
        {
            return Err(CategoryError::InvalidCharacter { found });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display title for the quiz header: `python` renders as `Python`.
    #[must_use]
    pub fn title(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Debug for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryKey({})", self.0)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryKey {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
