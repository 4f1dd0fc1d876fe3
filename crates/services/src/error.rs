//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuestionError, SummaryError};

/// Transport-level failures from a quiz backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackendError {
    #[error("quiz server returned status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("quiz server unreachable: {0}")]
    Unreachable(String),

    #[error("no active question to answer")]
    NoActiveQuestion,
}

impl BackendError {
    /// Whether a single bounded retry is worth attempting.
    ///
    /// Connect/timeout failures and gateway statuses qualify; anything the
    /// server answered deliberately (4xx, handler errors) does not.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            BackendError::Http(err) => err.is_timeout() || err.is_connect(),
            BackendError::HttpStatus(status) => matches!(status.as_u16(), 502 | 503 | 504),
            BackendError::Unreachable(_) => true,
            BackendError::NoActiveQuestion => false,
        }
    }
}

/// Errors emitted by `QuizFlowService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizFlowError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("malformed question payload: {0}")]
    Question(#[from] QuestionError),

    #[error("malformed summary payload: {0}")]
    Summary(#[from] SummaryError),

    #[error("selected option index {index} is out of range")]
    InvalidSelection { index: usize },
}

impl QuizFlowError {
    /// True for failures the view should present as a network problem
    /// (with a Retry affordance) rather than as bad data.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, QuizFlowError::Backend(_))
    }
}
