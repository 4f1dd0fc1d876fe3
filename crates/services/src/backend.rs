use async_trait::async_trait;

use quiz_core::model::CategoryKey;

use crate::error::BackendError;
use crate::wire::{AnswerPayload, QuestionPayload};

/// Request/response surface of a quiz server.
///
/// The session cursor lives behind this trait (on the server); the client
/// re-fetches it every cycle and never stores progress locally.
#[async_trait]
pub trait QuizBackend: Send + Sync {
    /// Fetch the current question, or a finished payload.
    async fn fetch_question(&self, category: &CategoryKey)
    -> Result<QuestionPayload, BackendError>;

    /// Submit the selected option label and receive feedback.
    async fn submit_answer(
        &self,
        category: &CategoryKey,
        selected: &str,
    ) -> Result<AnswerPayload, BackendError>;

    /// Ask the server to reset session progress for the category.
    async fn reset(&self, category: &CategoryKey) -> Result<(), BackendError>;
}
