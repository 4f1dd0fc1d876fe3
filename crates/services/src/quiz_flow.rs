use std::future::Future;
use std::sync::Arc;

use quiz_core::Progress;
use quiz_core::model::{AnswerFeedback, CategoryKey, QuizQuestion, QuizSummary};

use crate::backend::QuizBackend;
use crate::error::{BackendError, QuizFlowError};
use crate::retry::RetryPolicy;

/// What a question fetch produced: either the next question or the
/// finished-session summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizTurn {
    Question(QuizQuestion),
    Finished(QuizSummary),
}

/// Result of submitting one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub feedback: AnswerFeedback,
    pub progress: Progress,
}

/// Orchestrates the fetch-question / submit-answer / reset cycle against a
/// quiz backend, mapping wire payloads into validated domain types and
/// retrying transient failures once.
#[derive(Clone)]
pub struct QuizFlowService {
    backend: Arc<dyn QuizBackend>,
    retry: RetryPolicy,
}

impl QuizFlowService {
    #[must_use]
    pub fn new(backend: Arc<dyn QuizBackend>) -> Self {
        Self {
            backend,
            retry: RetryPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Fetch the current question for the category.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Backend` when the server is unreachable after
    /// the bounded retry, or a validation error for malformed payloads.
    pub async fn load_question(&self, category: &CategoryKey) -> Result<QuizTurn, QuizFlowError> {
        let payload = self
            .with_retry(|| self.backend.fetch_question(category))
            .await?;

        if payload.finished {
            let summary =
                QuizSummary::new(payload.score.unwrap_or(0), payload.total_questions)?;
            return Ok(QuizTurn::Finished(summary));
        }

        let question = QuizQuestion::new(
            payload.question.unwrap_or_default(),
            payload.options,
            payload.question_number,
            payload.total_questions,
        )?;
        Ok(QuizTurn::Question(question))
    }

    /// Submit the option at `selected_index` of `question`.
    ///
    /// The feedback resolves highlight marks against the question's option
    /// list, and the progress comes from the answer payload so the bar
    /// advances while the feedback is on screen.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::InvalidSelection` when the index does not name
    /// an option, otherwise backend errors as for `load_question`.
    pub async fn submit_answer(
        &self,
        category: &CategoryKey,
        question: &QuizQuestion,
        selected_index: usize,
    ) -> Result<AnswerOutcome, QuizFlowError> {
        let selected = question
            .option_label(selected_index)
            .ok_or(QuizFlowError::InvalidSelection {
                index: selected_index,
            })?
            .to_string();

        let payload = self
            .with_retry(|| self.backend.submit_answer(category, &selected))
            .await?;

        let feedback = AnswerFeedback::new(
            payload.feedback_msg,
            payload.explanation,
            payload.correct,
            question.options(),
            selected_index,
        );
        let progress = Progress::new(payload.question_number, payload.total_questions);

        Ok(AnswerOutcome { feedback, progress })
    }

    /// Send the reset directive so the next fetch starts a fresh session.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Backend` when the reset request fails.
    pub async fn reset(&self, category: &CategoryKey) -> Result<(), QuizFlowError> {
        self.with_retry(|| self.backend.reset(category)).await?;
        Ok(())
    }

    async fn with_retry<T, F, Fut>(&self, mut op: F) -> Result<T, BackendError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, BackendError>>,
    {
        let mut attempt = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.retry.max_retries() && err.is_transient() => {
                    let delay = self.retry.delay(attempt);
                    tracing::warn!(%err, attempt, ?delay, "transient backend failure, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    tracing::error!(%err, "backend request failed");
                    return Err(err);
                }
            }
        }
    }
}
