use std::sync::Mutex;

use async_trait::async_trait;

use quiz_core::model::CategoryKey;

use crate::backend::QuizBackend;
use crate::error::BackendError;
use crate::wire::{AnswerPayload, QuestionPayload};

/// One scripted question with its grading data.
#[derive(Debug, Clone)]
pub struct ScriptedQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct: String,
    pub explanation: String,
}

impl ScriptedQuestion {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        options: &[&str],
        correct: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.iter().map(ToString::to_string).collect(),
            correct: correct.into(),
            explanation: explanation.into(),
        }
    }
}

#[derive(Debug, Default)]
struct Cursor {
    next_index: usize,
    score: u32,
}

/// In-memory `QuizBackend` with server-held progress, mirroring the remote
/// session semantics: answering advances the cursor, reset rewinds it.
///
/// Used by integration and view tests, and usable as an offline demo backend.
pub struct ScriptedQuizServer {
    questions: Vec<ScriptedQuestion>,
    cursor: Mutex<Cursor>,
}

impl ScriptedQuizServer {
    #[must_use]
    pub fn new(questions: Vec<ScriptedQuestion>) -> Self {
        Self {
            questions,
            cursor: Mutex::new(Cursor::default()),
        }
    }

    /// Start mid-session: `answered` questions consumed, `score` correct.
    #[must_use]
    pub fn with_progress(questions: Vec<ScriptedQuestion>, answered: usize, score: u32) -> Self {
        Self {
            questions,
            cursor: Mutex::new(Cursor {
                next_index: answered,
                score,
            }),
        }
    }

    fn total(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Cursor> {
        // Mutex poisoning only happens if a panic escaped while holding the
        // lock; tests should surface that as a panic too.
        self.cursor.lock().expect("scripted cursor lock")
    }
}

#[async_trait]
impl QuizBackend for ScriptedQuizServer {
    async fn fetch_question(
        &self,
        _category: &CategoryKey,
    ) -> Result<QuestionPayload, BackendError> {
        let cursor = self.lock();
        let Some(question) = self.questions.get(cursor.next_index) else {
            return Ok(QuestionPayload {
                finished: true,
                score: Some(cursor.score),
                total_questions: self.total(),
                question_number: self.total(),
                ..QuestionPayload::default()
            });
        };

        Ok(QuestionPayload {
            finished: false,
            score: None,
            total_questions: self.total(),
            question_number: u32::try_from(cursor.next_index).unwrap_or(u32::MAX) + 1,
            language: None,
            question: Some(question.text.clone()),
            options: question.options.clone(),
        })
    }

    async fn submit_answer(
        &self,
        _category: &CategoryKey,
        selected: &str,
    ) -> Result<AnswerPayload, BackendError> {
        let mut cursor = self.lock();
        let Some(question) = self.questions.get(cursor.next_index) else {
            return Err(BackendError::NoActiveQuestion);
        };

        let is_correct = selected.trim() == question.correct.trim();
        if is_correct {
            cursor.score += 1;
        }
        cursor.next_index += 1;

        let total = self.total();
        // The answer payload carries the next question's number so the bar
        // advances with the feedback; pinned to total at the end of the run.
        let question_number = u32::try_from(cursor.next_index).unwrap_or(u32::MAX) + 1;

        Ok(AnswerPayload {
            feedback_msg: if is_correct {
                "Correct!".to_string()
            } else {
                "Incorrect!".to_string()
            },
            explanation: question.explanation.clone(),
            correct: question.correct.clone(),
            selected: Some(selected.to_string()),
            total_questions: total,
            question_number: question_number.min(total),
        })
    }

    async fn reset(&self, _category: &CategoryKey) -> Result<(), BackendError> {
        let mut cursor = self.lock();
        cursor.next_index = 0;
        cursor.score = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category() -> CategoryKey {
        CategoryKey::new("python").unwrap()
    }

    fn two_questions() -> Vec<ScriptedQuestion> {
        vec![
            ScriptedQuestion::new("Q1?", &["A", "B"], "B", "B is right."),
            ScriptedQuestion::new("Q2?", &["X", "Y"], "X", "X is right."),
        ]
    }

    #[tokio::test]
    async fn serves_questions_in_order() {
        let server = ScriptedQuizServer::new(two_questions());
        let payload = server.fetch_question(&category()).await.unwrap();
        assert!(!payload.finished);
        assert_eq!(payload.question.as_deref(), Some("Q1?"));
        assert_eq!(payload.question_number, 1);
        assert_eq!(payload.total_questions, 2);
    }

    #[tokio::test]
    async fn answering_advances_and_scores() {
        let server = ScriptedQuizServer::new(two_questions());
        let feedback = server.submit_answer(&category(), "B").await.unwrap();
        assert_eq!(feedback.feedback_msg, "Correct!");
        assert_eq!(feedback.question_number, 2);

        let feedback = server.submit_answer(&category(), "Y").await.unwrap();
        assert_eq!(feedback.feedback_msg, "Incorrect!");
        assert_eq!(feedback.correct, "X");
        assert_eq!(feedback.question_number, 2);

        let finished = server.fetch_question(&category()).await.unwrap();
        assert!(finished.finished);
        assert_eq!(finished.score, Some(1));
    }

    #[tokio::test]
    async fn reset_rewinds_the_cursor() {
        let server = ScriptedQuizServer::with_progress(two_questions(), 2, 2);
        assert!(server.fetch_question(&category()).await.unwrap().finished);

        server.reset(&category()).await.unwrap();
        let payload = server.fetch_question(&category()).await.unwrap();
        assert!(!payload.finished);
        assert_eq!(payload.question_number, 1);
    }

    #[tokio::test]
    async fn answer_after_finish_is_rejected() {
        let server = ScriptedQuizServer::with_progress(two_questions(), 2, 1);
        let err = server.submit_answer(&category(), "B").await.unwrap_err();
        assert!(matches!(err, BackendError::NoActiveQuestion));
    }
}
