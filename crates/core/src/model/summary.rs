use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("score {score} exceeds total_questions {total}")]
    ScoreOutOfRange { score: u32, total: u32 },
}

/// Terminal payload of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    score: u32,
    total_questions: u32,
}

impl QuizSummary {
    /// # Errors
    ///
    /// Returns `SummaryError::ScoreOutOfRange` if the score exceeds the
    /// question count.
    pub fn new(score: u32, total_questions: u32) -> Result<Self, SummaryError> {
        if score > total_questions {
            return Err(SummaryError::ScoreOutOfRange {
                score,
                total: total_questions,
            });
        }
        Ok(Self {
            score,
            total_questions,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    /// Summary line shown on the finished view.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("Your score: {} / {}", self.score, self.total_questions)
    }
}
