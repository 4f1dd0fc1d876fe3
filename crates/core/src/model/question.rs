use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyText,

    #[error("question has no options")]
    NoOptions,

    #[error("option {index} is blank")]
    BlankOption { index: usize },

    #[error("question_number must be at least 1, got {got}")]
    InvalidNumber { got: u32 },

    #[error("question_number {number} exceeds total_questions {total}")]
    NumberOutOfRange { number: u32, total: u32 },
}

/// A single multiple-choice question as received from the server.
/// Immutable once built; a new one is constructed per fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    text: String,
    options: Vec<String>,
    question_number: u32,
    total_questions: u32,
}

impl QuizQuestion {
    /// Validate a question payload.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the text is empty, there are no options,
    /// an option label is blank, or the numbering is inconsistent.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        question_number: u32,
        total_questions: u32,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if let Some(index) = options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuestionError::BlankOption { index });
        }
        if question_number == 0 {
            return Err(QuestionError::InvalidNumber {
                got: question_number,
            });
        }
        if question_number > total_questions {
            return Err(QuestionError::NumberOutOfRange {
                number: question_number,
                total: total_questions,
            });
        }

        Ok(Self {
            text,
            options,
            question_number,
            total_questions,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Label of the option at `index`, if any.
    #[must_use]
    pub fn option_label(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// 1-based position within the session.
    #[must_use]
    pub fn question_number(&self) -> u32 {
        self.question_number
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }
}
