/// Position within a session, as reported by the server.
///
/// Both the question payload and the answer payload carry a
/// number/total pair; whichever arrived last drives the bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    question_number: u32,
    total_questions: u32,
}

impl Progress {
    #[must_use]
    pub fn new(question_number: u32, total_questions: u32) -> Self {
        Self {
            question_number,
            total_questions,
        }
    }

    /// Progress at the end of a finished session: bar pinned to 100%.
    #[must_use]
    pub fn finished(total_questions: u32) -> Self {
        Self::new(total_questions, total_questions)
    }

    #[must_use]
    pub fn question_number(&self) -> u32 {
        self.question_number
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    /// Percentage for the bar width. A zero total renders as 0, never NaN.
    /// A finished session (number == total) renders as 100.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        let ratio = f64::from(self.question_number) / f64::from(self.total_questions);
        let percent = (ratio * 100.0).round();
        percent.clamp(0.0, 100.0) as u32
    }

    /// Width value for the bar element, e.g. `"20%"`.
    #[must_use]
    pub fn width_css(&self) -> String {
        format!("{}%", self.percent())
    }

    /// Text next to the bar, e.g. `"Progress: 1 / 5"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "Progress: {} / {}",
            self.question_number, self.total_questions
        )
    }
}
