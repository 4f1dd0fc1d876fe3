use quiz_core::Progress;
use quiz_core::model::{AnswerFeedback, CategoryKey, QuizQuestion, QuizSummary};
use services::{QuizFlowService, QuizTurn};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Submit,
    Restart,
}

/// Where the session loop currently is. One cycle per question:
/// `Loading → AwaitingAnswer → Submitting → ShowingFeedback → Loading`,
/// until the server reports the session finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Loading,
    AwaitingAnswer,
    Submitting,
    ShowingFeedback,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Finished,
}

/// One rendered option row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRow {
    pub index: usize,
    pub label: String,
    pub selected: bool,
    /// Highlight class once feedback is shown, empty otherwise.
    pub mark_class: &'static str,
}

/// View-model for the quiz session loop. At most one question and one
/// feedback payload live here at a time; the cycle is strictly sequential.
///
/// Cloneable so the view can run network steps on a working copy while the
/// on-screen copy keeps showing the last rendered state.
#[derive(Clone)]
pub struct QuizVm {
    phase: QuizPhase,
    question: Option<QuizQuestion>,
    feedback: Option<AnswerFeedback>,
    summary: Option<QuizSummary>,
    progress: Progress,
    selected: Option<usize>,
}

impl QuizVm {
    fn empty() -> Self {
        Self {
            phase: QuizPhase::Loading,
            question: None,
            feedback: None,
            summary: None,
            progress: Progress::default(),
            selected: None,
        }
    }

    /// Start a session by fetching the server's current question.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` for backend or payload failures.
    pub async fn start(
        flow: &QuizFlowService,
        category: &CategoryKey,
    ) -> Result<Self, ViewError> {
        let mut vm = Self::empty();
        vm.advance(flow, category).await?;
        Ok(vm)
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn question(&self) -> Option<&QuizQuestion> {
        self.question.as_ref()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&QuizSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Exactly one option may be selected, and only while awaiting an answer.
    pub fn select(&mut self, index: usize) {
        if self.phase != QuizPhase::AwaitingAnswer {
            return;
        }
        let in_range = self
            .question
            .as_ref()
            .is_some_and(|question| index < question.options().len());
        if in_range {
            self.selected = Some(index);
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == QuizPhase::AwaitingAnswer && self.selected.is_some()
    }

    /// Move to `Submitting` so inputs disable while a request is in flight.
    /// Question, selection and progress stay rendered. Returns `false` when
    /// there is nothing to submit.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.phase = QuizPhase::Submitting;
        true
    }

    /// Rows for the option list, with highlight classes once feedback exists.
    #[must_use]
    pub fn option_rows(&self) -> Vec<OptionRow> {
        let Some(question) = self.question.as_ref() else {
            return Vec::new();
        };
        question
            .options()
            .iter()
            .enumerate()
            .map(|(index, label)| OptionRow {
                index,
                label: label.clone(),
                selected: self.selected == Some(index),
                mark_class: self
                    .feedback
                    .as_ref()
                    .map_or("", |feedback| feedback.mark_for(index).css_class()),
            })
            .collect()
    }

    /// Submit the current selection. A no-op unless a selection exists and
    /// the vm is awaiting an answer.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` for backend failures; the vm drops back to
    /// `AwaitingAnswer` so the action can be retried.
    pub async fn submit_selected(
        &mut self,
        flow: &QuizFlowService,
        category: &CategoryKey,
    ) -> Result<(), ViewError> {
        if !self.can_submit() {
            return Ok(());
        }
        let (question, selected_index) = match (self.question.as_ref(), self.selected) {
            (Some(question), Some(index)) => (question.clone(), index),
            _ => return Ok(()),
        };

        self.phase = QuizPhase::Submitting;
        let outcome = match flow.submit_answer(category, &question, selected_index).await {
            Ok(outcome) => outcome,
            Err(err) => {
                self.phase = QuizPhase::AwaitingAnswer;
                return Err(ViewError::from_flow(&err));
            }
        };

        self.progress = outcome.progress;
        self.feedback = Some(outcome.feedback);
        self.phase = QuizPhase::ShowingFeedback;
        Ok(())
    }

    /// Fetch the next question (or the summary) and swap it in.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` for backend or payload failures; the previous
    /// render is left intact for a retry.
    pub async fn advance(
        &mut self,
        flow: &QuizFlowService,
        category: &CategoryKey,
    ) -> Result<QuizOutcome, ViewError> {
        let previous_phase = self.phase;
        self.phase = QuizPhase::Loading;

        let turn = match flow.load_question(category).await {
            Ok(turn) => turn,
            Err(err) => {
                self.phase = previous_phase;
                return Err(ViewError::from_flow(&err));
            }
        };

        match turn {
            QuizTurn::Question(question) => {
                self.progress =
                    Progress::new(question.question_number(), question.total_questions());
                self.question = Some(question);
                self.feedback = None;
                self.selected = None;
                self.summary = None;
                self.phase = QuizPhase::AwaitingAnswer;
                Ok(QuizOutcome::Continue)
            }
            QuizTurn::Finished(summary) => {
                self.progress = Progress::finished(summary.total_questions());
                self.question = None;
                self.feedback = None;
                self.selected = None;
                self.summary = Some(summary);
                self.phase = QuizPhase::Finished;
                Ok(QuizOutcome::Finished)
            }
        }
    }

    /// Question text for the narrator, when a question is on screen.
    #[must_use]
    pub fn spoken_question(&self) -> Option<String> {
        self.question.as_ref().map(|q| q.text().to_string())
    }

    /// Feedback text for the narrator, when feedback is on screen.
    #[must_use]
    pub fn spoken_feedback(&self) -> Option<String> {
        self.feedback.as_ref().map(AnswerFeedback::spoken_text)
    }
}
