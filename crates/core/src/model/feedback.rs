/// How a rendered option should be highlighted after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// The server-declared correct option.
    Correct,
    /// The user's selection, when it differs from the correct option.
    Incorrect,
    /// Everything else.
    Plain,
}

impl OptionMark {
    /// CSS class hook for the option container, empty for plain options.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            OptionMark::Correct => "correct",
            OptionMark::Incorrect => "incorrect",
            OptionMark::Plain => "",
        }
    }
}

/// Compute per-option highlight marks for a submitted answer.
///
/// The selection is identified by index (tracked locally, never re-read from
/// rendered text). Correctness is decided per option by exact trimmed
/// equality with the server-declared label, so duplicate labels are all
/// marked correct; a label-equal selection is never marked incorrect.
#[must_use]
pub fn mark_options(
    options: &[String],
    correct_label: &str,
    selected_index: usize,
) -> Vec<OptionMark> {
    let correct = correct_label.trim();

    options
        .iter()
        .enumerate()
        .map(|(index, opt)| {
            if opt.trim() == correct {
                OptionMark::Correct
            } else if index == selected_index {
                OptionMark::Incorrect
            } else {
                OptionMark::Plain
            }
        })
        .collect()
}

/// Server feedback for one submitted answer, resolved against the rendered
/// option list. Consumed once to update the view, then replaced by the next
/// question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    message: String,
    explanation: String,
    correct_label: String,
    marks: Vec<OptionMark>,
}

impl AnswerFeedback {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        explanation: impl Into<String>,
        correct_label: impl Into<String>,
        options: &[String],
        selected_index: usize,
    ) -> Self {
        let correct_label = correct_label.into();
        let marks = mark_options(options, &correct_label, selected_index);
        Self {
            message: message.into(),
            explanation: explanation.into(),
            correct_label,
            marks,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn correct_label(&self) -> &str {
        &self.correct_label
    }

    #[must_use]
    pub fn marks(&self) -> &[OptionMark] {
        &self.marks
    }

    #[must_use]
    pub fn mark_for(&self, index: usize) -> OptionMark {
        self.marks.get(index).copied().unwrap_or(OptionMark::Plain)
    }

    /// Text handed to the narrator: `"{message}. {explanation}"`.
    #[must_use]
    pub fn spoken_text(&self) -> String {
        format!("{}. {}", self.message, self.explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(labels: &[&str]) -> Vec<String> {
        labels.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn wrong_selection_marks_both() {
        let opts = options(&["A", "B"]);
        let marks = mark_options(&opts, "B", 0);
        assert_eq!(marks, vec![OptionMark::Incorrect, OptionMark::Correct]);
    }

    #[test]
    fn correct_selection_is_never_incorrect() {
        let opts = options(&["A", "B", "C"]);
        let marks = mark_options(&opts, "B", 1);
        assert_eq!(
            marks,
            vec![OptionMark::Plain, OptionMark::Correct, OptionMark::Plain]
        );
    }

    #[test]
    fn matches_by_trimmed_label() {
        let opts = options(&["  B ", "A"]);
        let marks = mark_options(&opts, "B", 1);
        assert_eq!(marks, vec![OptionMark::Correct, OptionMark::Incorrect]);
    }

    #[test]
    fn unknown_correct_label_only_marks_selection() {
        let opts = options(&["A", "B"]);
        let marks = mark_options(&opts, "C", 0);
        assert_eq!(marks, vec![OptionMark::Incorrect, OptionMark::Plain]);
    }

    #[test]
    fn duplicate_correct_labels_are_all_marked_correct() {
        let opts = options(&["B", "B"]);
        let marks = mark_options(&opts, "B", 1);
        assert_eq!(marks, vec![OptionMark::Correct, OptionMark::Correct]);
    }

    #[test]
    fn label_equal_selection_is_never_incorrect() {
        // Even when another option shares the correct label, a selection
        // whose label equals the server's answer must not read as wrong.
        let opts = options(&["B", "B", "A"]);
        for selected in 0..opts.len() {
            let marks = mark_options(&opts, "B", selected);
            if opts[selected].trim() == "B" {
                assert_ne!(marks[selected], OptionMark::Incorrect);
                assert_eq!(marks[selected], OptionMark::Correct);
            }
        }
    }

    #[test]
    fn feedback_exposes_marks_and_spoken_text() {
        let opts = options(&["A", "B"]);
        let feedback = AnswerFeedback::new("Incorrect!", "B is right.", "B", &opts, 0);
        assert_eq!(feedback.mark_for(0), OptionMark::Incorrect);
        assert_eq!(feedback.mark_for(1), OptionMark::Correct);
        assert_eq!(feedback.mark_for(9), OptionMark::Plain);
        assert_eq!(feedback.spoken_text(), "Incorrect!. B is right.");
    }
}
