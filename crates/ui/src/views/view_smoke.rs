use std::sync::Arc;

use quiz_core::model::CategoryKey;
use services::wire::{AnswerPayload, QuestionPayload};
use services::{BackendError, QuizBackend, ScriptedQuestion, ScriptedQuizServer};
use tokio::sync::Semaphore;

use super::test_harness::{
    ViewKind, setup_view_harness, setup_view_harness_with_backend, setup_view_harness_with_server,
};
use crate::vm::QuizIntent;

fn five_questions() -> Vec<ScriptedQuestion> {
    (1..=5)
        .map(|n| ScriptedQuestion::new(format!("Q{n}?"), &["A", "B"], "B", format!("E{n}")))
        .collect()
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_intro_and_categories() {
    let mut harness = setup_view_harness(ViewKind::Home, Vec::new());
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Welcome to the Programming Language Quiz!"),
        "missing intro in {html}"
    );
    assert!(html.contains("Python"), "missing category link in {html}");
    assert!(html.contains("Cpp"), "missing category link in {html}");
    assert!(
        html.contains("Read questions aloud"),
        "missing narration toggle in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz("python".to_string()),
        five_questions(),
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Quiz: Python"), "missing title in {html}");
    assert!(html.contains("Q1?"), "missing question text in {html}");
    assert!(html.contains("Progress: 1 / 5"), "missing progress label in {html}");
    assert!(html.contains("width: 20%"), "missing bar width in {html}");
    let radios = html.matches("type=\"radio\"").count();
    assert_eq!(radios, 2, "expected 2 option radios in {html}");
    assert!(html.contains("required"), "options must be required in {html}");
    assert!(html.contains("Submit Answer"), "missing submit button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_finished_summary() {
    let server = ScriptedQuizServer::with_progress(five_questions(), 5, 4);
    let mut harness =
        setup_view_harness_with_server(ViewKind::Quiz("python".to_string()), server);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Quiz Finished!"), "missing finished banner in {html}");
    assert!(html.contains("Your score: 4 / 5"), "missing score line in {html}");
    assert!(html.contains("width: 100%"), "bar should be full in {html}");
    assert!(html.contains("Restart Quiz"), "missing restart button in {html}");
    assert!(html.contains("Back to Home"), "missing home link in {html}");
}

struct UnreachableBackend;

#[async_trait::async_trait]
impl QuizBackend for UnreachableBackend {
    async fn fetch_question(
        &self,
        _category: &CategoryKey,
    ) -> Result<QuestionPayload, BackendError> {
        Err(BackendError::Unreachable("connection refused".to_string()))
    }

    async fn submit_answer(
        &self,
        _category: &CategoryKey,
        _selected: &str,
    ) -> Result<AnswerPayload, BackendError> {
        Err(BackendError::Unreachable("connection refused".to_string()))
    }

    async fn reset(&self, _category: &CategoryKey) -> Result<(), BackendError> {
        Err(BackendError::Unreachable("connection refused".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_error_with_retry() {
    let mut harness = setup_view_harness_with_backend(
        ViewKind::Quiz("python".to_string()),
        Arc::new(UnreachableBackend),
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("Couldn&#39;t reach the quiz server")
            || html.contains("Couldn't reach the quiz server"),
        "missing network error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry button in {html}");
}

/// Delegates to a scripted server, but holds each answer submission until
/// the test releases the gate.
struct GatedBackend {
    inner: ScriptedQuizServer,
    gate: Arc<Semaphore>,
}

#[async_trait::async_trait]
impl QuizBackend for GatedBackend {
    async fn fetch_question(
        &self,
        category: &CategoryKey,
    ) -> Result<QuestionPayload, BackendError> {
        self.inner.fetch_question(category).await
    }

    async fn submit_answer(
        &self,
        category: &CategoryKey,
        selected: &str,
    ) -> Result<AnswerPayload, BackendError> {
        let _permit = self
            .gate
            .acquire()
            .await
            .map_err(|_| BackendError::Unreachable("gate closed".to_string()))?;
        self.inner.submit_answer(category, selected).await
    }

    async fn reset(&self, category: &CategoryKey) -> Result<(), BackendError> {
        self.inner.reset(category).await
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_keeps_question_on_screen_while_submit_is_in_flight() {
    let gate = Arc::new(Semaphore::new(0));
    let backend = GatedBackend {
        inner: ScriptedQuizServer::new(five_questions()),
        gate: Arc::clone(&gate),
    };
    let mut harness = setup_view_harness_with_backend(
        ViewKind::Quiz("python".to_string()),
        Arc::new(backend),
    );
    harness.rebuild();
    harness.drive_async().await;
    assert!(harness.render().contains("Q1?"));

    let handles = harness.quiz_handles.clone().expect("quiz handles");
    harness.dom.in_runtime(|| {
        handles.dispatch().call(QuizIntent::Select(1));
        handles.dispatch().call(QuizIntent::Submit);
    });
    harness.drive_async().await;

    // The request is parked on the gate; the last render must stay up.
    let html = harness.render();
    assert!(html.contains("Q1?"), "question dropped mid-submit in {html}");
    assert!(
        html.contains("Progress: 1 / 5"),
        "progress reset mid-submit in {html}"
    );
    assert!(
        !html.contains("No question available."),
        "placeholder shown mid-submit in {html}"
    );

    gate.add_permits(1);
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Correct!"),
        "feedback missing once the response lands in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_rejects_invalid_category() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz("  ".to_string()),
        five_questions(),
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("category doesn&#39;t look right")
            || html.contains("category doesn't look right"),
        "missing category error in {html}"
    );
}
