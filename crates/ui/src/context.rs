use std::sync::Arc;

use quiz_core::model::{CategoryKey, NarrationSettings};
use services::QuizFlowService;

/// What the composition root (`crates/app`) provides to the views.
pub trait UiApp: Send + Sync {
    /// Question sets the configured server is expected to host.
    fn categories(&self) -> Vec<CategoryKey>;

    /// Initial narration configuration; views keep their own working copy
    /// and mutate it through its setter.
    fn narration(&self) -> NarrationSettings;

    fn quiz_flow(&self) -> Arc<QuizFlowService>;
}

#[derive(Clone)]
pub struct AppContext {
    categories: Vec<CategoryKey>,
    narration: NarrationSettings,
    quiz_flow: Arc<QuizFlowService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            categories: app.categories(),
            narration: app.narration(),
            quiz_flow: app.quiz_flow(),
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[CategoryKey] {
        &self.categories
    }

    #[must_use]
    pub fn narration(&self) -> NarrationSettings {
        self.narration.clone()
    }

    #[must_use]
    pub fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
