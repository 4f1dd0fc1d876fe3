use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{CategoryKey, NarrationSettings};
use services::{QuizBackend, QuizFlowService, RetryPolicy, ScriptedQuestion, ScriptedQuizServer};

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{HomeView, QuizView};

struct TestApp {
    categories: Vec<CategoryKey>,
    quiz_flow: Arc<QuizFlowService>,
}

impl UiApp for TestApp {
    fn categories(&self) -> Vec<CategoryKey> {
        self.categories.clone()
    }

    fn narration(&self) -> NarrationSettings {
        NarrationSettings::default()
    }

    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: Option<QuizTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz(category) => rsx! { QuizView { category } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_handles: Option<QuizTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn default_categories() -> Vec<CategoryKey> {
    ["python", "java", "cpp"]
        .into_iter()
        .map(|key| CategoryKey::new(key).expect("valid category key"))
        .collect()
}

pub fn setup_view_harness(view: ViewKind, questions: Vec<ScriptedQuestion>) -> ViewHarness {
    setup_view_harness_with_backend(view, Arc::new(ScriptedQuizServer::new(questions)))
}

pub fn setup_view_harness_with_server(view: ViewKind, server: ScriptedQuizServer) -> ViewHarness {
    setup_view_harness_with_backend(view, Arc::new(server))
}

pub fn setup_view_harness_with_backend(
    view: ViewKind,
    backend: Arc<dyn QuizBackend>,
) -> ViewHarness {
    // No retry sleeps in the render loop; error tests assert the first failure.
    let quiz_flow = Arc::new(QuizFlowService::new(backend).with_retry_policy(RetryPolicy::none()));
    let app = Arc::new(TestApp {
        categories: default_categories(),
        quiz_flow,
    });

    let quiz_handles = match view {
        ViewKind::Quiz(_) => Some(QuizTestHandles::default()),
        ViewKind::Home => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
        },
    );
    ViewHarness { dom, quiz_handles }
}
