use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::Link;

use quiz_core::Progress;
use quiz_core::model::CategoryKey;

use crate::context::AppContext;
use crate::narration;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizIntent, QuizPhase, QuizVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// How long feedback stays on screen before the next question replaces it.
const FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LastAction {
    LoadQuestion,
    Submit,
    Restart,
}

#[component]
pub fn QuizView(category: String) -> Element {
    let ctx = use_context::<AppContext>();
    let flow = ctx.quiz_flow();
    let category_key = CategoryKey::new(category.clone()).ok();
    let title = category_key
        .as_ref()
        .map_or_else(|| "Quiz".to_string(), |key| format!("Quiz: {}", key.title()));

    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<QuizVm>);
    let last_action = use_signal(|| None::<LastAction>);
    let narration_settings = use_signal(|| ctx.narration());

    let flow_for_resource = flow.clone();
    let category_for_resource = category_key.clone();
    let resource = use_resource(move || {
        let flow = flow_for_resource.clone();
        let category = category_for_resource.clone();
        let mut error = error;
        let mut vm = vm;
        let mut last_action = last_action;

        async move {
            last_action.set(Some(LastAction::LoadQuestion));
            let Some(category) = category else {
                return Err(ViewError::InvalidCategory);
            };
            let started = QuizVm::start(&flow, &category).await?;
            if let Some(text) = started.spoken_question() {
                let settings = narration_settings.peek().clone();
                narration::narrate(&text, &settings);
            }
            vm.set(Some(started));
            error.set(None);
            Ok::<_, ViewError>(())
        }
    });

    let state = view_state_from_resource(&resource);

    let dispatch_intent = {
        let flow = flow.clone();
        let category_key = category_key.clone();
        use_callback(move |intent: QuizIntent| {
            let mut error = error;
            let mut vm = vm;
            let mut last_action = last_action;

            match intent {
                QuizIntent::Select(index) => {
                    if let Some(vm) = vm.write().as_mut() {
                        vm.select(index);
                    }
                }
                QuizIntent::Submit => {
                    let flow = flow.clone();
                    let Some(category) = category_key.clone() else {
                        return;
                    };
                    spawn(async move {
                        last_action.set(Some(LastAction::Submit));
                        // Network steps run on a working copy; the signal
                        // keeps the last render on screen, moved to
                        // Submitting so inputs disable meanwhile.
                        let mut vm_value = {
                            let mut guard = vm.write();
                            let Some(current) = guard.as_mut() else {
                                error.set(Some(ViewError::Unknown));
                                return;
                            };
                            if !current.can_submit() {
                                return;
                            }
                            let working = current.clone();
                            current.begin_submit();
                            working
                        };

                        let submitted = vm_value.submit_selected(&flow, &category).await;
                        let spoken = vm_value.spoken_feedback();
                        vm.set(Some(vm_value.clone()));

                        if let Err(err) = submitted {
                            error.set(Some(err));
                            return;
                        }
                        error.set(None);
                        if let Some(text) = spoken {
                            let settings = narration_settings.peek().clone();
                            narration::narrate(&text, &settings);
                        }

                        // Leave the feedback on screen before the next load;
                        // a failure from here on retries as a load.
                        last_action.set(Some(LastAction::LoadQuestion));
                        tokio::time::sleep(FEEDBACK_DELAY).await;

                        let advanced = vm_value.advance(&flow, &category).await;
                        let spoken = vm_value.spoken_question();
                        vm.set(Some(vm_value));

                        match advanced {
                            Ok(_) => {
                                error.set(None);
                                if let Some(text) = spoken {
                                    let settings = narration_settings.peek().clone();
                                    narration::narrate(&text, &settings);
                                }
                            }
                            Err(err) => error.set(Some(err)),
                        }
                    });
                }
                QuizIntent::Restart => {
                    let flow = flow.clone();
                    let Some(category) = category_key.clone() else {
                        return;
                    };
                    let mut resource = resource;
                    spawn(async move {
                        last_action.set(Some(LastAction::Restart));
                        match flow.reset(&category).await {
                            Ok(()) => {
                                error.set(None);
                                // The reset directive rewound the server
                                // session; reload from question one.
                                resource.restart();
                            }
                            Err(err) => error.set(Some(ViewError::from_flow(&err))),
                        }
                    });
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let retry_action = use_callback(move |()| match last_action() {
        Some(LastAction::LoadQuestion) | None => {
            let mut resource = resource;
            resource.restart();
        }
        Some(LastAction::Submit) => dispatch_intent.call(QuizIntent::Submit),
        Some(LastAction::Restart) => dispatch_intent.call(QuizIntent::Restart),
    });

    let vm_guard = vm.read();
    let phase = vm_guard.as_ref().map(QuizVm::phase);
    let progress = vm_guard
        .as_ref()
        .map_or_else(Progress::default, QuizVm::progress);
    let question_text = vm_guard
        .as_ref()
        .and_then(|vm| vm.question().map(|q| q.text().to_string()));
    let option_rows = vm_guard
        .as_ref()
        .map_or_else(Vec::new, QuizVm::option_rows);
    let feedback_message = vm_guard
        .as_ref()
        .and_then(|vm| vm.feedback().map(|f| f.message().to_string()));
    let feedback_explanation = vm_guard
        .as_ref()
        .and_then(|vm| vm.feedback().map(|f| f.explanation().to_string()));
    let score_line = vm_guard
        .as_ref()
        .and_then(|vm| vm.summary().map(|s| s.score_line()));
    let can_submit = vm_guard.as_ref().is_some_and(QuizVm::can_submit);
    let awaiting = phase == Some(QuizPhase::AwaitingAnswer);
    let finished = phase == Some(QuizPhase::Finished);
    let progress_width = progress.width_css();
    let progress_label = progress.label();
    let narration_enabled = narration_settings.read().enabled();
    let view_error = *error.read();

    rsx! {
        div { class: "page quiz-page",
            header { class: "quiz-header",
                h2 { id: "quiz-title", "{title}" }
                label { class: "narration-toggle",
                    input {
                        r#type: "checkbox",
                        checked: narration_enabled,
                        onchange: {
                            let mut narration_settings = narration_settings;
                            move |evt: FormEvent| {
                                narration_settings.write().set_enabled(evt.checked());
                            }
                        },
                    }
                    "Read aloud"
                }
            }
            div { class: "progress-track",
                div {
                    id: "progress-bar",
                    class: "progress-bar",
                    style: "width: {progress_width}",
                }
            }
            p { id: "progress-text", "{progress_label}" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "quiz-error",
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| retry_action.call(()),
                            "Retry"
                        }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(err) = view_error {
                        div { class: "quiz-error",
                            p { "{err.message()}" }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| retry_action.call(()),
                                "Retry"
                            }
                        }
                    }
                    if finished {
                        div { class: "quiz-complete",
                            h2 { "Quiz Finished!" }
                            if let Some(line) = score_line {
                                p { class: "score", "{line}" }
                            }
                            div { class: "quiz-complete__actions",
                                button {
                                    id: "restart-btn",
                                    r#type: "button",
                                    onclick: move |_| dispatch_intent.call(QuizIntent::Restart),
                                    "Restart Quiz"
                                }
                                Link { to: Route::Home {}, "Back to Home" }
                            }
                        }
                    } else if let Some(text) = question_text {
                        div { class: "question-box fade-in", id: "question-box",
                            p { class: "question-text",
                                strong { "{text}" }
                            }
                            div { class: "options",
                                for row in option_rows {
                                    div {
                                        key: "{row.index}",
                                        class: if row.mark_class.is_empty() {
                                            "option".to_string()
                                        } else {
                                            format!("option {}", row.mark_class)
                                        },
                                        label {
                                            input {
                                                r#type: "radio",
                                                name: "option",
                                                value: "{row.label}",
                                                checked: row.selected,
                                                required: true,
                                                disabled: !awaiting,
                                                onchange: {
                                                    let index = row.index;
                                                    move |_| dispatch_intent.call(QuizIntent::Select(index))
                                                },
                                            }
                                            " {row.label}"
                                        }
                                    }
                                }
                            }
                            button {
                                id: "submit-answer",
                                r#type: "button",
                                disabled: !can_submit,
                                onclick: move |_| dispatch_intent.call(QuizIntent::Submit),
                                "Submit Answer"
                            }
                            div { id: "feedback",
                                if let Some(message) = feedback_message {
                                    p {
                                        strong { "{message}" }
                                    }
                                }
                                if let Some(explanation) = feedback_explanation {
                                    p {
                                        em { "{explanation}" }
                                    }
                                }
                            }
                        }
                    } else {
                        p { "No question available." }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
