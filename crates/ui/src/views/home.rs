use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::narration;
use crate::routes::Route;

const INTRO: &str = "Welcome to the Programming Language Quiz! \
    Pick a category, answer the questions, and track your progress.";

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let narration_settings = use_signal(|| ctx.narration());
    let categories = ctx.categories().to_vec();
    let narration_enabled = narration_settings.read().enabled();

    rsx! {
        div { class: "page home-page",
            h2 { "Home" }
            p { id: "intro-text", "{INTRO}" }
            div { class: "home-controls",
                button {
                    id: "read-intro-btn",
                    r#type: "button",
                    onclick: move |_| {
                        narration::narrate(INTRO, &narration_settings.peek());
                    },
                    "Read aloud"
                }
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
                    "Read questions aloud"
                }
            }
            h3 { "Quizzes" }
            ul { class: "category-list",
                for category in categories {
                    li { key: "{category}",
                        Link {
                            to: Route::Quiz { category: category.as_str().to_string() },
                            "{category.title()}"
                        }
                    }
                }
            }
        }
    }
}
