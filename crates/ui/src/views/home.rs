use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::map_practice_set_card;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let cards = ctx
        .catalog()
        .sets()
        .iter()
        .map(map_practice_set_card)
        .collect::<Vec<_>>();

    let launch_set = use_hook(|| ctx.take_initial_set());
    use_effect(move || {
        if let Some(set_id) = launch_set {
            let _ = navigator.replace(Route::Session {
                set_id: set_id.value(),
            });
        }
    });

    rsx! {
        div { class: "page home-page",
            header { class: "home-hero",
                h1 { class: "home-title", "Welcome to ScratchSSLT" }
                p { class: "home-subtitle",
                    "Practice with our comprehensive collection of OSSLT questions and improve your literacy skills."
                }
            }
            div { class: "home-features",
                div { class: "feature-card",
                    h3 { "Practice Tests" }
                    p { "Access a variety of practice tests designed to help you succeed." }
                    Link { class: "btn btn-primary", to: Route::Practice {}, "Start Practice" }
                }
                div { class: "feature-card",
                    h3 { "Question Library" }
                    p { "Browse our extensive collection of practice questions." }
                    Link { class: "btn btn-secondary", to: Route::Library {}, "View Library" }
                }
            }
            section { class: "home-sets",
                h2 { "Practice Sets" }
                div { class: "card-grid",
                    for card in cards {
                        div { key: "{card.id}", class: "set-card set-card--compact",
                            h3 { class: "set-card__title", "{card.title}" }
                            p { class: "set-card__meta", "{card.kinds_label} · {card.time_estimate}" }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: {
                                    let set_id = card.id.value();
                                    move |_| {
                                        let _ = navigator.push(Route::Session { set_id });
                                    }
                                },
                                "Start Practice"
                            }
                        }
                    }
                }
            }
        }
    }
}
