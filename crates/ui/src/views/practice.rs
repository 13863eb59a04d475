use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{PracticeSetCardVm, map_practice_set_card};

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            Ok::<_, ViewError>(
                catalog
                    .sets()
                    .iter()
                    .map(map_practice_set_card)
                    .collect::<Vec<PracticeSetCardVm>>(),
            )
        }
    });

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page practice-page",
            header { class: "view-header",
                h2 { class: "view-title", "Practice Sets" }
                p { class: "view-subtitle", "Choose a practice set to begin" }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { class: "practice-empty", "No practice sets are available yet." }
                    }
                    div { class: "card-grid",
                        for card in cards {
                            div { key: "{card.id}", class: "set-card",
                                h3 { class: "set-card__title", "{card.title}" }
                                p { class: "set-card__description", "{card.description}" }
                                div { class: "set-card__stats",
                                    span { class: "set-card__stat", "{card.category}" }
                                    span { class: "set-card__stat", "{card.questions_label}" }
                                    span { class: "set-card__stat", "{card.time_estimate}" }
                                    span { class: "set-card__stat", "{card.difficulty}" }
                                }
                                button {
                                    class: "btn btn-primary set-card__start",
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
                },
            }
        }
    }
}
