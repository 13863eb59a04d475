use dioxus::prelude::*;
use dioxus_router::use_navigator;

use practice_core::model::{Difficulty, ProblemKind};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ALL_OPTION, LibraryCardVm, filter_from_inputs, map_library_card};

#[component]
pub fn LibraryView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();

    let mut search = use_signal(String::new);
    let mut kind = use_signal(|| ALL_OPTION.to_string());
    let mut difficulty = use_signal(|| ALL_OPTION.to_string());

    let filter = filter_from_inputs(&search(), &kind(), &difficulty());
    let cards = catalog
        .search_library(&filter)
        .into_iter()
        .map(|entry| map_library_card(entry, catalog.has_set(entry.id)))
        .collect::<Vec<LibraryCardVm>>();

    rsx! {
        div { class: "page library-page",
            header { class: "view-header",
                h2 { class: "view-title", "Question Library" }
                p { class: "view-subtitle", "Browse practice problems by type and difficulty." }
            }
            div { class: "library-filters",
                input {
                    class: "library-search",
                    r#type: "search",
                    placeholder: "Search problems...",
                    value: "{search}",
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                select {
                    class: "library-select",
                    value: "{kind}",
                    onchange: move |evt: FormEvent| kind.set(evt.value()),
                    option { value: ALL_OPTION, "All Types" }
                    for choice in ProblemKind::ALL {
                        option { key: "{choice}", value: choice.label(), "{choice}" }
                    }
                }
                select {
                    class: "library-select",
                    value: "{difficulty}",
                    onchange: move |evt: FormEvent| difficulty.set(evt.value()),
                    option { value: ALL_OPTION, "All Levels" }
                    for level in Difficulty::ALL {
                        option { key: "{level}", value: level.label(), "{level}" }
                    }
                }
            }
            if cards.is_empty() {
                p { class: "library-empty", "No problems match your filters." }
            }
            div { class: "card-grid",
                for card in cards {
                    div { key: "{card.id}", class: "library-card",
                        div { class: "library-card__header",
                            span { class: "badge", "{card.kind_label}" }
                            span { class: "{card.difficulty_class}", "{card.difficulty_label}" }
                        }
                        h3 { class: "library-card__title", "{card.title}" }
                        p { class: "library-card__description", "{card.description}" }
                        div { class: "library-card__stats",
                            span { "{card.questions_label}" }
                            span { "{card.time_estimate}" }
                        }
                        div { class: "library-card__tags",
                            for tag in card.tags.iter() {
                                span { key: "{tag}", class: "tag", "{tag}" }
                            }
                        }
                        div { class: "library-card__footer",
                            span { class: "library-card__author", "{card.author_label}" }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: !card.can_start,
                                title: if card.can_start { "" } else { "No practice set is available for this problem yet" },
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
