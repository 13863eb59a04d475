use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CreateStep {
    Details,
    Questions,
}

/// Two-step "create practice set" dialog. Nothing entered here is stored.
#[component]
pub fn CreateSetModal(on_close: EventHandler<()>) -> Element {
    let mut step = use_signal(|| CreateStep::Details);

    rsx! {
        div { class: "modal-overlay",
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "create-set-title",
                header { class: "modal__header",
                    h2 { id: "create-set-title", "Create New Practice Set" }
                    button {
                        class: "modal__close",
                        r#type: "button",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                match step() {
                    CreateStep::Details => rsx! {
                        div { class: "modal__body",
                            label { r#for: "create-set-name", "Title" }
                            input { id: "create-set-name", placeholder: "Enter practice set title" }
                            label { r#for: "create-set-description", "Description" }
                            textarea {
                                id: "create-set-description",
                                placeholder: "Describe what students will practice",
                            }
                            label { "Reading Material" }
                            div { class: "modal__dropzone", p { "Upload PDF or paste text content" } }
                        }
                        footer { class: "modal__footer",
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| step.set(CreateStep::Questions),
                                "Next: Add Questions"
                            }
                        }
                    },
                    CreateStep::Questions => rsx! {
                        div { class: "modal__body",
                            h3 { "Questions" }
                            div { class: "modal__question-types",
                                button { class: "btn btn-secondary", r#type: "button", "+ Add Multiple Choice" }
                                button { class: "btn btn-secondary", r#type: "button", "+ Add Short Answer" }
                                button { class: "btn btn-secondary", r#type: "button", "+ Add Paragraph" }
                                button { class: "btn btn-secondary", r#type: "button", "+ Add Matching" }
                            }
                        }
                        footer { class: "modal__footer",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| step.set(CreateStep::Details),
                                "Back"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| on_close.call(()),
                                "Create Practice Set"
                            }
                        }
                    },
                }
            }
        }
    }
}
