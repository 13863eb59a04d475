use dioxus::prelude::*;
use dioxus_router::use_navigator;

use practice_core::Rejection;
use practice_core::model::SetId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    AnswerControlVm, QuestionVm, ScoreSummaryVm, SessionIntent, SessionOutcome, SessionVm,
    start_session,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

fn rejection_notice(rejection: Rejection) -> Option<String> {
    match rejection {
        Rejection::WordLimit { max, .. } => {
            Some(format!("Answers are limited to {max} words. Your last edit was not saved."))
        }
        Rejection::NotCurrent { .. }
        | Rejection::KindMismatch
        | Rejection::UnknownPairing
        | Rejection::Completed => None,
    }
}

#[component]
pub fn SessionView(set_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let set_id = SetId::new(set_id);
    let session_loop = ctx.session_loop();

    let vm = use_signal(|| None::<SessionVm>);
    let notice = use_signal(|| None::<String>);

    let session_loop_for_resource = session_loop.clone();
    let resource = use_resource(move || {
        let session_loop = session_loop_for_resource.clone();
        let mut vm = vm;
        let mut notice = notice;
        async move {
            notice.set(None);
            let started = start_session(&session_loop, set_id)?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch_intent = {
        let session_loop = session_loop.clone();
        use_callback(move |intent: SessionIntent| {
            let mut vm = vm;
            let mut notice = notice;
            let outcome = {
                let mut guard = vm.write();
                let Some(current) = guard.as_mut() else {
                    return;
                };
                current.apply(&session_loop, intent)
            };
            match outcome {
                SessionOutcome::Rejected(rejection) => notice.set(rejection_notice(rejection)),
                SessionOutcome::Continue | SessionOutcome::Completed(_) => notice.set(None),
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SessionTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let snapshot = vm.read().clone();

    rsx! {
        div { class: "page session-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "session-error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Practice {});
                        },
                        "Back to Practice Sets"
                    }
                },
                ViewState::Ready(()) => match snapshot {
                    None => rsx! {
                        p { "Loading..." }
                    },
                    Some(current) => match current.summary() {
                        Some(summary) => rsx! {
                            ResultsPanel {
                                title: current.title().to_string(),
                                summary,
                                on_intent: dispatch_intent,
                            }
                        },
                        None => rsx! {
                            QuestionPanel {
                                title: current.title().to_string(),
                                passage: current.passage().to_string(),
                                progress_label: current.progress().label(),
                                progress_percent: current.progress().percent,
                                question: current.question(),
                                can_go_back: current.can_go_back(),
                                next_label: current.next_label(),
                                notice: notice(),
                                on_intent: dispatch_intent,
                            }
                        },
                    },
                },
            }
        }
    }
}

#[component]
#[allow(clippy::too_many_arguments)]
fn QuestionPanel(
    title: String,
    passage: String,
    progress_label: String,
    progress_percent: u32,
    question: QuestionVm,
    can_go_back: bool,
    next_label: &'static str,
    notice: Option<String>,
    on_intent: EventHandler<SessionIntent>,
) -> Element {
    let navigator = use_navigator();
    let paragraphs = passage
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();

    rsx! {
        div { class: "session-toolbar",
            button {
                class: "btn btn-secondary",
                id: "session-back",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Practice {});
                },
                "← Back to Practice Sets"
            }
            div { class: "progress",
                div { class: "progress__bar", style: "width: {progress_percent}%" }
            }
            p { class: "session-progress", "{progress_label}" }
        }
        div { class: "session-layout",
            section { class: "session-passage",
                h2 { "{title}" }
                h3 { "Reading Passage" }
                for (i, paragraph) in paragraphs.into_iter().enumerate() {
                    p { key: "{i}", "{paragraph}" }
                }
            }
            section { class: "session-question",
                p { class: "session-question__kind", "{question.kind_label}" }
                h3 { class: "session-question__prompt", "{question.prompt}" }
                AnswerControl { index: question.index, control: question.control.clone(), on_intent }
                if let Some(text) = notice {
                    p { class: "session-notice", role: "status", "{text}" }
                }
                div { class: "session-nav",
                    button {
                        class: "btn btn-secondary",
                        id: "session-previous",
                        r#type: "button",
                        disabled: !can_go_back,
                        onclick: move |_| on_intent.call(SessionIntent::Previous),
                        "Previous"
                    }
                    button {
                        class: "btn btn-primary",
                        id: "session-next",
                        r#type: "button",
                        onclick: move |_| on_intent.call(SessionIntent::Next),
                        "{next_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn AnswerControl(
    index: usize,
    control: AnswerControlVm,
    on_intent: EventHandler<SessionIntent>,
) -> Element {
    match control {
        AnswerControlVm::Choices { options } => rsx! {
            div { class: "choices", role: "radiogroup",
                for option in options {
                    label { key: "{option.index}", class: "choice",
                        input {
                            r#type: "radio",
                            name: "question-{index}",
                            value: "{option.index}",
                            checked: option.selected,
                            onchange: {
                                let picked = option.index;
                                move |_| on_intent.call(SessionIntent::SelectOption(picked))
                            },
                        }
                        span { "{option.label}" }
                    }
                }
            }
        },
        AnswerControlVm::ShortText {
            value,
            max_label,
            remaining_label,
        } => rsx! {
            textarea {
                class: "answer-text answer-text--short",
                rows: "4",
                placeholder: "Type your answer here...",
                value: "{value}",
                oninput: move |evt: FormEvent| on_intent.call(SessionIntent::EditText(evt.value())),
            }
            div { class: "word-budget",
                span { "{max_label}" }
                span { "{remaining_label}" }
            }
        },
        AnswerControlVm::LongText { value, length_hint } => rsx! {
            textarea {
                class: "answer-text answer-text--long",
                rows: "8",
                placeholder: "Write your paragraph here...",
                value: "{value}",
                oninput: move |evt: FormEvent| on_intent.call(SessionIntent::EditText(evt.value())),
            }
            if let Some(hint) = length_hint {
                p { class: "word-budget", "{hint}" }
            }
        },
        AnswerControlVm::Matching { rows, targets } => rsx! {
            div { class: "matching",
                for row in rows {
                    div { key: "{row.item}", class: "matching-row",
                        span { class: "matching-row__item", "{row.item}" }
                        select {
                            class: "matching-row__select",
                            value: row.selected.clone().unwrap_or_default(),
                            onchange: {
                                let item = row.item.clone();
                                move |evt: FormEvent| {
                                    let target = evt.value();
                                    let intent = if target.is_empty() {
                                        SessionIntent::ClearMatch(item.clone())
                                    } else {
                                        SessionIntent::PlaceMatch {
                                            item: item.clone(),
                                            target,
                                        }
                                    };
                                    on_intent.call(intent);
                                }
                            },
                            option { value: "", selected: row.selected.is_none(), "Choose a match" }
                            for target in targets.iter() {
                                option {
                                    key: "{target}",
                                    value: "{target}",
                                    selected: row.selected.as_deref() == Some(target.as_str()),
                                    "{target}"
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn ResultsPanel(
    title: String,
    summary: ScoreSummaryVm,
    on_intent: EventHandler<SessionIntent>,
) -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "results",
            h2 { class: "results__title", "Practice Set Complete!" }
            p { class: "results__subtitle", "{title}" }
            div { class: "results__section",
                h3 { "Multiple Choice Questions" }
                div { class: "results__row",
                    span { "Accuracy" }
                    span { class: "results__value", "{summary.accuracy_label}" }
                }
                div { class: "progress",
                    div { class: "progress__bar", style: "width: {summary.accuracy_percent}%" }
                }
                p { class: "results__detail", "{summary.multiple_choice_detail}" }
            }
            div { class: "results__section",
                h3 { "Short Answers" }
                p { "{summary.short_answer_label}" }
            }
            div { class: "results__section",
                h3 { "Paragraph Responses" }
                p { "{summary.paragraph_label}" }
            }
            if let Some(label) = summary.matching_label.clone() {
                div { class: "results__section",
                    h3 { "Matching" }
                    p { "{label}" }
                }
            }
            p { class: "results__detail", "{summary.total_label}" }
            div { class: "results__actions",
                button {
                    class: "btn btn-secondary",
                    id: "results-back",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Practice {});
                    },
                    "Back to Practice Sets"
                }
                button {
                    class: "btn btn-primary",
                    id: "results-try-again",
                    r#type: "button",
                    onclick: move |_| on_intent.call(SessionIntent::TryAgain),
                    "Try Again"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SessionTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SessionIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<SessionVm>>>>>,
}

#[cfg(test)]
impl SessionTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<SessionIntent>,
        vm: Signal<Option<SessionVm>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<SessionIntent> {
        (*self.dispatch.borrow()).expect("session dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<SessionVm>> {
        (*self.vm.borrow()).expect("session vm registered")
    }
}
