use dioxus::prelude::ReadableExt;
use crate::vm::SessionIntent;

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_practice_sets() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome to ScratchSSLT"), "missing title in {html}");
    assert!(
        html.contains("Scientific Analysis - Climate Change"),
        "missing set in {html}"
    );
    assert!(html.contains("View Library"), "missing library link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_set_cards() {
    let mut harness = setup_view_harness(ViewKind::Practice);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Choose a practice set to begin"), "missing subtitle in {html}");
    assert!(
        html.contains("Reading Comprehension - Environmental Innovation"),
        "missing set title in {html}"
    );
    assert!(html.contains("3 questions"), "missing count in {html}");
    assert!(html.contains("Start Practice"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_walks_to_results() {
    let mut harness = setup_view_harness(ViewKind::Session(1));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
    assert!(html.contains("Reading Passage"), "missing passage in {html}");
    assert!(html.contains("Previous"), "missing previous in {html}");

    harness.dispatch(SessionIntent::SelectOption(1));
    harness.dispatch(SessionIntent::Next);
    let html = harness.render();
    assert!(html.contains("Question 2 of 3"), "missing progress in {html}");
    assert!(html.contains("Maximum: 100 words"), "missing word cap in {html}");
    assert!(html.contains("100 words remaining"), "missing budget in {html}");

    harness.dispatch(SessionIntent::EditText("students brought habits home".to_string()));
    let html = harness.render();
    assert!(html.contains("96 words remaining"), "budget not updated in {html}");

    harness.dispatch(SessionIntent::Next);
    let html = harness.render();
    assert!(html.contains("Finish"), "missing finish in {html}");

    harness.dispatch(SessionIntent::Next);
    let html = harness.render();
    assert!(html.contains("Practice Set Complete!"), "missing results in {html}");
    assert!(html.contains("100.0%"), "missing accuracy in {html}");
    assert!(html.contains("1 question attempted"), "missing attempted in {html}");
    assert!(html.contains("Try Again"), "missing try again in {html}");

    harness.dispatch(SessionIntent::TryAgain);
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "not reset in {html}");
    let vm = harness
        .session_handles
        .as_ref()
        .map(|handles| handles.vm())
        .expect("session handles");
    let answered = harness
        .dom
        .in_runtime(|| vm.read().as_ref().map(|vm| vm.session().answered_count()));
    assert_eq!(answered, Some(0));
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_shows_word_limit_notice() {
    let mut harness = setup_view_harness(ViewKind::Session(2));
    harness.rebuild();
    harness.drive_async().await;
    harness.dispatch(SessionIntent::Next);
    harness.dispatch(SessionIntent::EditText(vec!["word"; 76].join(" ")));
    let html = harness.render();
    assert!(html.contains("Answers are limited to 75 words"), "missing notice in {html}");
    assert!(html.contains("75 words remaining"), "budget changed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_unknown_set() {
    let mut harness = setup_view_harness(ViewKind::Session(99));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("That practice set could not be found."),
        "missing error in {html}"
    );
    assert!(html.contains("Back to Practice Sets"), "missing back button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_renders_matching_selects() {
    let mut harness = setup_view_harness(ViewKind::Session(3));
    harness.rebuild();
    harness.drive_async().await;
    harness.dispatch(SessionIntent::Next);
    let html = harness.render();
    assert!(html.contains("Choose a match"), "missing select in {html}");
    assert!(html.contains("Senior workshops"), "missing item in {html}");
    assert!(html.contains("Finish"), "missing finish in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn library_view_smoke_renders_filters_and_cards() {
    let mut harness = setup_view_harness(ViewKind::Library);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("All Types"), "missing type filter in {html}");
    assert!(html.contains("All Levels"), "missing level filter in {html}");
    assert!(html.contains("Understanding News Articles"), "missing entry in {html}");
    assert!(html.contains("By Ms. Thompson"), "missing author in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn create_set_modal_smoke_starts_on_details() {
    let mut harness = setup_view_harness(ViewKind::CreateSet);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Create New Practice Set"), "missing title in {html}");
    assert!(html.contains("Next: Add Questions"), "missing next in {html}");
}
