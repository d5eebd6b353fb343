use dioxus::prelude::ReadableExt;
use conjuga_core::model::Person;

use super::practice::PRACTICE_ROOT_ID;
use super::test_harness::{HABLAR_ONLY, ViewKind, WITH_SER, setup_view_harness};
use crate::vm::PracticeIntent;

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_exercise() {
    let mut harness = setup_view_harness(ViewKind::Practice, HABLAR_ONLY);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("hablar"), "missing verb in {html}");
    assert!(html.contains("presente"), "missing tense in {html}");
    assert!(html.contains("nosotros"), "missing pronoun in {html}");
    assert!(html.contains("1 / 3"), "missing progress in {html}");
    assert!(html.contains("Ctrl+0"), "missing reveal hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_root_is_focusable_for_shortcuts() {
    let mut harness = setup_view_harness(ViewKind::Practice, HABLAR_ONLY);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains(&format!(r#"id="{PRACTICE_ROOT_ID}""#)),
        "missing practice root in {html}"
    );
    assert!(html.contains(r#"tabindex="0""#), "root not focusable in {html}");
    assert!(html.contains("autofocus"), "root not autofocused in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_marks_typed_answers() {
    let mut harness = setup_view_harness(ViewKind::Practice, HABLAR_ONLY);
    harness.settle().await;

    harness.dispatch(PracticeIntent::Edit {
        person: Person::Yo,
        value: "Hablo".to_string(),
    });
    harness.dispatch(PracticeIntent::Edit {
        person: Person::Tu,
        value: "hablos".to_string(),
    });

    let html = harness.render();
    assert!(html.contains("answer-input--correct"), "missing correct mark in {html}");
    assert!(html.contains("answer-input--incorrect"), "missing incorrect mark in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_reveal_completes_the_exercise() {
    let mut harness = setup_view_harness(ViewKind::Practice, HABLAR_ONLY);
    harness.settle().await;

    harness.dispatch(PracticeIntent::Reveal);

    let handles = harness.practice_handles.clone().expect("handles");
    let vm = handles.vm();
    let complete = harness
        .dom
        .in_runtime(|| vm.read().as_ref().is_some_and(|vm| vm.frame().is_complete));
    assert!(complete);

    let html = harness.render();
    assert!(html.contains("hablamos"), "missing revealed form in {html}");
    assert!(!html.contains("Ctrl+0"), "hint should hide once solved in {html}");

    harness.dispatch(PracticeIntent::Next);
    let html = harness.render();
    assert!(html.contains("2 / 3"), "missing advanced progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_dictionary_error() {
    let mut harness = setup_view_harness(ViewKind::Practice, "{ not json");
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("could not be loaded"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_empty_dictionary() {
    let mut harness = setup_view_harness(ViewKind::Practice, r#"{ "regular": [] }"#);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("dictionary is empty"), "missing message in {html}");
    assert!(!html.contains("Retry"), "empty dictionary is not retryable: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn conjugations_view_smoke_renders_irregular_table() {
    let mut harness = setup_view_harness(ViewKind::Conjugations("ser"), WITH_SER);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("soy"), "missing override in {html}");
    assert!(html.contains("irregular"), "missing irregular badge in {html}");
    assert!(html.contains("condicional"), "missing tense row in {html}");
    assert!(html.contains("Dictionary (3)"), "missing verb list in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn conjugations_view_smoke_rejects_unsupported_verb() {
    let mut harness = setup_view_harness(ViewKind::Conjugations("reír"), WITH_SER);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("-ar, -er or -ir"), "missing error in {html}");
}
