use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ConjugationTableVm, load_table, load_verbs};

#[component]
pub fn ConjugationsView(verb: String) -> Element {
    let ctx = use_context::<AppContext>();
    let session_loop = ctx.session_loop();
    let initial = verb.trim().to_string();
    let mut query = use_signal(|| initial.clone());
    let mut selected = use_signal(|| (!initial.is_empty()).then_some(initial));

    let verbs_loop = session_loop.clone();
    let verbs = use_resource(move || {
        let session_loop = verbs_loop.clone();
        async move { load_verbs(&session_loop).await }
    });
    let table = use_resource(move || {
        let session_loop = session_loop.clone();
        let verb = selected();
        async move {
            match verb {
                Some(verb) => load_table(&session_loop, &verb).await.map(Some),
                None => Ok::<_, ViewError>(None),
            }
        }
    });

    let verbs_state = view_state_from_resource(verbs);
    let table_state = view_state_from_resource(table);

    rsx! {
        div { class: "page conjugations-page",
            header { class: "view-header",
                h2 { class: "view-title", "Conjugations" }
                p { class: "view-subtitle", "Look up every tense of a verb." }
            }
            div { class: "conjugations-search",
                input {
                    class: "conjugations-input",
                    r#type: "text",
                    placeholder: "hablar",
                    value: "{query()}",
                    oninput: move |evt| query.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.data.key() == Key::Enter {
                            selected.set(Some(query()));
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| selected.set(Some(query())),
                    "Conjugate"
                }
            }
            match table_state {
                ViewState::Idle | ViewState::Ready(None) => rsx! {},
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "conjugations-error", "{err.message()}" }
                },
                ViewState::Ready(Some(table)) => rsx! {
                    ConjugationTable { vm: table }
                },
            }
            match verbs_state {
                ViewState::Idle | ViewState::Loading => rsx! {},
                ViewState::Error(err) => rsx! {
                    p { class: "conjugations-error", "{err.message()}" }
                },
                ViewState::Ready(list) => rsx! {
                    div { class: "verb-list",
                        h3 { class: "verb-list-title", "Dictionary ({list.len()})" }
                        ul {
                            for verb in list {
                                li { key: "{verb}",
                                    button {
                                        class: "verb-list-item",
                                        r#type: "button",
                                        onclick: {
                                            let verb = verb.clone();
                                            move |_| {
                                                query.set(verb.clone());
                                                selected.set(Some(verb.clone()));
                                            }
                                        },
                                        "{verb}"
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ConjugationTable(vm: ConjugationTableVm) -> Element {
    let kind = if vm.irregular { "irregular" } else { "regular" };
    rsx! {
        div { class: "conjugation-table-wrap",
            h3 { class: "conjugation-verb",
                "{vm.verb} "
                span { class: "conjugation-kind conjugation-kind--{kind}", "{kind}" }
            }
            table { class: "conjugation-table",
                thead {
                    tr {
                        th {}
                        for pronoun in vm.pronouns.iter() {
                            th { key: "{pronoun}", "{pronoun}" }
                        }
                    }
                }
                tbody {
                    for row in vm.rows.iter() {
                        tr { key: "{row.tense}",
                            th { "{row.tense}" }
                            for (index, form) in row.forms.iter().enumerate() {
                                td { key: "{index}", "{form}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
