use dioxus::document::eval;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{FieldVm, PracticeFrame, PracticeIntent, PracticeVm, start_practice};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Element that owns the keyboard shortcuts. Answer inputs sit inside it.
pub(super) const PRACTICE_ROOT_ID: &str = "practice-root";

/// Pulls focus back into the practice root unless it is already inside it.
fn focus_root_script() -> String {
    format!(
        r#"
        const root = document.getElementById("{PRACTICE_ROOT_ID}");
        if (root && !root.contains(document.activeElement)) {{ root.focus(); }}
        "#
    )
}

/// Shortcut bound to a key press: Ctrl+0 reveals, Alt+←/→ page.
fn key_intent(key: &Key, modifiers: Modifiers, reveal_enabled: bool) -> Option<PracticeIntent> {
    if modifiers.contains(Modifiers::CONTROL) {
        let is_zero = matches!(key, Key::Character(value) if value == "0");
        return (is_zero && reveal_enabled).then_some(PracticeIntent::Reveal);
    }
    if modifiers.contains(Modifiers::ALT) {
        return match key {
            Key::ArrowLeft => Some(PracticeIntent::Previous),
            Key::ArrowRight => Some(PracticeIntent::Next),
            _ => None,
        };
    }
    None
}

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let session_loop = ctx.session_loop();
    let reveal_enabled = ctx.reveal_enabled();
    let vm = use_signal(|| None::<PracticeVm>);

    let resource = use_resource(move || {
        let session_loop = session_loop.clone();
        let mut vm = vm;
        async move {
            let started = start_practice(&session_loop).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(resource);

    let dispatch_intent = use_callback(move |intent: PracticeIntent| {
        let mut vm = vm;
        if let Some(vm) = vm.write().as_mut() {
            vm.apply(intent);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PracticeTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if let Some(intent) = key_intent(&evt.data.key(), evt.data.modifiers(), reveal_enabled) {
            evt.prevent_default();
            dispatch_intent.call(intent);
        }
    });

    // Shortcuts only reach `on_key` while focus is inside the root.
    use_effect(move || {
        if vm.read().is_none() {
            return;
        }
        let _ = eval(&focus_root_script());
    });

    let frame = vm.read().as_ref().map(PracticeVm::frame);

    rsx! {
        div {
            class: "page practice-page",
            id: PRACTICE_ROOT_ID,
            tabindex: "0",
            autofocus: true,
            onkeydown: on_key,
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "practice-error",
                        p { "{err.message()}" }
                        if err.is_retryable() {
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| {
                                    let mut resource = resource;
                                    resource.restart();
                                },
                                "Retry"
                            }
                        }
                    }
                },
                ViewState::Ready(()) => match frame {
                    Some(frame) => rsx! {
                        ExerciseBoard {
                            frame,
                            reveal_enabled,
                            dispatch: dispatch_intent,
                            on_restart: move |()| {
                                let mut resource = resource;
                                resource.restart();
                            },
                        }
                    },
                    None => rsx! {
                        p { "Loading..." }
                    },
                },
            }
        }
    }
}

#[component]
fn ExerciseBoard(
    frame: PracticeFrame,
    reveal_enabled: bool,
    dispatch: Callback<PracticeIntent>,
    on_restart: Callback<()>,
) -> Element {
    let fields = frame.fields.iter().cloned().map(|field| {
        let key = field.pronoun;
        rsx! {
            AnswerField { key: "{key}", field, dispatch }
        }
    });

    rsx! {
        div { class: "practice-board",
            PageButton {
                label: "<",
                title: "Previous (Alt+←)",
                disabled: !frame.can_go_previous,
                on_press: move |()| dispatch.call(PracticeIntent::Previous),
            }
            div { class: "exercise",
                div { class: "exercise-heading",
                    div { class: "exercise-verb", "{frame.verb}" }
                    div { class: "exercise-tense", "{frame.tense}" }
                }
                div { class: "exercise-fields", {fields} }
                div { class: "exercise-footer",
                    span { class: "exercise-progress", "{frame.progress_label}" }
                    span { class: "exercise-completed", "{frame.completed_label}" }
                    if reveal_enabled && !frame.is_complete {
                        span { class: "exercise-hint", "Ctrl+0 reveals the answer" }
                    }
                }
                if frame.finished {
                    div { class: "exercise-finished",
                        p { "Sequence complete." }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| on_restart.call(()),
                            "New sequence"
                        }
                    }
                }
            }
            PageButton {
                label: ">",
                title: "Next (Alt+→)",
                disabled: !frame.can_go_next,
                on_press: move |()| dispatch.call(PracticeIntent::Next),
            }
        }
    }
}

#[component]
fn AnswerField(field: FieldVm, dispatch: Callback<PracticeIntent>) -> Element {
    let person = field.person;
    rsx! {
        div { class: "answer-field",
            input {
                class: "{field.class}",
                r#type: "text",
                id: "answer-{person.index()}",
                autocomplete: "off",
                spellcheck: "false",
                value: "{field.value}",
                disabled: field.locked,
                oninput: move |evt: FormEvent| {
                    dispatch.call(PracticeIntent::Edit {
                        person,
                        value: evt.value(),
                    });
                },
            }
            span { class: "answer-pronoun", "{field.pronoun}" }
        }
    }
}

#[component]
fn PageButton(
    label: &'static str,
    title: &'static str,
    disabled: bool,
    on_press: Callback<()>,
) -> Element {
    rsx! {
        div { class: "page-button",
            button {
                class: "page-button__control",
                r#type: "button",
                title: "{title}",
                disabled: disabled,
                onclick: move |_| on_press.call(()),
                "{label}"
            }
        }
    }
}


#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PracticeTestHandles {
    dispatch: Rc<RefCell<Option<Callback<PracticeIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<PracticeVm>>>>>,
}

#[cfg(test)]
impl PracticeTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<PracticeIntent>,
        vm: Signal<Option<PracticeVm>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<PracticeIntent> {
        (*self.dispatch.borrow()).expect("practice dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<PracticeVm>> {
        (*self.vm.borrow()).expect("practice vm registered")
    }
}
