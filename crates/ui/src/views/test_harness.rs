use std::sync::Arc;

use conjuga_core::model::Tense;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{DictionaryGate, PracticeSettings, SessionLoopService, StaticSource};

use crate::context::{UiApp, build_app_context};
use crate::views::practice::PracticeTestHandles;
use crate::views::{ConjugationsView, PracticeView};

pub const HABLAR_ONLY: &str = r#"{ "regular": ["hablar"] }"#;

pub const WITH_SER: &str = r#"{
    "regular": ["hablar", "comer"],
    "irregular": {
        "ser": { "presente": ["soy", "eres", "es", "somos", "son"] }
    }
}"#;

#[derive(Clone)]
struct TestApp {
    session_loop: Arc<SessionLoopService>,
}

impl UiApp for TestApp {
    fn session_loop(&self) -> Arc<SessionLoopService> {
        Arc::clone(&self.session_loop)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Practice,
    Conjugations(&'static str),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    practice_handles: Option<PracticeTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    if let Some(handles) = props.practice_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Practice => rsx! { PracticeView {} },
        ViewKind::Conjugations(verb) => rsx! { ConjugationsView { verb: verb.to_string() } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub practice_handles: Option<PracticeTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let pending resources settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn dispatch(&mut self, intent: crate::vm::PracticeIntent) {
        let handles = self
            .practice_handles
            .clone()
            .expect("practice handles installed");
        let dispatch = handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, dictionary: &str) -> ViewHarness {
    let settings = PracticeSettings::new(3, [Tense::Presente], Some(7)).expect("settings");
    let gate = Arc::new(DictionaryGate::new(Arc::new(StaticSource::new(dictionary))));
    let session_loop = Arc::new(SessionLoopService::new(gate, settings));

    let practice_handles = match view {
        ViewKind::Practice => Some(PracticeTestHandles::default()),
        ViewKind::Conjugations(_) => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { session_loop }),
            view,
            practice_handles: practice_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        practice_handles,
    }
}
