use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ConjugationsView, PracticeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", PracticeView)] Practice {},
        #[route("/conjugations?:verb", ConjugationsView)] Conjugations { verb: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { class: "sidebar-title", "Conjuga" }
            ul {
                li { Link { to: Route::Practice {}, "Practice" } }
                li {
                    Link {
                        to: Route::Conjugations { verb: String::new() },
                        "Conjugations"
                    }
                }
            }
        }
    }
}
