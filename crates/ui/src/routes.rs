use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CreateSetModal, HomeView, LibraryView, PracticeView, SessionView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/practice", PracticeView)] Practice {},
        #[route("/practice/:set_id", SessionView)] Session { set_id: u64 },
        #[route("/library", LibraryView)] Library {},
}

#[component]
fn Layout() -> Element {
    let mut creating = use_signal(|| false);

    rsx! {
        div { class: "app",
            Navbar { on_create: move |()| creating.set(true) }
            main { class: "content",
                Outlet::<Route> {}
            }
            if creating() {
                CreateSetModal { on_close: move |()| creating.set(false) }
            }
        }
    }
}

#[component]
fn Navbar(on_create: EventHandler<()>) -> Element {
    rsx! {
        nav { class: "navbar",
            Link { class: "navbar-brand", to: Route::Home {}, "ScratchSSLT" }
            ul { class: "navbar-links",
                li { Link { to: Route::Practice {}, "Practice" } }
                li { Link { to: Route::Library {}, "Library" } }
            }
            button {
                class: "btn btn-primary navbar-create",
                r#type: "button",
                onclick: move |_| on_create.call(()),
                "Create"
            }
        }
    }
}
