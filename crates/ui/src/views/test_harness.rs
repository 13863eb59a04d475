use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use practice_core::model::SetId;
use services::{AppServices, CatalogService, SessionLoopService};

use crate::context::{UiApp, build_app_context};
use crate::views::session::SessionTestHandles;
use crate::views::{CreateSetModal, HomeView, LibraryView, PracticeView, SessionView};

#[derive(Clone)]
pub struct TestApp {
    initial_set: Option<SetId>,
    services: AppServices,
}

impl TestApp {
    pub fn embedded(initial_set: Option<SetId>) -> Self {
        Self {
            initial_set,
            services: AppServices::embedded().expect("embedded catalog"),
        }
    }
}

impl UiApp for TestApp {
    fn initial_set(&self) -> Option<SetId> {
        self.initial_set
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn session_loop(&self) -> Arc<SessionLoopService> {
        self.services.session_loop()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Practice,
    Session(u64),
    Library,
    CreateSet,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    session_handles: Option<SessionTestHandles>,
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
    use_context_provider(|| props.view);
    if let Some(handles) = props.session_handles.clone() {
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
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Practice => rsx! { PracticeView {} },
        ViewKind::Session(set_id) => rsx! { SessionView { set_id } },
        ViewKind::Library => rsx! { LibraryView {} },
        ViewKind::CreateSet => rsx! { CreateSetModal { on_close: move |()| {} } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub session_handles: Option<SessionTestHandles>,
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

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Send an intent through the session view's dispatcher and re-render.
    pub fn dispatch(&mut self, intent: crate::vm::SessionIntent) {
        let handles = self
            .session_handles
            .clone()
            .expect("session handles for session views");
        self.dom.in_runtime(|| handles.dispatch().call(intent));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let session_handles = match view {
        ViewKind::Session(_) => Some(SessionTestHandles::default()),
        _ => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp::embedded(None)),
            view,
            session_handles: session_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        session_handles,
    }
}
