use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::QuizId;
use services::{DocumentExporter, ExportError, ExportService, QuizService};
use storage::repository::{InMemoryCatalog, QuizCatalog};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, QuizView};

struct EchoExporter;

#[async_trait]
impl DocumentExporter for EchoExporter {
    async fn convert(&self, markup: &str) -> Result<Vec<u8>, ExportError> {
        Ok(markup.as_bytes().to_vec())
    }
}

#[derive(Clone)]
struct TestApp {
    quiz_service: Arc<QuizService>,
    export_service: Arc<ExportService>,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn export_service(&self) -> Arc<ExportService> {
        Arc::clone(&self.export_service)
    }

    fn export_dir(&self) -> PathBuf {
        std::env::temp_dir().join("quiz-ui-tests")
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
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
        ViewKind::Quiz(quiz_id) => rsx! { QuizView { quiz_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
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

    /// Rebuild, then let pending resources settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
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

pub fn setup_view_harness(view: ViewKind, quizzes: &[(&str, &str)]) -> ViewHarness {
    let catalog = InMemoryCatalog::new();
    for (id, text) in quizzes {
        catalog
            .insert(QuizId::new(*id).expect("valid quiz id"), *text)
            .expect("insert quiz");
    }
    setup_view_harness_with_catalog(view, Arc::new(catalog))
}

pub fn setup_view_harness_with_catalog(
    view: ViewKind,
    catalog: Arc<dyn QuizCatalog>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        quiz_service: Arc::new(QuizService::new(catalog)),
        export_service: Arc::new(ExportService::new(Arc::new(EchoExporter))),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
