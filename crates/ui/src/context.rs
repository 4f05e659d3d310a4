use std::path::{Path, PathBuf};
use std::sync::Arc;

use services::{ExportService, QuizService};

pub trait UiApp: Send + Sync {
    fn quiz_service(&self) -> Arc<QuizService>;
    fn export_service(&self) -> Arc<ExportService>;

    /// Directory where printed documents are saved.
    fn export_dir(&self) -> PathBuf;
}

#[derive(Clone)]
pub struct AppContext {
    export_dir: PathBuf,
    quiz_service: Arc<QuizService>,
    export_service: Arc<ExportService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            export_dir: app.export_dir(),
            quiz_service: app.quiz_service(),
            export_service: app.export_service(),
        }
    }

    #[must_use]
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    #[must_use]
    pub fn export_service(&self) -> Arc<ExportService> {
        Arc::clone(&self.export_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
