use std::path::{Path, PathBuf};
use std::sync::Arc;

use storage::repository::Storage;

use crate::export_service::ExportService;
use crate::exporter::{CommandExporter, DocumentExporter};
use crate::quiz_service::QuizService;

/// Assembles app-facing services over one quiz directory.
#[derive(Clone)]
pub struct AppServices {
    quiz_dir: PathBuf,
    export_dir: PathBuf,
    quizzes: Arc<QuizService>,
    exports: Arc<ExportService>,
}

impl AppServices {
    /// Services backed by the `*.txt` files of `quiz_dir`, exporting through
    /// the external `converter` program.
    #[must_use]
    pub fn from_directory(
        quiz_dir: impl Into<PathBuf>,
        export_dir: impl Into<PathBuf>,
        converter: &str,
    ) -> Self {
        let quiz_dir = quiz_dir.into();
        let storage = Storage::directory(quiz_dir.clone());
        Self::new(
            quiz_dir,
            export_dir.into(),
            storage,
            Arc::new(CommandExporter::new(converter)),
        )
    }

    /// Services over any catalog and exporter.
    #[must_use]
    pub fn new(
        quiz_dir: PathBuf,
        export_dir: PathBuf,
        storage: Storage,
        exporter: Arc<dyn DocumentExporter>,
    ) -> Self {
        Self {
            quiz_dir,
            export_dir,
            quizzes: Arc::new(QuizService::new(Arc::clone(&storage.catalog))),
            exports: Arc::new(ExportService::new(exporter)),
        }
    }

    #[must_use]
    pub fn quiz_dir(&self) -> &Path {
        &self.quiz_dir
    }

    #[must_use]
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }

    #[must_use]
    pub fn exports(&self) -> Arc<ExportService> {
        Arc::clone(&self.exports)
    }
}
