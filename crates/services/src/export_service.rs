use std::path::{Path, PathBuf};
use std::sync::Arc;

use quiz_core::model::QuizDocument;

use crate::error::ExportError;
use crate::exporter::DocumentExporter;
use crate::printable::{PrintMode, render_printable};

/// A converted document ready to be saved or offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintedDocument {
    pub file_name: &'static str,
    pub bytes: Vec<u8>,
}

impl PrintedDocument {
    /// Write the document into `dir` under its suggested name, creating the
    /// directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if the directory or file cannot be written.
    pub async fn save_in(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        self.save_as(&dir.join(self.file_name)).await
    }

    /// Write the document to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if the file cannot be written.
    pub async fn save_as(&self, path: &Path) -> Result<PathBuf, ExportError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, &self.bytes).await?;
        log::info!("wrote {} byte(s) to {}", self.bytes.len(), path.display());
        Ok(path.to_path_buf())
    }
}

/// Renders printable markup and hands it to the configured exporter.
#[derive(Clone)]
pub struct ExportService {
    exporter: Arc<dyn DocumentExporter>,
}

impl ExportService {
    #[must_use]
    pub fn new(exporter: Arc<dyn DocumentExporter>) -> Self {
        Self { exporter }
    }

    /// Produce the printable document for `doc` in the given mode.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the exporter fails.
    pub async fn export(
        &self,
        doc: &QuizDocument,
        mode: PrintMode,
    ) -> Result<PrintedDocument, ExportError> {
        let markup = render_printable(doc, mode);
        let bytes = self.exporter.convert(&markup).await?;
        Ok(PrintedDocument {
            file_name: mode.file_name(),
            bytes,
        })
    }
}
