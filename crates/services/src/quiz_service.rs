use std::sync::Arc;

use quiz_core::model::{AnswerSheet, QuizDocument, QuizId, SubmissionResult};
use quiz_core::{grade, parse_quiz};
use storage::repository::{CatalogEntry, QuizCatalog, StorageError};

use crate::error::QuizServiceError;

/// Orchestrates catalog listing, quiz loading and grading.
#[derive(Clone)]
pub struct QuizService {
    catalog: Arc<dyn QuizCatalog>,
}

impl QuizService {
    #[must_use]
    pub fn new(catalog: Arc<dyn QuizCatalog>) -> Self {
        Self { catalog }
    }

    /// List the quizzes currently in the catalog. An empty list is a normal
    /// outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Storage` if the catalog cannot be read.
    pub async fn list_quizzes(&self) -> Result<Vec<CatalogEntry>, QuizServiceError> {
        let entries = self.catalog.list_entries().await?;
        Ok(entries)
    }

    /// Read and parse one quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::NotFound` if the catalog has no such quiz.
    /// Returns `QuizServiceError::Storage` if reading fails.
    pub async fn load_quiz(&self, id: &QuizId) -> Result<QuizDocument, QuizServiceError> {
        let text = match self.catalog.read_source(id).await {
            Ok(text) => text,
            Err(StorageError::NotFound) => return Err(QuizServiceError::NotFound(id.to_string())),
            Err(err) => return Err(err.into()),
        };

        let doc = parse_quiz(&text);
        log::info!(
            "loaded quiz {id}: {} question(s), {} score band(s)",
            doc.questions().len(),
            doc.score_bands().len()
        );
        Ok(doc)
    }

    /// Like [`QuizService::load_quiz`] for a raw id coming from a route or
    /// the command line.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::InvalidId` if `raw_id` is not a usable id,
    /// otherwise the errors of `load_quiz`.
    pub async fn load_quiz_by_name(&self, raw_id: &str) -> Result<QuizDocument, QuizServiceError> {
        let id = QuizId::new(raw_id)?;
        self.load_quiz(&id).await
    }

    /// Grade a submission. Pure; each call stands alone.
    #[must_use]
    pub fn grade(&self, doc: &QuizDocument, answers: &AnswerSheet) -> SubmissionResult {
        let result = grade(doc, answers);
        log::debug!(
            "graded {} answer(s): {}/{}",
            answers.len(),
            result.score,
            result.max_score
        );
        result
    }
}
