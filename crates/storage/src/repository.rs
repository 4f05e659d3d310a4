use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quiz_core::model::QuizId;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::directory::DirectoryCatalog;

/// Errors surfaced by catalog adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("quiz {0} is not valid UTF-8 text")]
    InvalidEncoding(String),

    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One quiz source known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: QuizId,
    /// Display label: the source file's base name.
    pub label: String,
    pub modified_at: Option<DateTime<Utc>>,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(id: QuizId, modified_at: Option<DateTime<Utc>>) -> Self {
        Self {
            label: id.as_str().to_owned(),
            id,
            modified_at,
        }
    }
}

/// Read-only source of quiz files.
///
/// Implementations must re-read their backing store on every listing.
#[async_trait]
pub trait QuizCatalog: Send + Sync {
    /// List available quizzes ordered by label.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be enumerated.
    async fn list_entries(&self) -> Result<Vec<CatalogEntry>, StorageError>;

    /// Fetch the raw text of a quiz.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn read_source(&self, id: &QuizId) -> Result<String, StorageError>;
}

/// Simple in-memory catalog for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    sources: Arc<Mutex<BTreeMap<QuizId, String>>>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a quiz source.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the lock is poisoned.
    pub fn insert(&self, id: QuizId, text: impl Into<String>) -> Result<(), StorageError> {
        let mut guard = self
            .sources
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        guard.insert(id, text.into());
        Ok(())
    }
}

#[async_trait]
impl QuizCatalog for InMemoryCatalog {
    async fn list_entries(&self) -> Result<Vec<CatalogEntry>, StorageError> {
        let guard = self
            .sources
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(guard
            .keys()
            .map(|id| CatalogEntry::new(id.clone(), None))
            .collect())
    }

    async fn read_source(&self, id: &QuizId) -> Result<String, StorageError> {
        let guard = self
            .sources
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        guard.get(id).cloned().ok_or(StorageError::NotFound)
    }
}

/// Catalog behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn QuizCatalog>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            catalog: Arc::new(InMemoryCatalog::new()),
        }
    }

    /// Catalog over the `*.txt` files of `root`.
    #[must_use]
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        Self {
            catalog: Arc::new(DirectoryCatalog::new(root)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> QuizId {
        QuizId::new(raw).unwrap()
    }

    #[tokio::test]
    async fn in_memory_lists_sorted_by_label() {
        let catalog = InMemoryCatalog::new();
        catalog.insert(id("zebra"), "Z").unwrap();
        catalog.insert(id("apple"), "A").unwrap();

        let entries = catalog.list_entries().await.unwrap();
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["apple", "zebra"]);
        assert!(entries.iter().all(|e| e.modified_at.is_none()));
    }

    #[tokio::test]
    async fn in_memory_read_source_roundtrip_and_missing() {
        let catalog = InMemoryCatalog::new();
        catalog.insert(id("quiz"), "1. Q?\nA. a").unwrap();

        assert_eq!(catalog.read_source(&id("quiz")).await.unwrap(), "1. Q?\nA. a");
        let err = catalog.read_source(&id("other")).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn listing_reflects_later_inserts() {
        let storage = Storage::in_memory();
        assert!(storage.catalog.list_entries().await.unwrap().is_empty());

        let catalog = InMemoryCatalog::new();
        let storage = Storage {
            catalog: Arc::new(catalog.clone()),
        };
        catalog.insert(id("late"), "").unwrap();
        assert_eq!(storage.catalog.list_entries().await.unwrap().len(), 1);
    }
}
