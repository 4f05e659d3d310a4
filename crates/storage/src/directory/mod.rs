use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quiz_core::model::QuizId;

use crate::repository::{CatalogEntry, QuizCatalog, StorageError};

const QUIZ_EXTENSION: &str = "txt";

/// Quiz catalog over the `*.txt` files of one directory. Nothing is cached:
/// each listing scans the directory again.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &QuizId) -> PathBuf {
        self.root.join(format!("{}.{QUIZ_EXTENSION}", id.as_str()))
    }
}

fn is_quiz_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == QUIZ_EXTENSION)
}

#[async_trait]
impl QuizCatalog for DirectoryCatalog {
    async fn list_entries(&self) -> Result<Vec<CatalogEntry>, StorageError> {
        let mut dir = match tokio::fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::warn!("quiz directory {} does not exist", self.root.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut entries = Vec::new();
        while let Some(item) = dir.next_entry().await? {
            let path = item.path();
            if !is_quiz_file(&path) {
                continue;
            }
            let Some(id) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| QuizId::new(stem).ok())
            else {
                log::warn!("skipping quiz file with unusable name: {}", path.display());
                continue;
            };
            let metadata = match item.metadata().await {
                Ok(metadata) if metadata.is_file() => metadata,
                Ok(_) => continue,
                Err(err) => {
                    log::warn!("skipping {}: {err}", path.display());
                    continue;
                }
            };
            let modified_at = metadata.modified().ok().map(DateTime::<Utc>::from);
            entries.push(CatalogEntry::new(id, modified_at));
        }

        entries.sort_by(|left, right| left.label.cmp(&right.label));
        log::debug!(
            "found {} quiz file(s) in {}",
            entries.len(),
            self.root.display()
        );
        Ok(entries)
    }

    async fn read_source(&self, id: &QuizId) -> Result<String, StorageError> {
        let path = self.path_for(id);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(StorageError::NotFound),
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                Err(StorageError::InvalidEncoding(id.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_quiz_extension() {
        assert!(is_quiz_file(Path::new("questions/a.txt")));
        assert!(!is_quiz_file(Path::new("questions/B.TXT")));
        assert!(!is_quiz_file(Path::new("questions/notes.md")));
        assert!(!is_quiz_file(Path::new("questions/txt")));
    }

    #[test]
    fn catalog_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DirectoryCatalog>();
    }
}
