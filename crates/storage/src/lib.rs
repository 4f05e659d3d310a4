#![forbid(unsafe_code)]

pub mod directory;
pub mod repository;

pub use directory::DirectoryCatalog;
pub use repository::{CatalogEntry, InMemoryCatalog, QuizCatalog, Storage, StorageError};
