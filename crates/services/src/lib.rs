#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod export_service;
pub mod exporter;
pub mod printable;
pub mod quiz_service;

pub use app_services::AppServices;
pub use error::{ExportError, QuizServiceError};
pub use export_service::{ExportService, PrintedDocument};
pub use exporter::{CommandExporter, DEFAULT_CONVERTER, DocumentExporter};
pub use printable::{PrintMode, render_printable};
pub use quiz_service::QuizService;
