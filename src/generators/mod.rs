//! Generators module - turning candidate records into PDF documents.
//!
//! The pipeline is split in two stages:
//! - `CvTemplate` lays a record out as a self-contained two-page HTML document
//! - `ChromePdfEngine` prints that document to PDF with headless Chromium
//!
//! `CvGenerator` wires both together for the HTTP layer.

pub mod common;
pub mod cv;
pub mod engine;
pub mod layout;
pub mod template;
pub mod traits;
pub mod translation;
pub mod transliteration;

pub use cv::CvGenerator;
pub use engine::{ChromePdfEngine, EngineConfig};
pub use layout::{Branding, LayoutConfig};
pub use template::CvTemplate;
pub use traits::PdfRenderer;
pub use translation::{Table, TranslationTables};

use thiserror::Error;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to create browser profile directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write document: {0}")]
    Document(#[source] std::io::Error),
    #[error("invalid browser configuration: {0}")]
    BrowserConfig(String),
    #[error("failed to launch browser: {0}")]
    Launch(String),
    #[error("failed to load document: {0}")]
    Page(String),
    #[error("failed to print PDF: {0}")]
    Print(String),
    #[error("renderer produced an empty PDF")]
    EmptyPdf,
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
}
