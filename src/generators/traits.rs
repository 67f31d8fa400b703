//! Traits for the rendering stage of the pipeline.

use async_trait::async_trait;

use super::GeneratorError;

/// Turns a complete HTML document into PDF bytes.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render_pdf(&self, html: &str) -> Result<Vec<u8>, GeneratorError>;
}
