//! CV pipeline: record → HTML → PDF.

use log::info;
use std::sync::Arc;

use crate::cv::image::CvImages;
use crate::cv::models::CandidateRecord;

use super::common::cv_filename;
use super::template::CvTemplate;
use super::traits::PdfRenderer;
use super::{GeneratedDocument, GeneratorError};

/// Generator for the two-page candidate CV.
pub struct CvGenerator {
    template: CvTemplate,
    renderer: Arc<dyn PdfRenderer>,
}

impl CvGenerator {
    pub fn new(template: CvTemplate, renderer: Arc<dyn PdfRenderer>) -> Self {
        Self { template, renderer }
    }

    pub fn template(&self) -> &CvTemplate {
        &self.template
    }

    /// Render the record and print it. Either a complete PDF or an error.
    pub async fn generate(
        &self,
        record: &CandidateRecord,
        images: &CvImages,
    ) -> Result<GeneratedDocument, GeneratorError> {
        let html = self.template.render(record, images);
        let pdf = self.renderer.render_pdf(&html).await?;

        let filename = cv_filename(record.full_name.as_deref(), record.passport_number.as_deref());
        info!("Generated {} ({} bytes, layout {})", filename, pdf.len(), self.template.layout().name);

        Ok(GeneratedDocument { filename, pdf })
    }
}
