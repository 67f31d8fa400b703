//! Shared, read-only application state.

use anyhow::Context;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::cv::image::ImageAsset;
use crate::generators::{Branding, ChromePdfEngine, CvGenerator, CvTemplate, PdfRenderer, TranslationTables};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<CvGenerator>,
    pub max_upload_bytes: usize,
    pub max_data_bytes: usize,
}

impl AppState {
    /// Load the logo and build the Chromium-backed generator.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let logo = ImageAsset::from_file(&config.logo_path)
            .with_context(|| format!("failed to load logo from {}", config.logo_path.display()))?;
        log::info!(
            "Loaded logo {} ({} bytes)",
            config.logo_path.display(),
            logo.data.len()
        );

        let template = CvTemplate::new(
            &logo,
            config.layout.clone(),
            Branding::default(),
            TranslationTables::builtin(),
        );
        let renderer: Arc<dyn PdfRenderer> = Arc::new(ChromePdfEngine::new(config.engine.clone()));

        Ok(Self::new_with_renderer(
            template,
            renderer,
            config.max_upload_bytes,
            config.max_data_bytes,
        ))
    }

    pub fn new_with_renderer(
        template: CvTemplate,
        renderer: Arc<dyn PdfRenderer>,
        max_upload_bytes: usize,
        max_data_bytes: usize,
    ) -> Self {
        Self {
            generator: Arc::new(CvGenerator::new(template, renderer)),
            max_upload_bytes,
            max_data_bytes,
        }
    }
}
