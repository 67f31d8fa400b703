#![allow(dead_code)]

use haneen_cv_server::cv::image::ImageAsset;
use haneen_cv_server::generators::{
    Branding, CvTemplate, GeneratorError, LayoutConfig, PdfRenderer, TranslationTables,
};
use haneen_cv_server::AppState;
use std::sync::{Arc, Mutex};

pub const BOUNDARY: &str = "----cvtestboundary7MA4YWxkTrZu0gW";
pub const FAKE_PDF: &[u8] = b"%PDF-1.7\n%mock\n%%EOF\n";

/// Mock implementation of PdfRenderer for testing
pub struct MockPdfRenderer {
    last_html: Mutex<Option<String>>,
    fail_with: Option<String>,
}

impl MockPdfRenderer {
    pub fn new() -> Self {
        Self {
            last_html: Mutex::new(None),
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            last_html: Mutex::new(None),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn last_html(&self) -> Option<String> {
        self.last_html.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PdfRenderer for MockPdfRenderer {
    async fn render_pdf(&self, html: &str) -> Result<Vec<u8>, GeneratorError> {
        *self.last_html.lock().unwrap() = Some(html.to_string());
        match &self.fail_with {
            Some(message) => Err(GeneratorError::Launch(message.clone())),
            None => Ok(FAKE_PDF.to_vec()),
        }
    }
}

pub fn test_logo() -> ImageAsset {
    ImageAsset::accept("image/png", b"logo-bytes".to_vec(), 1024).unwrap()
}

pub fn test_template(layout: LayoutConfig) -> CvTemplate {
    CvTemplate::new(&test_logo(), layout, Branding::default(), TranslationTables::builtin())
}

pub const MAX_DATA: usize = 256;

pub fn test_app_state(renderer: Arc<MockPdfRenderer>, max_upload_bytes: usize) -> AppState {
    AppState::new_with_renderer(
        test_template(LayoutConfig::standard()),
        renderer,
        max_upload_bytes,
        MAX_DATA,
    )
}

/// One part of a hand-built multipart body.
pub struct Part<'a> {
    pub name: &'a str,
    pub filename: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: Vec<u8>,
}

impl<'a> Part<'a> {
    pub fn text(name: &'a str, value: &str) -> Self {
        Self {
            name,
            filename: None,
            content_type: None,
            data: value.as_bytes().to_vec(),
        }
    }

    pub fn file(name: &'a str, filename: &'a str, content_type: &'a str, data: Vec<u8>) -> Self {
        Self {
            name,
            filename: Some(filename),
            content_type: Some(content_type),
            data,
        }
    }
}

pub fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.name);
        if let Some(filename) = part.filename {
            disposition.push_str(&format!("; filename=\"{filename}\""));
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

/// `src` attribute of the first `<img>` with the given class.
pub fn img_src(html: &str, class: &str) -> Option<String> {
    let marker = format!("<img class=\"{class}\" src=\"");
    let start = html.find(&marker)? + marker.len();
    let end = html[start..].find('"')? + start;
    Some(html[start..end].to_string())
}
