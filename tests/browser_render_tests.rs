//! Renders through a real headless Chromium.
//!
//! Needs Chrome/Chromium on the machine: `cargo test -- --ignored`.
//! `CHROME_EXECUTABLE` selects a specific binary.

mod common;

use common::test_template;
use haneen_cv_server::cv::image::CvImages;
use haneen_cv_server::cv::models::CandidateRecord;
use haneen_cv_server::generators::{ChromePdfEngine, EngineConfig, LayoutConfig, PdfRenderer};
use regex::bytes::Regex;
use std::path::PathBuf;
use std::time::Duration;

#[tokio::test]
#[ignore]
async fn test_chrome_renders_two_page_pdf() {
    let engine = ChromePdfEngine::new(EngineConfig {
        chrome_executable: std::env::var("CHROME_EXECUTABLE").ok().map(PathBuf::from),
        idle_timeout: Duration::from_secs(20),
    });

    let record: CandidateRecord =
        serde_json::from_str(r#"{"fullName": "Ahmed Ali", "passportNumber": "P1234567"}"#).unwrap();
    let html = test_template(LayoutConfig::standard()).render(&record, &CvImages::default());

    let pdf = engine.render_pdf(&html).await.expect("chrome should render");
    assert!(pdf.starts_with(b"%PDF"));

    let page_objects = Regex::new(r"/Type\s*/Page[^s]").unwrap();
    assert_eq!(page_objects.find_iter(&pdf).count(), 2);
}
