//! Headless Chromium rendering engine.
//!
//! Every call launches a private browser process with a throwaway profile
//! directory, prints one document and shuts the browser down again. Nothing is
//! pooled or reused between requests.
//!
//! The document is written into the profile directory and opened from there,
//! so its load is a real navigation and Chromium reports the `networkIdle`
//! lifecycle event for it (no connections for 500 ms).

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::{
    EventLifecycleEvent, PrintToPdfParams, SetLifecycleEventsEnabledParams,
};
use chromiumoxide::Page;
use futures::StreamExt;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;
use tokio::task::JoinHandle;

use super::traits::PdfRenderer;
use super::GeneratorError;

const MM_PER_INCH: f64 = 25.4;
const A4_WIDTH_IN: f64 = 210.0 / MM_PER_INCH;
const A4_HEIGHT_IN: f64 = 297.0 / MM_PER_INCH;

const CHROME_ARGS: [&str; 4] = [
    "--no-sandbox",
    "--disable-setuid-sandbox",
    "--disable-dev-shm-usage",
    "--font-render-hinting=none",
];

const DOCUMENT_FILE: &str = "cv.html";

/// Resolves once every web font used by the document is ready.
const FONTS_READY_JS: &str = "document.fonts.ready.then(() => true)";

/// Settings for the browser launched per document.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Explicit Chrome/Chromium binary; auto-detected when `None`.
    pub chrome_executable: Option<PathBuf>,
    /// How long to wait for the network to go idle before giving up.
    pub idle_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chrome_executable: None,
            idle_timeout: Duration::from_secs(30),
        }
    }
}

/// Tracks lifecycle events of the main frame until the navigation that
/// started last reaches `networkIdle`.
///
/// Events that belong to an earlier document (the initial `about:blank`) carry
/// a different loader id and are ignored.
#[derive(Debug, Default)]
pub struct NetworkIdleWatch {
    loader: Option<String>,
}

impl NetworkIdleWatch {
    /// Feed one event; returns `true` once the current document is idle.
    pub fn observe(&mut self, name: &str, loader_id: &str) -> bool {
        match name {
            "init" => {
                self.loader = Some(loader_id.to_string());
                false
            }
            "networkIdle" => self.loader.as_deref() == Some(loader_id),
            _ => false,
        }
    }
}

/// Print parameters: A4, backgrounds on, no margins.
pub fn a4_print_params() -> PrintToPdfParams {
    PrintToPdfParams {
        print_background: Some(true),
        prefer_css_page_size: Some(true),
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        margin_top: Some(0.0),
        margin_bottom: Some(0.0),
        margin_left: Some(0.0),
        margin_right: Some(0.0),
        ..Default::default()
    }
}

/// A running browser owned by a single render call.
///
/// `close` shuts it down gracefully; if the session is dropped without that
/// (panic, cancelled request) the event loop is aborted, the browser process is
/// killed by its own `Drop`, and the profile directory is removed.
struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    profile: TempDir,
}

impl BrowserSession {
    async fn launch(config: &EngineConfig) -> Result<Self, GeneratorError> {
        let profile = tempfile::Builder::new()
            .prefix("cv-chrome-")
            .tempdir()
            .map_err(GeneratorError::TempDir)?;

        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .args(CHROME_ARGS)
            .user_data_dir(profile.path());
        if let Some(path) = &config.chrome_executable {
            builder = builder.chrome_executable(path);
        }
        let browser_config = builder.build().map_err(GeneratorError::BrowserConfig)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| GeneratorError::Launch(e.to_string()))?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!("Browser handler error: {:?}", e);
                    break;
                }
            }
        });

        debug!("Browser launched with profile {}", profile.path().display());
        Ok(Self {
            browser,
            handler,
            profile,
        })
    }

    async fn print(&self, html: &str, idle_timeout: Duration) -> Result<Vec<u8>, GeneratorError> {
        let document = self.profile.path().join(DOCUMENT_FILE);
        tokio::fs::write(&document, html)
            .await
            .map_err(GeneratorError::Document)?;

        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| GeneratorError::Page(e.to_string()))?;

        page.execute(SetLifecycleEventsEnabledParams::new(true))
            .await
            .map_err(|e| GeneratorError::Page(e.to_string()))?;

        tokio::time::timeout(idle_timeout, load_until_idle(&page, &document))
            .await
            .map_err(|_| GeneratorError::Page(format!("network not idle after {:?}", idle_timeout)))??;

        page.evaluate(FONTS_READY_JS)
            .await
            .map_err(|e| GeneratorError::Page(e.to_string()))?;
        debug!("Document loaded ({} bytes of markup)", html.len());

        let pdf = page
            .pdf(a4_print_params())
            .await
            .map_err(|e| GeneratorError::Print(e.to_string()))?;

        if let Err(e) = page.close().await {
            debug!("Failed to close page: {}", e);
        }
        Ok(pdf)
    }

    async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }
    }
}

/// Navigate to the document file and wait for its `networkIdle` event.
async fn load_until_idle(page: &Page, document: &Path) -> Result<(), GeneratorError> {
    let mut lifecycle = page
        .event_listener::<EventLifecycleEvent>()
        .await
        .map_err(|e| GeneratorError::Page(e.to_string()))?;
    let main_frame = page
        .mainframe()
        .await
        .map_err(|e| GeneratorError::Page(e.to_string()))?;

    page.goto(format!("file://{}", document.display()))
        .await
        .map_err(|e| GeneratorError::Page(e.to_string()))?;

    let mut watch = NetworkIdleWatch::default();
    while let Some(event) = lifecycle.next().await {
        if main_frame.as_ref().is_some_and(|frame| *frame != event.frame_id) {
            continue;
        }
        if watch.observe(&event.name, event.loader_id.inner()) {
            return Ok(());
        }
    }
    Err(GeneratorError::Page("page closed before the network went idle".to_string()))
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
    }
}

/// `PdfRenderer` backed by a fresh headless Chromium per document.
#[derive(Debug, Clone, Default)]
pub struct ChromePdfEngine {
    config: EngineConfig,
}

impl ChromePdfEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl PdfRenderer for ChromePdfEngine {
    async fn render_pdf(&self, html: &str) -> Result<Vec<u8>, GeneratorError> {
        let session = BrowserSession::launch(&self.config).await?;
        let result = session.print(html, self.config.idle_timeout).await;
        session.close().await;

        let pdf = result?;
        if pdf.is_empty() {
            return Err(GeneratorError::EmptyPdf);
        }
        Ok(pdf)
    }
}
