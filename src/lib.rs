use actix_cors::Cors;
use actix_web::middleware::{Compress, Logger};
use actix_web::{web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod cv;
pub mod generators;
pub mod state;

pub use crate::config::AppConfig;
pub use crate::state::AppState;

/// Body of every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error: &str, details: &str) -> Self {
        Self {
            error: error.to_string(),
            details: details.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn generation_failed(details: &str) -> Self {
        Self::new("Failed to generate PDF", details)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(crate::cv::handlers::service_info, crate::cv::handlers::generate_cv),
    components(schemas(
        crate::cv::handlers::GenerateCvForm,
        crate::cv::handlers::ServiceInfo,
        crate::cv::models::CandidateRecord,
        crate::cv::models::ExperienceEntry,
        ErrorResponse,
    )),
    tags((name = "CV Service", description = "Candidate CV PDF generation."))
)]
pub struct ApiDoc;

pub async fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let app_state = web::Data::new(AppState::from_config(&config)?);

    let prometheus = PrometheusMetricsBuilder::new("haneen_cv_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| anyhow::anyhow!("failed to create Prometheus metrics middleware: {e}"))?;

    log::info!(
        "Starting CV server at http://{}:{} (layout {})",
        config.host,
        config.port,
        config.layout.name
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(Logger::default())
            .wrap(prometheus.clone())
            .wrap(Cors::permissive())
            .app_data(app_state.clone())
            .configure(cv::handlers::config)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
