use actix_multipart::Multipart;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::cv::multipart_parser::MultipartParser;
use crate::state::AppState;
use crate::ErrorResponse;

/// Multipart form accepted by `POST /api/generate-cv`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCvForm {
    /// JSON-encoded candidate record.
    #[allow(unused)]
    #[schema(value_type = Option<String>)]
    pub data: Option<String>,
    #[allow(unused)]
    #[schema(value_type = Option<String>, format = Binary)]
    pub profile_photo: Option<Vec<u8>>,
    #[allow(unused)]
    #[schema(value_type = Option<String>, format = Binary)]
    pub full_photo: Option<Vec<u8>>,
    #[allow(unused)]
    #[schema(value_type = Option<String>, format = Binary)]
    pub passport_scan: Option<Vec<u8>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "CV Service",
    responses(
        (status = 200, description = "Service is up", body = ServiceInfo)
    )
)]
pub async fn service_info() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        status: "ok".to_string(),
        service: "Haneen Al Sharq CV Generator".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[utoipa::path(
    context_path = "/api",
    tag = "CV Service",
    post,
    path = "/generate-cv",
    request_body(content = inline(GenerateCvForm), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Two-page CV as application/pdf"),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_cv(payload: Multipart, data: web::Data<AppState>) -> impl Responder {
    let request_id = Uuid::new_v4();
    info!("[{}] Executing generate_cv handler", request_id);

    let parsed = match MultipartParser::parse_cv_multipart(payload, data.max_upload_bytes, data.max_data_bytes)
        .await
    {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("[{}] PDF generation error: {}", request_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse::generation_failed(&e.to_string()));
        }
    };

    match data.generator.generate(&parsed.record, &parsed.images).await {
        Ok(document) => {
            info!("[{}] Sending {} ({} bytes)", request_id, document.filename, document.pdf.len());
            HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header(ContentDisposition {
                    disposition: DispositionType::Attachment,
                    parameters: vec![DispositionParam::Filename(document.filename)],
                })
                .body(document.pdf)
        }
        Err(e) => {
            error!("[{}] PDF generation error: {}", request_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse::generation_failed(&e.to_string()))
        }
    }
}

/// Configure CV routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(service_info)));
    cfg.service(
        web::scope("/api").service(web::resource("/generate-cv").route(web::post().to(generate_cv))),
    );
}
