mod common;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use common::{
    img_src, multipart_body, multipart_content_type, test_app_state, MockPdfRenderer, Part, FAKE_PDF, MAX_DATA,
};
use haneen_cv_server::cv::handlers;
use haneen_cv_server::cv::image::PLACEHOLDER_DATA_URI;
use haneen_cv_server::ErrorResponse;
use std::sync::Arc;

const MAX_UPLOAD: usize = 64;

#[cfg(test)]
mod api_integration_tests {
    use super::*;

    fn post_cv(parts: &[Part]) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/generate-cv")
            .insert_header((header::CONTENT_TYPE, multipart_content_type()))
            .set_payload(multipart_body(parts))
    }

    #[actix_web::test]
    async fn test_generate_cv_end_to_end() {
        let renderer = Arc::new(MockPdfRenderer::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_app_state(renderer.clone(), MAX_UPLOAD)))
                .configure(handlers::config),
        )
        .await;

        let req = post_cv(&[Part::text(
            "data",
            r#"{"fullName": "Ahmed Ali", "passportNumber": "P1234567"}"#,
        )])
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        let disposition = resp
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains("Ahmed_Ali"));
        assert!(disposition.contains("P1234567"));

        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), FAKE_PDF);

        let html = renderer.last_html().expect("renderer was called");
        assert_eq!(html.matches(r#"<div class="page">"#).count(), 2);
        assert!(html.contains("Ahmed Ali"));
    }

    #[actix_web::test]
    async fn test_missing_data_field_still_renders() {
        let renderer = Arc::new(MockPdfRenderer::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_app_state(renderer.clone(), MAX_UPLOAD)))
                .configure(handlers::config),
        )
        .await;

        let resp = test::call_service(&app, post_cv(&[]).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let disposition = resp.headers().get(header::CONTENT_DISPOSITION).unwrap();
        assert!(disposition.to_str().unwrap().contains("CV_candidate.pdf"));
    }

    #[actix_web::test]
    async fn test_rejected_uploads_fall_back_to_placeholder() {
        let renderer = Arc::new(MockPdfRenderer::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_app_state(renderer.clone(), MAX_UPLOAD)))
                .configure(handlers::config),
        )
        .await;

        let req = post_cv(&[
            Part::text("data", r#"{"fullName": "Mary Wanjiku"}"#),
            Part::file("profilePhoto", "face.png", "image/png", b"small-png".to_vec()),
            Part::file("fullPhoto", "body.png", "image/png", vec![7u8; MAX_UPLOAD * 4]),
            Part::file("passportScan", "scan.pdf", "application/pdf", b"%PDF-1.4".to_vec()),
        ])
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let html = renderer.last_html().unwrap();
        assert_eq!(
            img_src(&html, "profile-photo").as_deref(),
            Some("data:image/png;base64,c21hbGwtcG5n")
        );
        assert_eq!(img_src(&html, "full-photo").as_deref(), Some(PLACEHOLDER_DATA_URI));
        assert_eq!(img_src(&html, "passport-scan").as_deref(), Some(PLACEHOLDER_DATA_URI));
    }

    #[actix_web::test]
    async fn test_malformed_json_returns_error_response() {
        let renderer = Arc::new(MockPdfRenderer::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_app_state(renderer.clone(), MAX_UPLOAD)))
                .configure(handlers::config),
        )
        .await;

        let req = post_cv(&[Part::text("data", "{ malformed json ")]).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Failed to generate PDF");
        assert!(body.details.contains("Invalid candidate data"));
        assert!(renderer.last_html().is_none());
    }

    #[actix_web::test]
    async fn test_oversized_data_field_is_rejected() {
        let renderer = Arc::new(MockPdfRenderer::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_app_state(renderer.clone(), MAX_UPLOAD)))
                .configure(handlers::config),
        )
        .await;

        let padding = "x".repeat(MAX_DATA * 4);
        let data = format!(r#"{{"fullName": "Ahmed Ali", "notes": "{padding}"}}"#);
        let req = post_cv(&[Part::text("data", &data)]).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Failed to generate PDF");
        assert!(body.details.contains("data field too large"));
        assert!(renderer.last_html().is_none());
    }

    #[actix_web::test]
    async fn test_renderer_failure_returns_error_response() {
        let renderer = Arc::new(MockPdfRenderer::failing("chrome not found"));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_app_state(renderer.clone(), MAX_UPLOAD)))
                .configure(handlers::config),
        )
        .await;

        let req = post_cv(&[Part::text("data", r#"{"fullName": "Ahmed Ali"}"#)]).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(resp.headers().get(header::CONTENT_DISPOSITION).is_none());

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Failed to generate PDF");
        assert!(body.details.contains("chrome not found"));
    }

    #[actix_web::test]
    async fn test_service_info() {
        let renderer = Arc::new(MockPdfRenderer::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_app_state(renderer, MAX_UPLOAD)))
                .configure(handlers::config),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "Haneen Al Sharq CV Generator");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
