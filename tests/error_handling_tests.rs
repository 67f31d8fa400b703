#[cfg(test)]
mod error_handling_tests {
    use haneen_cv_server::generators::GeneratorError;
    use haneen_cv_server::ErrorResponse;

    #[test]
    fn test_error_response_shape() {
        let error_response = ErrorResponse::generation_failed("browser crashed");
        assert_eq!(error_response.error, "Failed to generate PDF");
        assert_eq!(error_response.details, "browser crashed");
        assert!(chrono::DateTime::parse_from_rfc3339(&error_response.timestamp).is_ok());
    }

    #[test]
    fn test_error_response_serialization() {
        let json = serde_json::to_value(ErrorResponse::generation_failed("x")).unwrap();
        assert_eq!(json["error"], "Failed to generate PDF");
        assert_eq!(json["details"], "x");
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn test_generator_error_messages() {
        assert_eq!(
            GeneratorError::Launch("no chrome".to_string()).to_string(),
            "failed to launch browser: no chrome"
        );
        assert_eq!(
            GeneratorError::Print("timeout".to_string()).to_string(),
            "failed to print PDF: timeout"
        );
        assert_eq!(GeneratorError::EmptyPdf.to_string(), "renderer produced an empty PDF");
    }
}
