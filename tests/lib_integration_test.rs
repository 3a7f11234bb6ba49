//! Integration tests for the cyber_range library public API

use cyber_range::{
    servers::{WebConfig, WebServer},
    CyberRangeError, Result, DESCRIPTION, NAME, VERSION,
};

#[test]
fn test_library_metadata() {
    assert!(!VERSION.is_empty());
    assert_eq!(NAME, "cyber_range");
    assert!(!DESCRIPTION.is_empty());
}

#[test]
fn test_error_types() {
    let server_error = CyberRangeError::Server("test server error".to_string());
    assert!(matches!(server_error, CyberRangeError::Server(_)));

    let log_error = CyberRangeError::ScoreLog("test log error".to_string());
    assert!(matches!(log_error, CyberRangeError::ScoreLog(_)));

    let io_error: CyberRangeError =
        std::io::Error::new(std::io::ErrorKind::Other, "test io error").into();
    assert!(matches!(io_error, CyberRangeError::Io(_)));
}

#[test]
fn test_result_type_alias() {
    let success: Result<i32> = Ok(42);
    assert!(success.is_ok());
    assert_eq!(success.unwrap(), 42);

    let failure: Result<i32> = Err(CyberRangeError::Server("test".to_string()));
    assert!(failure.is_err());
}

#[test]
fn test_web_server_creation() {
    let config = WebConfig {
        port: 8080,
        host: "127.0.0.1".to_string(),
        ..WebConfig::default()
    };

    let _server = WebServer::new(config);
}

#[test]
fn test_server_configs() {
    let web_config = WebConfig::default();
    assert_eq!(web_config.port, 8000);
    assert_eq!(web_config.host, "0.0.0.0");
    assert_eq!(web_config.redirect_target, "http://localhost:3000");
}
