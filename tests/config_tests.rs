use pretty_assertions::assert_eq;
use rag_front::config;
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_missing_config_file_falls_back_to_defaults() {
    let config = config::from_sources("/nonexistent/config.yaml", None)
        .await
        .unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.logs.level, "info");
    assert_eq!(config.rag.api_url, "http://localhost:8000/api/rag");
}

#[tokio::test]
async fn test_config_file_values_are_applied() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
server:
  host: 127.0.0.1
  port: 8088
  logs:
    level: debug

rag:
  api_url: http://search.internal:8000/api/rag
"#
    )
    .unwrap();

    let config = config::from_sources(file.path().to_str().unwrap(), None)
        .await
        .unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8088);
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(config.rag.api_url, "http://search.internal:8000/api/rag");
}

#[tokio::test]
async fn test_partial_config_file_keeps_defaults_for_missing_fields() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
server:
  port: 8088
"#
    )
    .unwrap();

    let config = config::from_sources(file.path().to_str().unwrap(), None)
        .await
        .unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8088);
    assert_eq!(config.rag.api_url, "http://localhost:8000/api/rag");
}

#[tokio::test]
async fn test_env_override_takes_precedence_over_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
rag:
  api_url: http://from-file:8000/api/rag
"#
    )
    .unwrap();

    let config = config::from_sources(
        file.path().to_str().unwrap(),
        Some("http://from-env:9000/api/rag".to_string()),
    )
    .await
    .unwrap();

    assert_eq!(config.rag.api_url, "http://from-env:9000/api/rag");
}

#[tokio::test]
async fn test_invalid_yaml_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "server: [not, a, mapping").unwrap();

    let result = config::from_sources(file.path().to_str().unwrap(), None).await;

    assert!(result.is_err());
}
