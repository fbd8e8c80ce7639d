use blogview::config::{Config, ConfigError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn default_config_values() {
    let config = Config::default();
    assert!(config.articles.is_none());
    assert_eq!(config.tick_rate_ms, 250);
}

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("blogview/config.toml"));
}

#[test]
fn missing_file_yields_defaults() {
    let config = Config::load_from(&PathBuf::from("/nonexistent/config.toml")).unwrap();
    assert_eq!(config.tick_rate_ms, 250);
}

#[test]
fn parses_full_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "articles = \"/tmp/my-articles.json\"").unwrap();
    writeln!(file, "tick_rate_ms = 100").unwrap();

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.articles, Some(PathBuf::from("/tmp/my-articles.json")));
    assert_eq!(config.tick_rate_ms, 100);
}

#[test]
fn partial_config_fills_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "tick_rate_ms = 500").unwrap();

    let config = Config::load_from(file.path()).unwrap();
    assert!(config.articles.is_none());
    assert_eq!(config.tick_rate_ms, 500);
}

#[test]
fn invalid_toml_is_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "articles = [not toml").unwrap();

    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_tick_rate_fails_validation() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "tick_rate_ms = 0").unwrap();

    let err = Config::load_from(file.path()).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("tick_rate_ms"));
        }
        other => panic!("expected ValidationError, got {other:?}"),
    }
}
