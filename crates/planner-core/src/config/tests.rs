//! Tests for configuration module.

use super::*;

fn settings() -> Settings {
    Settings {
        database: DatabaseConfig {
            url: "postgresql://localhost/planner".to_string(),
            max_connections: 4,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 7540,
            web_dir: "web".to_string(),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        tasks: TasksConfig::default(),
    }
}

#[test_log::test]
fn test_valid_settings_pass_validation() {
    tracing::debug!("Validating default-like settings");
    assert!(settings().validate().is_ok());
}

#[test]
fn test_bind_addr() {
    assert_eq!(settings().server.bind_addr(), "127.0.0.1:7540");
}

#[test]
fn test_zero_port_rejected() {
    let mut settings = settings();
    settings.server.port = 0;

    let err = settings.validate().unwrap_err();
    assert!(matches!(err, CoreError::ConfigError(_)));
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_zero_connections_rejected() {
    let mut settings = settings();
    settings.database.max_connections = 0;

    assert!(matches!(
        settings.validate(),
        Err(CoreError::ConfigError(_))
    ));
}

#[test]
fn test_zero_list_limit_rejected() {
    let mut settings = settings();
    settings.tasks.list_limit = 0;

    let err = settings.validate().unwrap_err();
    assert!(err.to_string().contains("tasks.list_limit"));
}

#[test]
fn test_empty_database_url_rejected() {
    let mut settings = settings();
    settings.database.url = "   ".to_string();

    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_deserialize_from_toml() {
    let raw = r#"
        [database]
        url = "postgresql://db/planner"
        max_connections = 8

        [server]
        host = "0.0.0.0"
        port = 8080
        web_dir = "public"

        [logging]
        level = "warn"
    "#;

    let settings: Settings = Config::builder()
        .add_source(config::File::from_str(raw, config::FileFormat::Toml))
        .build()
        .and_then(Config::try_deserialize)
        .unwrap();

    assert_eq!(settings.database.max_connections, 8);
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.server.web_dir, "public");
    assert_eq!(settings.logging.level, "warn");
    // omitted section falls back to its default
    assert_eq!(settings.tasks.list_limit, TASK_LIST_LIMIT);
}

#[test]
fn test_settings_debug() {
    let debug = format!("{:?}", settings());
    assert!(debug.contains("Settings"));
    assert!(debug.contains("7540"));
}
