use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::TASK_LIST_LIMIT;
use crate::error::CoreError;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub tasks: TasksConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the web front-end served for non-API paths.
    pub web_dir: String,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TasksConfig {
    /// Maximum number of tasks returned by one listing.
    pub list_limit: u16,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            list_limit: TASK_LIST_LIMIT,
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional `config.toml`, `PLANNER_*`
    /// environment variables and the legacy `TODO_*` variables, in increasing
    /// order of precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 7540)?
            .set_default("server.web_dir", "web")?
            .set_default("database.max_connections", 4)?
            .set_default("logging.level", "info")?
            .set_default("tasks.list_limit", i64::from(TASK_LIST_LIMIT))?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env vars, e.g. PLANNER_SERVER__PORT
            .add_source(
                config::Environment::with_prefix("PLANNER")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // Legacy variable names
            .set_override_option("server.port", legacy_var("TODO_PORT"))?
            .set_override_option("server.web_dir", legacy_var("TODO_WEBDIR"))?
            .set_override_option("database.url", legacy_var("TODO_DATABASE_URL"))?
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` describing the first invalid value.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.server.port == 0 {
            return Err(CoreError::ConfigError(
                "server.port must be between 1 and 65535".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(CoreError::ConfigError(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        if self.tasks.list_limit == 0 {
            return Err(CoreError::ConfigError(
                "tasks.list_limit must be at least 1".to_string(),
            ));
        }
        if self.database.url.trim().is_empty() {
            return Err(CoreError::ConfigError("database.url is empty".to_string()));
        }
        Ok(())
    }
}

fn legacy_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if dotenvy::dotenv().is_err() {
        tracing::debug!("No .env file found");
    }

    Settings::load()
}

#[cfg(test)]
mod tests;
