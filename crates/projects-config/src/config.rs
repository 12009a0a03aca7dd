use crate::{
    ConfigError, ConfigErrorResult, CorsConfig, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for PROJECTS_CONFIG_DIR env var, else use ./.projects/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PROJECTS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PROJECTS_CONFIG_DIR env var > ./.projects/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("PROJECTS_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".projects"))
    }

    /// Validate all configuration. Call after load() to catch errors at
    /// startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.cors.validate()?;

        if self.database.url.trim().is_empty() {
            return Err(ConfigError::database("database.url cannot be empty"));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (production: {})",
            self.server.host, self.server.port, self.server.production
        );
        info!("  database: {}", self.database.url);
        info!(
            "  cors: {} origin(s){}",
            self.cors.allowed_origins.len(),
            if self.cors.allow_any_origin {
                ", allow-any"
            } else {
                ""
            }
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PROJECTS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PROJECTS_SERVER_PORT", &mut self.server.port);
        Self::apply_env_bool("PROJECTS_PRODUCTION", &mut self.server.production);

        // Database
        Self::apply_env_string("PROJECTS_DATABASE_URL", &mut self.database.url);

        // CORS
        Self::apply_env_list(
            "PROJECTS_CORS_ALLOWED_ORIGINS",
            &mut self.cors.allowed_origins,
        );
        Self::apply_env_bool("PROJECTS_CORS_ALLOW_ANY", &mut self.cors.allow_any_origin);

        // Logging
        Self::apply_env_parse("PROJECTS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PROJECTS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PROJECTS_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var: &str, target: &mut String) {
        if let Ok(value) = std::env::var(var) {
            *target = value;
        }
    }

    fn apply_env_option_string(var: &str, target: &mut Option<String>) {
        if let Ok(value) = std::env::var(var) {
            *target = Some(value);
        }
    }

    fn apply_env_parse<T: FromStr>(var: &str, target: &mut T) {
        if let Ok(value) = std::env::var(var)
            && let Ok(parsed) = value.parse::<T>()
        {
            *target = parsed;
        }
    }

    fn apply_env_bool(var: &str, target: &mut bool) {
        if let Ok(value) = std::env::var(var) {
            match value.to_lowercase().as_str() {
                "1" | "true" | "yes" => *target = true,
                "0" | "false" | "no" => *target = false,
                _ => {}
            }
        }
    }

    /// Comma-separated env list, appended to the configured entries.
    fn apply_env_list(var: &str, target: &mut Vec<String>) {
        if let Ok(value) = std::env::var(var) {
            target.extend(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from),
            );
        }
    }
}
