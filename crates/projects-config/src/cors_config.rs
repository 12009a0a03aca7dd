use crate::{ConfigError, ConfigErrorResult, DEFAULT_ALLOWED_ORIGINS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Exact-match allow-list. `PROJECTS_CORS_ALLOWED_ORIGINS` appends
    /// additional comma-separated entries.
    pub allowed_origins: Vec<String>,
    /// Accept any origin unconditionally. Off by default; non-production
    /// servers also relax the policy (see `ServerConfig::production`).
    pub allow_any_origin: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            allow_any_origin: false,
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for origin in &self.allowed_origins {
            if origin.trim().is_empty() {
                return Err(ConfigError::cors(
                    "cors.allowed_origins contains an empty entry",
                ));
            }
        }
        Ok(())
    }
}
