use thiserror::Error;

/// Startup-time failures. Request-time failures are `api::error::ApiError`.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] projects_config::ConfigError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type Result<T> = std::result::Result<T, ServerError>;
