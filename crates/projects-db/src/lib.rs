pub mod error;
pub mod repositories;

pub use error::{Result, StoreError};
pub use repositories::project_repository::ProjectRepository;

/// Embedded migrations for the projects collection.
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}
