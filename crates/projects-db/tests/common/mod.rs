use projects_core::{NewProject, Project};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory databases need a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn sample_project(name: &str, description: &str) -> Project {
    Project::new(NewProject {
        project_name: name.to_string(),
        project_description: description.to_string(),
        skill_set: vec!["Rust".to_string()],
        no_of_members: 3,
        is_active: true,
    })
}
