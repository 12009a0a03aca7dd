#![allow(dead_code)]

//! Test infrastructure for projects-server API tests

use projects_server::AppState;

use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower_http::cors::CorsLayer;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory databases need a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/projects-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Permissive CORS layer for tests that are not about CORS
pub fn test_cors() -> CorsLayer {
    CorsLayer::permissive()
}

/// A request body that passes create validation
pub fn valid_project_body() -> serde_json::Value {
    json!({
        "projectName": "Phoenix",
        "projectDescription": "Rebuild of the billing pipeline",
        "skillSet": ["Rust", "SQL"],
        "noOfMembers": 3,
        "isActive": true
    })
}

/// Insert a project directly, bypassing the API
pub async fn create_test_project(pool: &SqlitePool, name: &str, description: &str) -> uuid::Uuid {
    let project_id = uuid::Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
            INSERT INTO projects (id, project_name, project_description, skill_set, no_of_members, is_active, created_date)
            VALUES (?, ?, ?, ?, ?, ?, ?)"#,
    )
    .bind(project_id.to_string())
    .bind(name)
    .bind(description)
    .bind(r#"["Rust"]"#)
    .bind(2)
    .bind(1)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test project");

    project_id
}
