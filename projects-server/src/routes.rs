use crate::api::projects::projects::{
    create_project, delete_project, get_project, list_projects, search_projects, update_project,
};
use crate::{health, state::AppState};

use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::json;
use tower_http::cors::CorsLayer;

/// Build the application router with all endpoints
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health::health_check))
        // Project CRUD + search
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/search", get(search_projects))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        // Unmatched routes get a JSON 404 instead of an empty body
        .fallback(route_not_found)
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(cors)
}

async fn route_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
}
