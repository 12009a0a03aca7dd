//! Project REST API handlers
//!
//! Thin controllers: parse the path/query/body, hand off to the service,
//! serialize the outcome. All error mapping lives in `api::error`.

use crate::{
    api::delete_response::DeleteResponse,
    api::error::Result as ApiResult,
    api::extractors::JsonBody,
    api::projects::search_query::SearchQuery,
    service::ProjectService,
    state::AppState,
};

use projects_core::{Project, ProjectDraft};
use projects_db::ProjectRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

fn service(state: &AppState) -> ProjectService {
    ProjectService::new(ProjectRepository::new(state.pool.clone()))
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /projects
///
/// List all projects
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    Ok(Json(service(&state).list().await?))
}

/// GET /projects/search?q=
///
/// Case-insensitive substring search on name or description. An absent or
/// empty query returns every project.
pub async fn search_projects(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Project>>> {
    Ok(Json(service(&state).search(query.q).await?))
}

/// GET /projects/{id}
///
/// Get a single project by ID. A malformed UUID is a 400.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Project>> {
    let project_id = Uuid::parse_str(&id)?;

    Ok(Json(service(&state).get(project_id).await?))
}

/// POST /projects
///
/// Create a project. 201 with the stored record, including the
/// server-assigned id and createdDate.
pub async fn create_project(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<ProjectDraft>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let project = service(&state).create(draft).await?;

    log::info!("Created project {} ({})", project.id, project.project_name);

    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /projects/{id}
///
/// Partial update: absent fields stay untouched, unknown fields were
/// already rejected at deserialization.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<ProjectDraft>,
) -> ApiResult<Json<Project>> {
    let project_id = Uuid::parse_str(&id)?;

    let project = service(&state).update(project_id, draft).await?;

    log::info!("Updated project {}", project.id);

    Ok(Json(project))
}

/// DELETE /projects/{id}
///
/// Physical removal with a confirmation body.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    service(&state).delete(project_id).await?;

    log::info!("Deleted project {}", project_id);

    Ok(Json(DeleteResponse {
        message: "Project deleted successfully".to_string(),
    }))
}
