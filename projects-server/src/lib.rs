pub mod api;
pub mod cors;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod service;
pub mod state;


pub use api::{
    delete_response::DeleteResponse,
    error::{ApiError, Result as ApiResult},
    projects::projects::{
        create_project, delete_project, get_project, list_projects, search_projects,
        update_project,
    },
};
pub use routes::build_router;
pub use service::{ProjectService, ServiceError};
pub use state::AppState;
