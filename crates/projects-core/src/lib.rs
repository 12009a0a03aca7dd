pub mod models;
pub mod validate;


pub use models::project::Project;
pub use models::project_draft::ProjectDraft;
pub use validate::{NewProject, ProjectPatch, ValidationErrors};
