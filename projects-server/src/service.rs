//! Project service: validate, then persist, then shape the result.
//!
//! No branching beyond that. Not-found and validation outcomes are
//! expected, recoverable results; store failures propagate untouched.

use projects_core::{Project, ProjectDraft, ValidationErrors, validate};
use projects_db::{ProjectRepository, StoreError};

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("project not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

pub struct ProjectService {
    repo: ProjectRepository,
}

impl ProjectService {
    pub fn new(repo: ProjectRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> ServiceResult<Vec<Project>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get(&self, id: Uuid) -> ServiceResult<Project> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    /// Validate in create mode, stamp the server-assigned fields, persist.
    /// Nothing is written when validation fails.
    pub async fn create(&self, draft: ProjectDraft) -> ServiceResult<Project> {
        let data = validate::create(draft).map_err(ServiceError::Validation)?;
        let project = Project::new(data);
        self.repo.insert(&project).await?;
        Ok(project)
    }

    pub async fn update(&self, id: Uuid, draft: ProjectDraft) -> ServiceResult<Project> {
        let patch = validate::update(draft).map_err(ServiceError::Validation)?;
        self.repo
            .update_by_id(id, &patch)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        if self.repo.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }

    /// A missing query searches for the empty string, which matches all.
    pub async fn search(&self, query: Option<String>) -> ServiceResult<Vec<Project>> {
        Ok(self.repo.search(query.as_deref().unwrap_or_default()).await?)
    }
}
