//! Project entity - the single managed record type.

use crate::validate::{NewProject, ProjectPatch};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted project. `id` and `created_date` are assigned by the server
/// at creation and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub project_name: String,
    pub project_description: String,
    pub skill_set: Vec<String>,
    pub no_of_members: i64,
    pub is_active: bool,
    pub created_date: DateTime<Utc>,
}

impl Project {
    /// Build a project from validated create data, stamping the
    /// server-assigned fields.
    pub fn new(data: NewProject) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_name: data.project_name,
            project_description: data.project_description,
            skill_set: data.skill_set,
            no_of_members: data.no_of_members,
            is_active: data.is_active,
            created_date: Utc::now(),
        }
    }

    /// Apply a sparse update. Absent fields stay untouched; `id` and
    /// `created_date` are not patchable.
    pub fn apply(&mut self, patch: ProjectPatch) {
        if let Some(name) = patch.project_name {
            self.project_name = name;
        }
        if let Some(description) = patch.project_description {
            self.project_description = description;
        }
        if let Some(skills) = patch.skill_set {
            self.skill_set = skills;
        }
        if let Some(members) = patch.no_of_members {
            self.no_of_members = members;
        }
        if let Some(active) = patch.is_active {
            self.is_active = active;
        }
    }
}
