//! Schema validation for create and update payloads.
//!
//! Pure functions: malformed business data produces a [`ValidationErrors`]
//! value, never a panic. Transport-level problems (an unparseable body) are
//! rejected earlier, at the HTTP boundary.

use crate::ProjectDraft;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const MIN_MEMBERS: i64 = 1;
pub const MAX_MEMBERS: i64 = 5;

const MSG_NAME_REQUIRED: &str = "Project name is required";
const MSG_DESCRIPTION_REQUIRED: &str = "Project description is required";
const MSG_SKILL_REQUIRED: &str = "At least one skill is required";
const MSG_MEMBERS_RANGE: &str = "noOfMembers must be between 1 and 5";
const MSG_ACTIVE_REQUIRED: &str = "isActive is required";

/// Field-keyed validation messages, collected across all violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Normalized output of create-mode validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub project_name: String,
    pub project_description: String,
    pub skill_set: Vec<String>,
    pub no_of_members: i64,
    pub is_active: bool,
}

/// Normalized output of update-mode validation. Absent fields mean
/// "leave untouched".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub project_name: Option<String>,
    pub project_description: Option<String>,
    pub skill_set: Option<Vec<String>>,
    pub no_of_members: Option<i64>,
    pub is_active: Option<bool>,
}

fn is_blank(text: &Option<String>) -> bool {
    match text {
        Some(s) => s.trim().is_empty(),
        None => true,
    }
}

fn in_member_range(n: i64) -> bool {
    (MIN_MEMBERS..=MAX_MEMBERS).contains(&n)
}

/// Validate a payload in create mode. Every required field is checked and
/// all violations are reported, keyed per field.
pub fn create(draft: ProjectDraft) -> Result<NewProject, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if is_blank(&draft.project_name) {
        errors.push("projectName", MSG_NAME_REQUIRED);
    }
    if is_blank(&draft.project_description) {
        errors.push("projectDescription", MSG_DESCRIPTION_REQUIRED);
    }
    if draft.skill_set.as_ref().is_none_or(Vec::is_empty) {
        errors.push("skillSet", MSG_SKILL_REQUIRED);
    }
    if !draft.no_of_members.is_some_and(in_member_range) {
        errors.push("noOfMembers", MSG_MEMBERS_RANGE);
    }
    if draft.is_active.is_none() {
        errors.push("isActive", MSG_ACTIVE_REQUIRED);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewProject {
        project_name: draft.project_name.unwrap_or_default(),
        project_description: draft.project_description.unwrap_or_default(),
        skill_set: draft.skill_set.unwrap_or_default(),
        no_of_members: draft.no_of_members.unwrap_or(MIN_MEMBERS),
        is_active: draft.is_active.unwrap_or_default(),
    })
}

/// Validate a payload in update mode. Every field is optional; present
/// fields obey the same per-field constraints, except `skillSet`, which may
/// be any list including the empty one.
pub fn update(draft: ProjectDraft) -> Result<ProjectPatch, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if draft.project_name.is_some() && is_blank(&draft.project_name) {
        errors.push("projectName", MSG_NAME_REQUIRED);
    }
    if draft.project_description.is_some() && is_blank(&draft.project_description) {
        errors.push("projectDescription", MSG_DESCRIPTION_REQUIRED);
    }
    if draft.no_of_members.is_some_and(|n| !in_member_range(n)) {
        errors.push("noOfMembers", MSG_MEMBERS_RANGE);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ProjectPatch {
        project_name: draft.project_name,
        project_description: draft.project_description,
        skill_set: draft.skill_set,
        no_of_members: draft.no_of_members,
        is_active: draft.is_active,
    })
}
