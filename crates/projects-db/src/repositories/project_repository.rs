//! Document store adapter for the projects collection.
//!
//! One logical collection backed by a single SQLite table. The skill list
//! is persisted as a JSON text column, timestamps as Unix seconds. The pool
//! handle is constructed explicitly and passed down, so tests can point a
//! repository at an in-memory database.

use crate::{Result as StoreResult, StoreError};

use projects_core::{Project, ProjectPatch};

use chrono::DateTime;
use sqlx::SqlitePool;
use uuid::Uuid;

const SELECT_COLUMNS: &str = "SELECT id, project_name, project_description, \
     skill_set, no_of_members, is_active, created_date FROM projects";

pub struct ProjectRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: String,
    project_name: String,
    project_description: String,
    skill_set: String,
    no_of_members: i64,
    is_active: bool,
    created_date: i64,
}

impl TryFrom<ProjectRow> for Project {
    type Error = StoreError;

    fn try_from(row: ProjectRow) -> StoreResult<Project> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| StoreError::corrupt(format!("invalid UUID in projects.id: {e}")))?;
        let skill_set: Vec<String> = serde_json::from_str(&row.skill_set)
            .map_err(|e| StoreError::corrupt(format!("invalid JSON in projects.skill_set: {e}")))?;
        let created_date = DateTime::from_timestamp(row.created_date, 0)
            .ok_or_else(|| StoreError::corrupt("invalid timestamp in projects.created_date"))?;

        Ok(Project {
            id,
            project_name: row.project_name,
            project_description: row.project_description,
            skill_set,
            no_of_members: row.no_of_members,
            is_active: row.is_active,
            created_date,
        })
    }
}

/// Wrap user text in `%...%`, escaping LIKE metacharacters so they match
/// literally. The empty string becomes `%%`, a substring of everything.
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, project: &Project) -> StoreResult<()> {
        let skill_set = serde_json::to_string(&project.skill_set)
            .map_err(|e| StoreError::corrupt(format!("unserializable skill_set: {e}")))?;

        sqlx::query(
            "INSERT INTO projects (id, project_name, project_description, \
             skill_set, no_of_members, is_active, created_date) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(project.id.to_string())
        .bind(&project.project_name)
        .bind(&project.project_description)
        .bind(skill_set)
        .bind(project.no_of_members)
        .bind(project.is_active)
        .bind(project.created_date.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "{SELECT_COLUMNS} ORDER BY created_date, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Project::try_from).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Project::try_from).transpose()
    }

    /// Apply only the supplied fields and return the post-update record.
    /// Read-merge-write inside a transaction; concurrent updates to the
    /// same record are last-write-wins.
    pub async fn update_by_id(&self, id: Uuid, patch: &ProjectPatch) -> StoreResult<Option<Project>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ProjectRow>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut project = Project::try_from(row)?;
        project.apply(patch.clone());

        let skill_set = serde_json::to_string(&project.skill_set)
            .map_err(|e| StoreError::corrupt(format!("unserializable skill_set: {e}")))?;

        sqlx::query(
            "UPDATE projects SET project_name = ?, project_description = ?, \
             skill_set = ?, no_of_members = ?, is_active = ? WHERE id = ?",
        )
        .bind(&project.project_name)
        .bind(&project.project_description)
        .bind(skill_set)
        .bind(project.no_of_members)
        .bind(project.is_active)
        .bind(project.id.to_string())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(project))
    }

    /// Physical removal. Returns `false` when no record matched.
    pub async fn delete_by_id(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring match against name OR description.
    /// The empty string matches every record.
    pub async fn search(&self, text: &str) -> StoreResult<Vec<Project>> {
        let pattern = like_pattern(text);

        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "{SELECT_COLUMNS} WHERE project_name LIKE ? ESCAPE '\\' \
             OR project_description LIKE ? ESCAPE '\\' \
             ORDER BY created_date, id"
        ))
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Project::try_from).collect()
    }
}
