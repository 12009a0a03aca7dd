use crate::{CliClientResult, ClientError};

use projects_core::{Project, ProjectDraft, ValidationErrors};

use reqwest::{Client as ReqwestClient, Method};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed HTTP client for the projects-server REST API
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

/// Body returned by a successful delete. Serializes back out unchanged,
/// which is how the CLI prints it.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute a request and decode either the typed payload or the
    /// server's error shape.
    ///
    /// Error bodies are keyed deterministically: an `errors` object is a
    /// validation failure, an `error` string is any other API error, and
    /// anything else surfaces as the raw body text.
    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            let body: Value = response.json().await?;
            return Ok(serde_json::from_value(body)?);
        }

        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        if let Some(errors) = body.get("errors")
            && let Ok(errors) = serde_json::from_value::<ValidationErrors>(errors.clone())
        {
            return Err(ClientError::validation(errors));
        }

        let message = body
            .get("error")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or(text);

        Err(ClientError::api(status.as_u16(), message))
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List all projects
    pub async fn list_projects(&self) -> CliClientResult<Vec<Project>> {
        let req = self.request(Method::GET, "/projects");
        self.execute(req).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: &str) -> CliClientResult<Project> {
        let req = self.request(Method::GET, &format!("/projects/{}", id));
        self.execute(req).await
    }

    /// Create a new project
    pub async fn create_project(&self, draft: &ProjectDraft) -> CliClientResult<Project> {
        let req = self.request(Method::POST, "/projects").json(draft);
        self.execute(req).await
    }

    /// Update a project; absent draft fields are left untouched
    pub async fn update_project(
        &self,
        id: &str,
        draft: &ProjectDraft,
    ) -> CliClientResult<Project> {
        let req = self
            .request(Method::PUT, &format!("/projects/{}", id))
            .json(draft);
        self.execute(req).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: &str) -> CliClientResult<DeleteConfirmation> {
        let req = self.request(Method::DELETE, &format!("/projects/{}", id));
        self.execute(req).await
    }

    /// Case-insensitive substring search on name or description. An empty
    /// query returns every project.
    pub async fn search_projects(&self, query: &str) -> CliClientResult<Vec<Project>> {
        let req = self
            .request(Method::GET, "/projects/search")
            .query(&[("q", query)]);
        self.execute(req).await
    }
}
