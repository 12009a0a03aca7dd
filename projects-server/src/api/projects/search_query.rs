use serde::Deserialize;

/// Query string for GET /projects/search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free text matched against name or description; absent means "all"
    #[serde(default)]
    pub q: Option<String>,
}
