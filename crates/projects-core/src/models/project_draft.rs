use serde::{Deserialize, Serialize};

/// Raw inbound payload for create and update requests.
///
/// Every field is optional so the validator can report each missing field
/// individually instead of failing at deserialization. Unknown keys are a
/// deserialization error, which also means `id` and `createdDate` can never
/// be supplied by a client. On the sending side absent fields are omitted
/// from the body entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_set: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_of_members: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
