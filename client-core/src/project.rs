//! Project metadata holder.

use common::ApiKey;

use serde::Deserialize;
use serde_json::Value;

/// Metadata for one project, as returned under the `project` field of
/// the project endpoint.
///
/// Fields the server does not send stay `None`; fields this SDK does
/// not know about are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub task_type: Option<String>,
    #[serde(default)]
    pub annotation: Option<String>,
    #[serde(default)]
    pub images: Option<u64>,
    #[serde(default)]
    pub classes: Option<Value>,
    #[serde(default)]
    pub created: Option<f64>,
    #[serde(default)]
    pub updated: Option<f64>,
    #[serde(default)]
    pub public: Option<bool>,
}

/// A named dataset container within a workspace.
///
/// Passive wrapper around server-supplied metadata. Version
/// enumeration against a project is handled by a separate
/// collaborator, not this type.
#[derive(Debug, Clone)]
pub struct Project {
    api_key: ApiKey,
    workspace: String,
    name: String,
    info: ProjectInfo,
}

impl Project {
    pub(crate) fn new(
        workspace: impl Into<String>,
        name: impl Into<String>,
        info: ProjectInfo,
        api_key: ApiKey,
    ) -> Self {
        Self {
            api_key,
            workspace: workspace.into(),
            name: name.into(),
            info,
        }
    }

    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slash-joined `workspace/project` identifier.
    pub fn id(&self) -> String {
        format!("{}/{}", self.workspace, self.name)
    }

    pub fn info(&self) -> &ProjectInfo {
        &self.info
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}
