//! Workspace listing holder.

use common::ApiKey;

use serde::Deserialize;

/// One project summary from a workspace listing.
///
/// Fields the server does not send stay `None`; fields this SDK does
/// not know about are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub task_type: Option<String>,
    #[serde(default)]
    pub images: Option<u64>,
}

/// Raw body of the workspace listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceListing {
    #[serde(default)]
    pub workspace: Option<WorkspaceDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub projects: Vec<ProjectSummary>,
}

/// A named account workspace and its project listing.
///
/// The listing is fetched by [`crate::Roboflow::workspace`]; this type
/// makes no network calls of its own.
#[derive(Debug, Clone)]
pub struct Workspace {
    api_key: ApiKey,
    name: String,
    projects: Vec<ProjectSummary>,
}

impl Workspace {
    pub(crate) fn new(name: impl Into<String>, listing: WorkspaceListing, api_key: ApiKey) -> Self {
        let projects = listing
            .workspace
            .map(|details| details.projects)
            .unwrap_or_default();

        Self {
            api_key,
            name: name.into(),
            projects,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn projects(&self) -> &[ProjectSummary] {
        &self.projects
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}
