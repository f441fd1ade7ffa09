//! Task-specific model collaborators.
//!
//! A trained version exposes a hosted model matching its task type.
//! These types only carry the coordinates needed to reach that model;
//! inference itself is outside this SDK.

use crate::version::TaskType;

use common::ApiKey;

/// Hosted object-detection model attached to a version.
#[derive(Debug, Clone)]
pub struct ObjectDetectionModel {
    api_key: ApiKey,
    dataset_id: String,
    name: String,
    version: String,
    local: bool,
}

impl ObjectDetectionModel {
    pub fn new(
        api_key: ApiKey,
        dataset_id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        local: bool,
    ) -> Self {
        Self {
            api_key,
            dataset_id: dataset_id.into(),
            name: name.into(),
            version: version.into(),
            local,
        }
    }

    pub fn dataset_id(&self) -> &str {
        &self.dataset_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version number without the workspace prefix.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_local(&self) -> bool {
        self.local
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

/// Hosted classification model attached to a version.
#[derive(Debug, Clone)]
pub struct ClassificationModel {
    api_key: ApiKey,
    dataset_id: String,
    name: String,
    version: String,
    local: bool,
}

impl ClassificationModel {
    pub fn new(
        api_key: ApiKey,
        dataset_id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        local: bool,
    ) -> Self {
        Self {
            api_key,
            dataset_id: dataset_id.into(),
            name: name.into(),
            version: version.into(),
            local,
        }
    }

    pub fn dataset_id(&self) -> &str {
        &self.dataset_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version number without the workspace prefix.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_local(&self) -> bool {
        self.local
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

/// The model collaborator a version owns, if its task type has one.
#[derive(Debug, Clone)]
pub enum Model {
    ObjectDetection(ObjectDetectionModel),
    Classification(ClassificationModel),
}

impl Model {
    /// Select the collaborator for a task type.
    ///
    /// Unrecognized task types yield `None`; that is not an error, the
    /// version simply has no hosted model this SDK knows how to reach.
    pub fn for_task(
        task_type: &TaskType,
        api_key: &ApiKey,
        dataset_id: &str,
        name: &str,
        version_number: &str,
        local: bool,
    ) -> Option<Self> {
        match task_type {
            TaskType::ObjectDetection => Some(Model::ObjectDetection(ObjectDetectionModel::new(
                api_key.clone(),
                dataset_id,
                name,
                version_number,
                local,
            ))),
            TaskType::Classification => Some(Model::Classification(ClassificationModel::new(
                api_key.clone(),
                dataset_id,
                name,
                version_number,
                local,
            ))),
            TaskType::Other(_) => None,
        }
    }
}
