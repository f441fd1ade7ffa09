//! Dataset versions and archive export.
//!
//! A [`Version`] is an immutable snapshot of a project's images and
//! annotations. Beyond holding its metadata, its one operation is
//! [`Version::download`]: resolve a signed export link, fetch the zip
//! archive, and unpack it.

pub mod archive;

use crate::config::ClientConfig;
use crate::error::DownloadError;
use crate::ident::DatasetId;
use crate::models::Model;

use common::{ApiKey, ErrorLocation, HttpStatusCode};

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;
use serde_json::{Value, json};

/// Task type recorded on a version.
///
/// The server sends free-form strings; anything other than the two
/// known values is preserved as [`TaskType::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskType {
    ObjectDetection,
    Classification,
    Other(String),
}

impl TaskType {
    pub fn as_str(&self) -> &str {
        match self {
            TaskType::ObjectDetection => "object-detection",
            TaskType::Classification => "classification",
            TaskType::Other(value) => value,
        }
    }
}

impl From<&str> for TaskType {
    fn from(value: &str) -> Self {
        match value {
            "object-detection" => TaskType::ObjectDetection,
            "classification" => TaskType::Classification,
            other => TaskType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw version metadata as returned by the server.
///
/// `augmentation` and `preprocessing` are opaque server-defined
/// structures and are carried through uninterpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionInfo {
    pub id: String,
    pub created: f64,
    #[serde(default)]
    pub images: u64,
    #[serde(default)]
    pub augmentation: Value,
    #[serde(default)]
    pub preprocessing: Value,
    #[serde(default)]
    pub splits: BTreeMap<String, u64>,
}

/// One immutable dataset version.
#[derive(Debug, Clone)]
pub struct Version {
    api_key: ApiKey,
    config: ClientConfig,
    model: Option<Model>,
    pub name: String,
    /// Version identifier as addressed on the wire (may carry a
    /// `workspace/project` prefix).
    pub version: String,
    pub task_type: TaskType,
    /// `workspace/project` identifier of the owning dataset.
    pub id: String,
    pub created: f64,
    pub images: u64,
    pub augmentation: Value,
    pub preprocessing: Value,
    pub splits: BTreeMap<String, u64>,
}

impl Version {
    /// Build a version from server metadata.
    ///
    /// Selects the task-specific model collaborator, passing the
    /// `local` flag through; unrecognized task types get no model.
    pub fn new(
        info: VersionInfo,
        task_type: impl Into<TaskType>,
        api_key: ApiKey,
        name: impl Into<String>,
        version: impl Into<String>,
        local: bool,
        config: ClientConfig,
    ) -> Self {
        let name = name.into();
        let version = version.into();
        let task_type = task_type.into();

        let number = last_segment(&version).to_string();
        let model = Model::for_task(&task_type, &api_key, &info.id, &name, &number, local);

        Self {
            api_key,
            config,
            model,
            name,
            version,
            task_type,
            id: info.id,
            created: info.created,
            images: info.images,
            augmentation: info.augmentation,
            preprocessing: info.preprocessing,
            splits: info.splits,
        }
    }

    /// Version number without the workspace prefix.
    pub fn number(&self) -> &str {
        last_segment(&self.version)
    }

    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    /// Descriptive summary reproducing every metadata field.
    pub fn summary(&self) -> Value {
        json!({
            "name": self.name,
            "type": self.task_type.as_str(),
            "version": self.version,
            "augmentation": self.augmentation,
            "created": self.created,
            "preprocessing": self.preprocessing,
            "splits": self.splits,
        })
    }

    /// Download this version in the requested export format and
    /// unpack it into the current working directory.
    pub async fn download(&self, format: &str) -> Result<(), DownloadError> {
        self.download_to(format, Path::new(".")).await
    }

    /// Download this version in the requested export format and
    /// unpack it into `dest`.
    ///
    /// The archive lands in a unique temporary file, so concurrent
    /// downloads cannot clobber each other; the file is removed once
    /// extraction finishes (or via RAII on error). Extraction itself
    /// is not atomic: a failure part-way leaves the entries written so
    /// far in `dest`.
    pub async fn download_to(&self, format: &str, dest: &Path) -> Result<(), DownloadError> {
        let http = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .build()?;

        let link = self.export_link(&http, format).await?;
        debug!("Fetching export archive for {} v{}", self.id, self.number());

        let response = http.get(&link).send().await?;
        let status = HttpStatusCode(response.status().as_u16());
        if !status.is_success() {
            return Err(DownloadError::Archive {
                status,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        let bytes = response.bytes().await?;

        let mut tmp = tempfile::Builder::new()
            .prefix("roboflow-export-")
            .suffix(".zip")
            .tempfile()?;
        tmp.write_all(&bytes)?;
        tmp.flush()?;

        let written = archive::extract(tmp.reopen()?, dest)?;
        tmp.close()?;

        info!(
            "Extracted {written} files from {} v{} into {}",
            self.id,
            self.number(),
            dest.display()
        );
        Ok(())
    }

    /// Resolve the signed export link for this version.
    ///
    /// A non-200 response surfaces with its parsed JSON body; an
    /// expired link later is not retried here, it fails once on fetch.
    async fn export_link(&self, http: &reqwest::Client, format: &str) -> Result<String, DownloadError> {
        let dataset = DatasetId::parse(&self.id)?;
        let url = format!(
            "{}/{}/{}/{}/{}?api_key={}",
            self.config.api_url,
            dataset.workspace(),
            dataset.project(),
            self.version,
            format,
            self.api_key.expose()
        );

        debug!("Resolving export link for {} v{} as '{format}'", self.id, self.number());
        let response = http.get(&url).send().await?;
        let status = HttpStatusCode(response.status().as_u16());
        let text = response.text().await?;

        if !status.is_success() {
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(DownloadError::Export {
                status,
                body,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body: Value = serde_json::from_str(&text)?;
        let link = body["export"]["link"]
            .as_str()
            .ok_or(DownloadError::MissingExportLink {
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(link.to_string())
    }
}

fn last_segment(value: &str) -> &str {
    value.rsplit('/').next().unwrap_or(value)
}
