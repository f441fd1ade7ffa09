//! Root client: authenticated session scoped to one API key.

pub mod validation;

use crate::config::ClientConfig;
use crate::error::{AuthError, RequestError};
use crate::ident::DatasetId;
use crate::project::{Project, ProjectInfo};
use crate::workspace::{Workspace, WorkspaceListing};

use common::{ApiKey, ErrorLocation, HttpStatusCode};

use std::panic::Location;

use log::{debug, info};
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// An authenticated session against the dataset API.
///
/// Construction performs the key handshake; afterwards the client
/// hands out [`Workspace`] and [`Project`] holders. Every request
/// carries the key as an `api_key` query parameter (never a header).
#[derive(Debug, Clone)]
pub struct Roboflow {
    http: Client,
    config: ClientConfig,
    api_key: ApiKey,
    current_workspace: String,
}

impl Roboflow {
    /// Authenticate against the default API URL.
    pub async fn new(api_key: impl Into<ApiKey>) -> Result<Self, AuthError> {
        Self::with_config(api_key, ClientConfig::default()).await
    }

    /// Authenticate against an explicit configuration.
    ///
    /// Validates the key format before any request goes out, then
    /// performs the [`check_key`] handshake and stores the account's
    /// current workspace from the response.
    pub async fn with_config(
        api_key: impl Into<ApiKey>,
        config: ClientConfig,
    ) -> Result<Self, AuthError> {
        let api_key = api_key.into();
        validation::validate_key(&api_key)?;
        Url::parse(&config.api_url)?;

        let http = Client::builder().timeout(config.timeout).build()?;

        let body = check_key(&http, &config, &api_key).await?;
        let current_workspace = body
            .get("workspace")
            .and_then(Value::as_str)
            .ok_or_else(|| AuthError::Malformed {
                message: "response has no workspace field".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?
            .to_string();

        info!("Authenticated; current workspace is '{current_workspace}'");
        Ok(Self {
            http,
            config,
            api_key,
            current_workspace,
        })
    }

    /// Workspace resolved during authentication.
    pub fn current_workspace(&self) -> &str {
        &self.current_workspace
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch a workspace's project listing.
    ///
    /// `None` means the current workspace.
    pub async fn workspace(&self, name: Option<&str>) -> Result<Workspace, RequestError> {
        let name = name.unwrap_or(&self.current_workspace);
        let url = format!(
            "{}/{}?api_key={}",
            self.config.api_url,
            name,
            self.api_key.expose()
        );

        debug!("Listing workspace '{name}'");
        let response = self.http.get(&url).send().await?;
        let status = HttpStatusCode(response.status().as_u16());
        let text = response.text().await?;

        if !status.is_success() {
            return Err(RequestError::Status {
                status,
                body: text,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let listing: WorkspaceListing = serde_json::from_str(&text)?;
        Ok(Workspace::new(name, listing, self.api_key.clone()))
    }

    /// Fetch one project's metadata.
    ///
    /// A `name` containing `/` is parsed as `workspace/project` and
    /// the embedded workspace wins over the `workspace` argument;
    /// otherwise the explicit or current workspace applies.
    pub async fn project(
        &self,
        name: &str,
        workspace: Option<&str>,
    ) -> Result<Project, RequestError> {
        let (workspace, name) = if name.contains('/') {
            let dataset = DatasetId::parse(name)?;
            (dataset.workspace().to_string(), dataset.project().to_string())
        } else {
            let workspace = workspace.unwrap_or(&self.current_workspace);
            (workspace.to_string(), name.to_string())
        };

        let url = format!(
            "{}/{}/{}?api_key={}",
            self.config.api_url,
            workspace,
            name,
            self.api_key.expose()
        );

        debug!("Fetching project '{workspace}/{name}'");
        let response = self.http.get(&url).send().await?;
        let status = HttpStatusCode(response.status().as_u16());
        let text = response.text().await?;

        if !status.is_success() {
            return Err(RequestError::Status {
                status,
                body: text,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body: Value = serde_json::from_str(&text)?;
        let info = body
            .get("project")
            .cloned()
            .ok_or_else(|| RequestError::Malformed {
                message: "response has no project field".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        let info: ProjectInfo = serde_json::from_value(info)?;

        Ok(Project::new(workspace, name, info, self.api_key.clone()))
    }
}

/// Authenticate an API key against the root endpoint.
///
/// Returns the parsed response body on success. The server signals
/// rejection either with a non-200 status or with an `error` field in
/// a 200 body; both fail with the exact response text.
pub async fn check_key(
    http: &Client,
    config: &ClientConfig,
    api_key: &ApiKey,
) -> Result<Value, AuthError> {
    let url = format!("{}/?api_key={}", config.api_url, api_key.expose());

    debug!("Authenticating API key ({} chars)", api_key.len());
    let response = http.post(&url).send().await?;
    let status = HttpStatusCode(response.status().as_u16());
    let text = response.text().await?;

    if !status.is_success() {
        return Err(AuthError::Rejected {
            status,
            body: text,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let body: Value =
        serde_json::from_str(&text).map_err(|error| AuthError::Malformed {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if body.get("error").is_some() {
        return Err(AuthError::Rejected {
            status,
            body: text,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(body)
}
