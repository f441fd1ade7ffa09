//! Typed `workspace/project` identifiers.
//!
//! The API addresses a dataset by joining the workspace and project
//! names with a single slash. Parsing is strict: more than one
//! separator is rejected instead of silently splitting on the first,
//! since a mis-parse here turns into a request against the wrong
//! workspace.

use crate::error::IdentError;

use common::ErrorLocation;

use std::fmt;
use std::panic::Location;

/// Composite identifier addressing one dataset project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetId {
    workspace: String,
    project: String,
}

impl DatasetId {
    /// Parse a `workspace/project` string.
    #[track_caller]
    pub fn parse(value: &str) -> Result<Self, IdentError> {
        let location = ErrorLocation::from(Location::caller());
        let segments: Vec<&str> = value.split('/').collect();

        match segments.as_slice() {
            [workspace, project] => {
                if workspace.is_empty() || project.is_empty() {
                    return Err(IdentError::EmptySegment {
                        value: value.to_string(),
                        location,
                    });
                }
                Ok(Self {
                    workspace: (*workspace).to_string(),
                    project: (*project).to_string(),
                })
            }
            [_] => Err(IdentError::MissingSeparator {
                value: value.to_string(),
                location,
            }),
            _ => Err(IdentError::ExtraSeparator {
                value: value.to_string(),
                location,
            }),
        }
    }

    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    pub fn project(&self) -> &str {
        &self.project
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.workspace, self.project)
    }
}
