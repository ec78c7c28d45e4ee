use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("failed to read input file {}: {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("failed to marshal result: {0}")]
    Marshal(#[from] serde_json::Error),

    #[error("failed to write output file {}: {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Serialization,
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::ReadInput { .. } | ApplicationError::WriteOutput { .. } => ErrorKind::Io,
            ApplicationError::Marshal(_) => ErrorKind::Serialization,
        }
    }
}

pub type ApplicationResult<A> = Result<A, ApplicationError>;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ProcessResult {
    #[serde(rename = "success")]
    pub succeeded: bool,
    pub message: String,
    #[serde(rename = "data", default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl ProcessResult {
    pub fn success(message: &str) -> Self {
        Self {
            succeeded: true,
            message: message.to_string(),
            payload: None,
            created_at: Utc::now(),
        }
    }

    pub fn to_pretty_json(&self) -> ApplicationResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
