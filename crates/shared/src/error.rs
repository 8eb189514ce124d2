use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One or more contact form fields were empty at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("all contact fields are required")]
pub struct ValidationFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitErrorCode {
    Validation,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
    #[error("submission backend unavailable: {0}")]
    Unavailable(String),
}

impl SubmitError {
    pub fn code(&self) -> SubmitErrorCode {
        match self {
            SubmitError::Validation(_) => SubmitErrorCode::Validation,
            SubmitError::Unavailable(_) => SubmitErrorCode::Unavailable,
        }
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid TOML in content file '{path}': {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid JSON in content file '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unsupported content file extension for '{0}' (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
    #[error("content has no navigation link for section '{0}'")]
    MissingNavLink(String),
}
