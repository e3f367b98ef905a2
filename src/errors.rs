// src/errors.rs

//! Crate-wide error type and `Result` alias.
//!
//! The first six variants are the validation failures a caller can act on.
//! Each carries the `path` of the offending node, e.g. `[0].subtasks[1]`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskTreeError {
    #[error("the task hierarchy must be a list (got {found})")]
    HierarchyNotASequence { found: &'static str },

    #[error("all top-level tasks must be records; element [{index}] is {found}")]
    TopLevelElementInvalid { index: usize, found: &'static str },

    #[error("task at {path} must be a record (got {found})")]
    NotARecord { path: String, found: &'static str },

    #[error("task at {path} must have a 'name' field of type string")]
    MissingOrInvalidName { path: String },

    #[error("the 'priority' field of task at {path}, if present, must be a number (got {found})")]
    InvalidPriorityType { path: String, found: &'static str },

    #[error("the 'subtasks' field of task at {path} must be a list (got {found})")]
    SubtasksNotASequence { path: String, found: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TaskTreeError {
    /// Whether this error describes malformed task input (as opposed to a
    /// failure to read or parse it).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TaskTreeError::HierarchyNotASequence { .. }
                | TaskTreeError::TopLevelElementInvalid { .. }
                | TaskTreeError::NotARecord { .. }
                | TaskTreeError::MissingOrInvalidName { .. }
                | TaskTreeError::InvalidPriorityType { .. }
                | TaskTreeError::SubtasksNotASequence { .. }
        )
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskTreeError>;
