//! Application-level errors (wraps domain errors)

use std::path::PathBuf;

use itertools::Itertools;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add file-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("input file trouble in {}: {source}", .path.display())]
    Build {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("no family tree files found in: {}", .0.display())]
    NoInputFiles(PathBuf),

    #[error("several family tree files in {}, pick one with --file: {}", .dir.display(), join_paths(.candidates))]
    AmbiguousInput {
        dir: PathBuf,
        candidates: Vec<PathBuf>,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    /// Domain error behind this failure, if any.
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            ApplicationError::Domain(e) | ApplicationError::Build { source: e, .. } => {
                Some(e.root_cause())
            }
            _ => None,
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display()).join(", ")
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
