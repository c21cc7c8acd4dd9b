//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed input or failed tree queries.
/// These are independent of where the lines came from.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("missing ':' separator in line: {line:?}")]
    MissingSeparator { line: String },

    #[error("parent not found in tree: {0}")]
    ParentNotFound(String),

    #[error("there is no node with name of {0}")]
    NameNotFound(String),

    #[error("no common ancestor for {first} and {second}")]
    NoCommonAncestor { first: String, second: String },

    #[error("line {line_no}: {source}")]
    Line {
        line_no: usize,
        #[source]
        source: Box<DomainError>,
    },
}

impl DomainError {
    /// The error without any line-number wrapping.
    pub fn root_cause(&self) -> &DomainError {
        match self {
            DomainError::Line { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
