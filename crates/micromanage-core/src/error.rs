//! Error types for the work plan library.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::transition::TransitionRejection;

/// Comprehensive error type for all work plan operations.
///
/// Validation and invariant errors are raised before any mutation, so a
/// command that fails leaves the plan untouched. Persistence errors are only
/// seen by the storage layer; commands report them as
/// [`crate::models::PersistenceStatus::MemoryOnly`] instead.
#[derive(Error, Debug)]
pub enum WorkplanError {
    /// The aggregate has not finished its storage-backed initialization
    #[error("WorkPlan is not initialized. Call initialize() first.")]
    NotInitialized,
    /// The operation needs a plan but none is defined
    #[error("No implementation plan found. Create an implementation plan first using the 'plan' tool.")]
    NoActivePlan,
    /// Group or unit index outside the valid range
    #[error("Invalid {target} index {index}: {}", range_hint(.len))]
    IndexOutOfRange {
        target: IndexTarget,
        index: i64,
        len: usize,
    },
    /// The requested status change breaks the workflow rules
    #[error("{0}")]
    InvalidTransition(TransitionRejection),
    /// The request is well-formed but not allowed in this mode
    #[error("Invalid operation: {message}")]
    InvalidOperation { message: String },
    /// A field needed for this request was not supplied
    #[error("Missing required field '{field}': {reason}")]
    MissingRequiredField { field: String, reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

fn range_hint(len: &usize) -> String {
    match *len {
        0 => "there are no entries to address".to_string(),
        n => format!("must be between 0 and {}", n - 1),
    }
}

/// Which level of the hierarchy an index addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexTarget {
    Group,
    Unit,
}

impl std::fmt::Display for IndexTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexTarget::Group => write!(f, "group"),
            IndexTarget::Unit => write!(f, "unit"),
        }
    }
}

/// Stable machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotInitialized,
    NoActivePlan,
    IndexOutOfRange,
    InvalidTransition,
    InvalidOperation,
    MissingRequiredField,
    InvalidInput,
    PersistenceFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotInitialized => "not_initialized",
            ErrorKind::NoActivePlan => "no_active_plan",
            ErrorKind::IndexOutOfRange => "index_out_of_range",
            ErrorKind::InvalidTransition => "invalid_transition",
            ErrorKind::InvalidOperation => "invalid_operation",
            ErrorKind::MissingRequiredField => "missing_required_field",
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::PersistenceFailure => "persistence_failure",
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WorkplanError {
        WorkplanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WorkplanError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an out-of-range error for the given level.
    pub fn index_out_of_range(target: IndexTarget, index: i64, len: usize) -> Self {
        WorkplanError::IndexOutOfRange { target, index, len }
    }

    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WorkplanError::NotInitialized => ErrorKind::NotInitialized,
            WorkplanError::NoActivePlan => ErrorKind::NoActivePlan,
            WorkplanError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            WorkplanError::InvalidTransition(_) => ErrorKind::InvalidTransition,
            WorkplanError::InvalidOperation { .. } => ErrorKind::InvalidOperation,
            WorkplanError::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            WorkplanError::InvalidInput { .. } => ErrorKind::InvalidInput,
            WorkplanError::FileSystem { .. } | WorkplanError::Serialization { .. } => {
                ErrorKind::PersistenceFailure
            }
        }
    }

    /// Structured form of this error for callers across the command boundary.
    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            error: self.to_string(),
            kind: self.kind(),
            status: "failed",
        }
    }
}

impl From<TransitionRejection> for WorkplanError {
    fn from(rejection: TransitionRejection) -> Self {
        WorkplanError::InvalidTransition(rejection)
    }
}

/// Error as returned to callers: never a fault, always data.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorPayload {
    pub error: String,
    pub kind: ErrorKind,
    pub status: &'static str,
}

/// Result type alias for work plan operations
pub type Result<T> = std::result::Result<T, WorkplanError>;
