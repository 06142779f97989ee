//! Error types and exit codes for facnet
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (missing store, unknown facility, bad weights)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::NodeId;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during facnet operations
#[derive(Error, Debug)]
pub enum FacnetError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("unknown facility: {id}")]
    UnknownNode { id: NodeId },

    #[error("connection {from} -> {to} has negative or non-finite distance {distance}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        distance: f64,
    },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl FacnetError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        FacnetError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        FacnetError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        FacnetError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        FacnetError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FacnetError::UnknownFormat(_)
            | FacnetError::UsageError(_)
            | FacnetError::InvalidValue { .. } => ExitCode::Usage,

            FacnetError::StoreNotFound { .. }
            | FacnetError::InvalidStore { .. }
            | FacnetError::UnknownNode { .. }
            | FacnetError::NegativeWeight { .. }
            | FacnetError::AlreadyExists { .. }
            | FacnetError::NotFound { .. } => ExitCode::Data,

            FacnetError::Io(_)
            | FacnetError::Json(_)
            | FacnetError::Toml(_)
            | FacnetError::FailedOperationWithTarget { .. }
            | FacnetError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            FacnetError::UnknownFormat(_) => "unknown_format",
            FacnetError::UsageError(_) => "usage_error",
            FacnetError::InvalidValue { .. } => "invalid_value",
            FacnetError::StoreNotFound { .. } => "store_not_found",
            FacnetError::InvalidStore { .. } => "invalid_store",
            FacnetError::UnknownNode { .. } => "unknown_node",
            FacnetError::NegativeWeight { .. } => "negative_weight",
            FacnetError::AlreadyExists { .. } => "already_exists",
            FacnetError::NotFound { .. } => "not_found",
            FacnetError::Io(_) => "io_error",
            FacnetError::Json(_) => "json_error",
            FacnetError::Toml(_) => "toml_error",
            FacnetError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            FacnetError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for facnet operations
pub type Result<T> = std::result::Result<T, FacnetError>;
