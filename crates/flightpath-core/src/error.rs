//! Error types and exit codes for flightpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing dataset, unknown airport, no route)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the flightpath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing dataset, unknown node, unreachable destination (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph, search and dataset operations
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    #[error("node not found: {node}")]
    NodeNotFound { node: String },

    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("no path from {from} to {to}")]
    PathNotFound { from: String, to: String },

    #[error("invalid weight {weight} on edge {from} -> {to} (weights must be non-negative)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("dataset not found: {path:?}")]
    DatasetNotFound { path: PathBuf },

    #[error("no dataset given (pass --data or set `dataset` in config)")]
    NoDataset,

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

impl RouteError {
    /// Create an error for a key missing from a map
    pub fn key_not_found(key: impl std::fmt::Debug) -> Self {
        RouteError::KeyNotFound {
            key: format!("{:?}", key),
        }
    }

    /// Create an error for a node missing from a graph
    pub fn node_not_found(node: impl std::fmt::Debug) -> Self {
        RouteError::NodeNotFound {
            node: format!("{:?}", node),
        }
    }

    /// Create an error for a directed edge missing from a graph
    pub fn edge_not_found(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        RouteError::EdgeNotFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Create an error for an unreachable destination
    pub fn path_not_found(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        RouteError::PathNotFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RouteError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UsageError(_)
            | RouteError::InvalidValue { .. } => ExitCode::Usage,

            RouteError::KeyNotFound { .. }
            | RouteError::NodeNotFound { .. }
            | RouteError::EdgeNotFound { .. }
            | RouteError::PathNotFound { .. }
            | RouteError::InvalidWeight { .. }
            | RouteError::DatasetNotFound { .. }
            | RouteError::NoDataset => ExitCode::Data,

            RouteError::Io(_)
            | RouteError::Json(_)
            | RouteError::Toml(_)
            | RouteError::FailedOperationWithTarget { .. }
            | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::UsageError(_) => "usage_error",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::KeyNotFound { .. } => "key_not_found",
            RouteError::NodeNotFound { .. } => "node_not_found",
            RouteError::EdgeNotFound { .. } => "edge_not_found",
            RouteError::PathNotFound { .. } => "path_not_found",
            RouteError::InvalidWeight { .. } => "invalid_weight",
            RouteError::DatasetNotFound { .. } => "dataset_not_found",
            RouteError::NoDataset => "no_dataset",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RouteError::Other(_) => "other",
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

/// Result type alias for flightpath operations
pub type Result<T> = std::result::Result<T, RouteError>;
