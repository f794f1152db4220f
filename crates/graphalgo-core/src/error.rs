//! Error types and exit codes for graphalgo
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Graph/data error (bad vertex, bad weight, cyclic input, ...)

mod macros;

use thiserror::Error;

use crate::graph::{VertexId, Weight};

/// Exit codes for the graphalgo binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph/data error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or running algorithms
#[derive(Error, Debug)]
pub enum GraphError {
    // Graph construction and query errors (exit code 3)
    #[error("vertex {vertex} is out of bounds (graph has {num_vertices} vertices)")]
    OutOfRange {
        vertex: VertexId,
        num_vertices: usize,
    },

    #[error("an edge cannot have weight {weight} (< 1)")]
    InvalidWeight { weight: Weight },

    #[error("an adjacency set cannot represent edge weight {weight} (only 1)")]
    InvalidEdge { weight: Weight },

    #[error("vertex {vertex} cannot be adjacent to itself")]
    SelfLoop { vertex: VertexId },

    #[error("this graph has a cycle ({sorted} of {total} vertices ordered)")]
    CycleDetected { sorted: usize, total: usize },

    #[error("there is no path from {from} to {to}")]
    NoPath { from: VertexId, to: VertexId },

    #[error("{context} exceeds the maximum weight {max}", max = Weight::MAX)]
    WeightOverflow { context: String },

    // Internal misuse (exit code 1)
    #[error("pop from an empty priority queue")]
    EmptyQueue,

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a vertex outside `[0, num_vertices)`
    pub fn out_of_range(vertex: VertexId, num_vertices: usize) -> Self {
        GraphError::OutOfRange {
            vertex,
            num_vertices,
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a weight sum that does not fit in `Weight`
    pub fn weight_overflow(context: &str) -> Self {
        GraphError::WeightOverflow {
            context: context.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::OutOfRange { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::InvalidEdge { .. }
            | GraphError::SelfLoop { .. }
            | GraphError::CycleDetected { .. }
            | GraphError::NoPath { .. }
            | GraphError::WeightOverflow { .. } => ExitCode::Data,

            GraphError::EmptyQueue
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::OutOfRange { .. } => "out_of_range",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::InvalidEdge { .. } => "invalid_edge",
            GraphError::SelfLoop { .. } => "self_loop",
            GraphError::CycleDetected { .. } => "cycle_detected",
            GraphError::NoPath { .. } => "no_path",
            GraphError::WeightOverflow { .. } => "weight_overflow",
            GraphError::EmptyQueue => "empty_queue",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Other(_) => "other",
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

/// Result type alias for graphalgo operations
pub type Result<T> = std::result::Result<T, GraphError>;
