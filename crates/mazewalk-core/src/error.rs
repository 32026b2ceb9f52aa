//! Error types and exit codes for mazewalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Graph/maze fault (structural precondition, cycle, incomplete coverage)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph or maze fault (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while generating or verifying a maze
#[derive(Error, Debug)]
pub enum MazeError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Graph/maze faults (exit code 3)
    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    /// No eligible next neighbor could be found for a walk step.
    #[error("failed to find next node from {node} (degree {degree}): nodes reached mid-walk need at least two neighbors")]
    StructuralPrecondition { node: String, degree: usize },

    /// The verifier reached a node twice.
    #[error("traverse() loop at: {node}")]
    CycleDetected { node: String },

    /// The verifier did not reach every node of the graph.
    #[error("traverse() not all nodes visited: {visited} vs {total}")]
    IncompleteCoverage { visited: usize, total: usize },

    // Generic failures (exit code 1)
    #[error("walk step budget of {steps} exhausted")]
    StepBudgetExhausted { steps: u64 },

    #[error("interrupted")]
    Interrupted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl MazeError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MazeError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a node id that does not belong to the graph
    pub fn unknown_node(node: impl std::fmt::Display) -> Self {
        MazeError::UnknownNode {
            node: node.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MazeError::UsageError(_) | MazeError::InvalidValue { .. } => ExitCode::Usage,

            MazeError::UnknownNode { .. }
            | MazeError::StructuralPrecondition { .. }
            | MazeError::CycleDetected { .. }
            | MazeError::IncompleteCoverage { .. } => ExitCode::Data,

            MazeError::StepBudgetExhausted { .. }
            | MazeError::Interrupted
            | MazeError::Io(_)
            | MazeError::Json(_)
            | MazeError::Toml(_)
            | MazeError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            MazeError::UsageError(_) => "usage_error",
            MazeError::InvalidValue { .. } => "invalid_value",
            MazeError::UnknownNode { .. } => "unknown_node",
            MazeError::StructuralPrecondition { .. } => "structural_precondition",
            MazeError::CycleDetected { .. } => "cycle_detected",
            MazeError::IncompleteCoverage { .. } => "incomplete_coverage",
            MazeError::StepBudgetExhausted { .. } => "step_budget_exhausted",
            MazeError::Interrupted => "interrupted",
            MazeError::Io(_) => "io_error",
            MazeError::Json(_) => "json_error",
            MazeError::Toml(_) => "toml_error",
            MazeError::Other(_) => "other",
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

/// Result type alias for mazewalk operations
pub type Result<T> = std::result::Result<T, MazeError>;
