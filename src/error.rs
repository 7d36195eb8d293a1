//! Error types for lxcm

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LxcmError {
    #[error("'{0}' could not be invoked; is it installed and on PATH?")]
    ToolUnavailable(String),

    #[error("command failed: {}", .command.join(" "))]
    DelegationFailed {
        /// Full argument vector, supervisor prefix included.
        command: Vec<String>,
        /// Captured stdout/stderr; empty for interactive children.
        output: String,
    },

    #[error("operation not permitted in the container's current state; retry with --force")]
    MustForce,

    #[error("create requires --distribution, --release and --architecture")]
    MissingParameters,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LxcmError {
    /// Copy-pasteable rendering of a failed command's argument vector.
    pub fn pretty_command(&self) -> Option<String> {
        match self {
            LxcmError::DelegationFailed { command, .. } => Some(command.join(" ")),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LxcmError>;
