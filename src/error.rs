//! Error types for aria2-tasks
//!
//! The pure algorithms in this crate (bitfield decoding, run compression, swarm
//! health, task normalization) are total and never fail. Errors only surface at
//! the RPC boundary, where the collaborator's error envelope is carried through
//! unchanged, and when parsing user-facing selectors such as list kinds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for aria2-tasks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for aria2-tasks
#[derive(Debug, Error)]
pub enum Error {
    /// The RPC collaborator answered with an error envelope
    ///
    /// The payload is passed through as reported; this crate does not classify
    /// or translate remote errors.
    #[error("{method} failed: {}", .error)]
    Rpc {
        /// Remote method that was invoked (e.g. "aria2.tellStatus")
        method: String,
        /// Error payload reported by the collaborator
        error: RpcError,
    },

    /// Response payload could not be interpreted
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Unknown task list kind
    #[error("unknown task list kind: {0}")]
    InvalidListKind(String),

    /// Unknown queue position mode
    #[error("unknown position mode: {0}")]
    InvalidPositionMode(String),

    /// A task service setting was rejected by `Config::validate`
    #[error("configuration error: {message}")]
    Config {
        /// What is wrong, e.g. a key list missing "gid"
        message: String,
        /// Name of the rejected setting, e.g. "full_task_keys"
        key: Option<String>,
    },
}

/// Error payload of a failed RPC envelope
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    /// Remote error code, when the service reported one
    #[serde(default)]
    pub code: Option<i64>,
    /// Remote error message
    pub message: String,
}

impl RpcError {
    /// Create an error payload with a code and message
    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "[{}] {}", code, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl Error {
    /// Wrap a collaborator error payload for the given remote method
    pub fn rpc(method: impl Into<String>, error: RpcError) -> Self {
        Error::Rpc {
            method: method.into(),
            error,
        }
    }

    /// The remote error payload, if this error came from the RPC collaborator
    pub fn rpc_error(&self) -> Option<&RpcError> {
        match self {
            Error::Rpc { error, .. } => Some(error),
            _ => None,
        }
    }
}
