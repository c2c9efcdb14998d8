//! Error types for the FAILSAFE console core.
//!
//! Every fallible operation returns `FailsafeResult<T>`. A failed command
//! leaves registry, incident log and global state exactly as they were.

use thiserror::Error;

/// The unified error type for the FAILSAFE crates.
#[derive(Debug, Error)]
pub enum FailsafeError {
    /// A command referenced an agent identifier that is not in the registry.
    #[error("agent '{agent_id}' not found")]
    NotFound { agent_id: String },

    /// The emergency-stop confirmation token did not match.
    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    /// Malformed command input (out-of-range risk score, unknown enum value,
    /// duplicate identifier in a seed snapshot).
    #[error("validation error: {reason}")]
    Validation { reason: String },

    /// The incident recorder could not append a record.
    ///
    /// Only produced when internal state is poisoned.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },

    /// A policy or snapshot document is missing or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

impl FailsafeError {
    pub fn not_found(agent_id: impl Into<String>) -> Self {
        Self::NotFound { agent_id: agent_id.into() }
    }

    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation { reason: reason.into() }
    }
}

/// Convenience alias used throughout the FAILSAFE crates.
pub type FailsafeResult<T> = Result<T, FailsafeError>;
