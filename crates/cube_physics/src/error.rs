//! # Physics Error Types
//!
//! Spatial queries themselves are total and report misses as `None`;
//! only setup (config loading, ray construction) can fail.

use thiserror::Error;

/// Errors that can occur while setting up spatial queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {reason}")]
    ConfigRead {
        /// Path that was read.
        path: String,
        /// Underlying I/O error message.
        reason: String,
    },

    /// The configuration parsed but holds unusable values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A ray was built from a zero-length or non-finite direction.
    #[error("ray direction must be finite and non-zero")]
    DegenerateRay,
}

/// Result type for physics setup operations.
pub type PhysicsResult<T> = Result<T, PhysicsError>;
