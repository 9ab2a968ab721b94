//! Error handling for GMapKit
//!
//! Geometry, hit-testing, visibility and teardown never fail; they degrade to
//! empty results. Errors only come from configuring styles and from moving
//! snapshots in and out of their serialized form.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for GMapKit
#[derive(Error, Debug)]
pub enum Error {
    /// A stroke style value is unusable
    #[error("Invalid stroke: {reason}")]
    InvalidStroke {
        /// Why the stroke was rejected.
        reason: String,
    },

    /// The process-wide default stroke was already installed or read
    #[error("Default stroke already initialized")]
    DefaultStrokeInitialized,

    /// A route snapshot could not be encoded or decoded
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid stroke error
    pub fn invalid_stroke(reason: impl Into<String>) -> Self {
        Self::InvalidStroke {
            reason: reason.into(),
        }
    }
}

/// Result type alias for GMapKit operations
pub type Result<T> = std::result::Result<T, Error>;
