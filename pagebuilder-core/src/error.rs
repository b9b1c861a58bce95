//! Error types for the input model.

use thiserror::Error;

/// Result type for input model operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while loading or assembling the input model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Snapshot serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A tag was registered twice with different parameter lists.
    #[error("Descriptor conflict: `{tag}` is already registered with different parameters")]
    DescriptorConflict {
        /// Component tag name.
        tag: String,
    },
}
