//! Export error types.

use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that abort an export.
///
/// Node-level variants carry the id of the node that failed. The first error
/// encountered ends the walk and no partial artifact is produced.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A grid layout's inline template is missing or not `repeat(auto-fill, <N>px)`.
    #[error("Malformed grid template on `{node_id}`: {property} = {value:?}")]
    MalformedGridTemplate {
        /// Id of the layout node.
        node_id: String,
        /// Inline style property that was read.
        property: String,
        /// Raw value, or `None` when the declaration is absent.
        value: Option<String>,
    },

    /// A component node has no registered descriptor.
    #[error("No descriptor registered for component `{node_id}` (tag: {tag:?})")]
    SchemaMissing {
        /// Id of the component node.
        node_id: String,
        /// Tag of the component node, if any.
        tag: Option<String>,
    },

    /// Artifact serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExportError {
    /// Id of the node that caused the error, if the error is node-level.
    #[must_use]
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Self::MalformedGridTemplate { node_id, .. } | Self::SchemaMissing { node_id, .. } => {
                Some(node_id)
            }
            Self::Serialization(_) => None,
        }
    }
}
