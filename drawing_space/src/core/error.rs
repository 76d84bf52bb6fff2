use thiserror::Error;

use crate::vertex_store::VertexRef;

/// Result type for drawing_space operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors returned by transform construction, vertex extraction, and sort key parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Vertex not found: {0}")]
    NotFound(VertexRef),
}

impl GeometryError {
    #[inline]
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        GeometryError::InvalidArgument(msg.into())
    }
}
