//! Error types for hive-layout.

use thiserror::Error;

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors that can occur in layout computations.
///
/// These always indicate a programming error in the caller: geometry inputs
/// come from configuration and roster sizes, never from a user directly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Malformed input to a geometry function.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl LayoutError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
