//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the node tree's rules.
/// Every failing operation leaves the tree untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("invalid operation: '{operation}' is not supported by node '{node}'")]
    InvalidOperation { operation: String, node: String },
}

impl DomainError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid-operation error for `operation` attempted on `node`.
    pub fn invalid_operation(operation: impl Into<String>, node: impl Into<String>) -> Self {
        Self::InvalidOperation {
            operation: operation.into(),
            node: node.into(),
        }
    }
}

/// Result type for tree operations.
pub type DomainResult<T> = Result<T, DomainError>;
