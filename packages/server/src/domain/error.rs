//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// UserId validation error
    #[error("UserId cannot be empty")]
    UserIdEmpty,

    /// UserId too long error
    #[error("UserId cannot exceed {max} characters (got {actual})")]
    UserIdTooLong { max: usize, actual: usize },

    /// ComplaintId validation error
    #[error("ComplaintId cannot be empty")]
    ComplaintIdEmpty,

    /// ComplaintId too long error
    #[error("ComplaintId cannot exceed {max} characters (got {actual})")]
    ComplaintIdTooLong { max: usize, actual: usize },

    /// MessageContent validation error
    #[error("MessageContent cannot be empty")]
    MessageContentEmpty,

    /// MessageContent too long error
    #[error("MessageContent cannot exceed {max} characters (got {actual})")]
    MessageContentTooLong { max: usize, actual: usize },
}

/// Errors related to direct-message domain logic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// Sender and receiver must be distinct identities
    #[error("a message cannot be addressed to its own sender ({0})")]
    SelfAddressed(String),
}

/// Errors raised by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The referenced complaint does not exist
    #[error("complaint not found: {0}")]
    ComplaintNotFound(String),

    /// The backing store rejected the operation
    #[error("storage failure: {0}")]
    Storage(String),
}
