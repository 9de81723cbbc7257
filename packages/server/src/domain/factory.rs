//! Domain factories for creating domain entities and value objects.

use super::{ConnectionId, MessageId, error::ValueObjectError};

/// Factory for generating MessageId instances.
///
/// This factory encapsulates the logic for generating new message
/// identifiers, separating the generation concern from the MessageId type
/// itself.
pub struct MessageIdFactory;

impl MessageIdFactory {
    /// Generate a new MessageId with a random UUID v4.
    ///
    /// # Errors
    ///
    /// This method should not fail in practice, but returns Result for
    /// consistency with the domain error handling pattern.
    pub fn generate() -> Result<MessageId, ValueObjectError> {
        let uuid = uuid::Uuid::new_v4();
        MessageId::from_uuid(uuid)
    }
}

/// Factory for generating ConnectionId instances.
///
/// A fresh identifier is minted for every accepted WebSocket connection,
/// before the connection carries any user identity.
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    /// Generate a new ConnectionId with a random UUID v4.
    pub fn generate() -> ConnectionId {
        ConnectionId::from_uuid(uuid::Uuid::new_v4())
    }
}
