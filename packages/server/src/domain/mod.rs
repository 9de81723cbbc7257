//! Domain layer for the real-time subsystem.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{Comment, Complaint, ConversationEntry, DirectMessage};
pub use error::{MessageError, RepositoryError, ValueObjectError};
pub use factory::{ConnectionIdFactory, MessageIdFactory};
pub use repository::{
    ComplaintRepository, IdentityVerifier, LikeCache, MessageRepository, PresenceRegistry,
};
pub use value_object::{
    ComplaintId, ConnectionId, LikeToggle, MessageContent, MessageId, Timestamp, UserId,
};
