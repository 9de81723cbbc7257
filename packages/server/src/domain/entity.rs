//! Core domain models for the real-time subsystem.

use serde::{Deserialize, Serialize};

use super::{
    error::MessageError,
    value_object::{ComplaintId, MessageContent, MessageId, Timestamp, UserId},
};

/// A persisted unit of one-to-one communication.
///
/// Created by the relay on send; the only later mutation is flipping the
/// read flag when the receiving side fetches history. Never deleted by this
/// subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectMessage {
    /// Message identifier
    pub id: MessageId,
    /// Sender identity
    pub sender: UserId,
    /// Receiver identity
    pub receiver: UserId,
    /// Message content
    pub content: MessageContent,
    /// Timestamp when the message was created
    pub created_at: Timestamp,
    /// Whether the receiver has fetched this message
    pub read: bool,
}

impl DirectMessage {
    /// Create a new unread direct message.
    ///
    /// # Errors
    ///
    /// Returns `MessageError::SelfAddressed` when sender and receiver are
    /// the same identity.
    pub fn new(
        id: MessageId,
        sender: UserId,
        receiver: UserId,
        content: MessageContent,
        created_at: Timestamp,
    ) -> Result<Self, MessageError> {
        if sender == receiver {
            return Err(MessageError::SelfAddressed(sender.into_string()));
        }
        Ok(Self {
            id,
            sender,
            receiver,
            content,
            created_at,
            read: false,
        })
    }

    /// True when this message sits between the given pair, in either order.
    pub fn is_between(&self, a: &UserId, b: &UserId) -> bool {
        (&self.sender == a && &self.receiver == b) || (&self.sender == b && &self.receiver == a)
    }

    /// The other party of this message from `user`'s point of view.
    pub fn counterpart_of(&self, user: &UserId) -> &UserId {
        if &self.sender == user {
            &self.receiver
        } else {
            &self.sender
        }
    }

    /// Mark the message as read.
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

/// A comment on a complaint.
///
/// Arrives fully formed from the commenting client (identifier, author,
/// display name, text, timestamp) and is persisted unchanged. Comments are
/// append-only; this subsystem never edits or removes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier, generated by the commenting client
    pub id: String,
    /// Author identity
    pub user_id: UserId,
    /// Author display name at the time of commenting
    pub user_name: String,
    /// Comment text
    pub text: String,
    /// Timestamp when the comment was created
    pub created_at: Timestamp,
}

impl Comment {
    /// Create a new comment record.
    pub fn new(
        id: String,
        user_id: UserId,
        user_name: String,
        text: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            user_name,
            text,
            created_at,
        }
    }
}

/// The durable social subset of a complaint record.
///
/// Likes deliberately do not appear here: the observed design keeps the like
/// set in a process-local cache only (a durability gap this subsystem
/// reproduces rather than fixes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    /// Complaint identifier
    pub id: ComplaintId,
    /// Ordered, append-only comment list
    pub comments: Vec<Comment>,
}

impl Complaint {
    /// Create a complaint record with no comments yet.
    pub fn new(id: ComplaintId) -> Self {
        Self {
            id,
            comments: Vec::new(),
        }
    }

    /// Append a comment to the complaint.
    pub fn append_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

/// One conversation partner of a user, carrying only the latest exchanged
/// message.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEntry {
    /// The other party of the conversation
    pub counterpart: UserId,
    /// Most recent message exchanged with the counterpart
    pub last_message: DirectMessage,
}
