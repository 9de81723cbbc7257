//! WebSocket wire events exchanged between portal clients and the server.
//!
//! Event names are part of the deployed wire contract and are kept verbatim,
//! including the historical mix of snake_case (chat events) and kebab-case
//! (complaint social events).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Events sent by a client over its WebSocket connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientEvent {
    /// Bind this connection to a user identity.
    ///
    /// The identity is caller-supplied and trusted as-is; real deployments
    /// must bind it to a verified session token at the HTTP layer.
    #[serde(rename = "authenticate", rename_all = "camelCase")]
    Authenticate { user_id: String },

    /// Send a direct message to another user.
    #[serde(rename = "send_message", rename_all = "camelCase")]
    SendMessage { receiver_id: String, content: String },

    /// Ephemeral typing indicator for a direct-message conversation.
    #[serde(rename = "typing", rename_all = "camelCase")]
    Typing { receiver_id: String, is_typing: bool },

    /// Toggle the caller's like on a complaint.
    #[serde(rename = "toggle-like", rename_all = "camelCase")]
    ToggleLike {
        complaint_id: String,
        user_id: String,
        action: LikeAction,
    },

    /// Append a fully-formed comment to a complaint.
    #[serde(rename = "add-comment", rename_all = "camelCase")]
    AddComment {
        complaint_id: String,
        comment: CommentPayload,
    },
}

/// Events pushed by the server to connected clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerEvent {
    /// A direct message delivered to its receiver.
    #[serde(rename = "receive_message")]
    ReceiveMessage(MessagePayload),

    /// Confirmation echoed to the sender after the message persisted.
    ///
    /// Deliberately a distinct event from `receive_message` so the sender's
    /// UI can deduplicate against its optimistic local echo.
    #[serde(rename = "message_sent")]
    MessageSent(MessagePayload),

    /// A send attempt failed; local to that attempt, the connection stays up.
    #[serde(rename = "message_error")]
    MessageError { error: String },

    /// Typing indicator relayed to the counterpart.
    #[serde(rename = "user_typing", rename_all = "camelCase")]
    UserTyping { user_id: String, is_typing: bool },

    /// Presence change, broadcast to every connection except the subject's.
    #[serde(rename = "user_status", rename_all = "camelCase")]
    UserStatus {
        user_id: String,
        status: PresenceStatus,
    },

    /// Full updated like set for a complaint, broadcast to all connections.
    #[serde(rename = "like-update", rename_all = "camelCase")]
    LikeUpdate {
        complaint_id: String,
        likes: Vec<String>,
    },

    /// A newly persisted comment, broadcast to all connections.
    #[serde(rename = "comment-update", rename_all = "camelCase")]
    CommentUpdate {
        complaint_id: String,
        comment: CommentPayload,
    },
}

/// Direct message as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePayload {
    pub id: String,
    pub content: String,
    pub sender: String,
    pub receiver: String,
    /// Unix timestamp in milliseconds (JST).
    pub timestamp: i64,
}

/// Complaint comment as it appears on the wire.
///
/// Constructed by the commenting client; the server persists it unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub text: String,
    /// Unix timestamp in milliseconds (JST).
    pub created_at: i64,
}

/// Like toggle direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeAction {
    Like,
    Unlike,
}

/// Whether a user currently holds a live connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    Online,
    Offline,
}

impl fmt::Display for PresenceStatus {
    /// Renders the wire form (`online` / `offline`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Online => "online",
            Self::Offline => "offline",
        })
    }
}
