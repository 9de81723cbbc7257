//! HTTP API response DTOs for the real-time subsystem.

use serde::{Deserialize, Serialize};

use madoguchi_shared::event::CommentPayload;
use madoguchi_shared::time::timestamp_to_jst_rfc3339;

use crate::domain::{ConversationEntry, DirectMessage};

/// Direct message for history and conversation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    pub sender: String,
    pub receiver: String,
    pub content: String,
    pub created_at: String, // ISO 8601
    pub read: bool,
}

impl From<&DirectMessage> for MessageDto {
    fn from(message: &DirectMessage) -> Self {
        Self {
            id: message.id.as_str().to_string(),
            sender: message.sender.as_str().to_string(),
            receiver: message.receiver.as_str().to_string(),
            content: message.content.as_str().to_string(),
            created_at: timestamp_to_jst_rfc3339(message.created_at.value()),
            read: message.read,
        }
    }
}

/// One conversation counterpart with its most recent message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDto {
    pub counterpart: String,
    pub last_message: MessageDto,
}

impl From<&ConversationEntry> for ConversationDto {
    fn from(entry: &ConversationEntry) -> Self {
        Self {
            counterpart: entry.counterpart.as_str().to_string(),
            last_message: MessageDto::from(&entry.last_message),
        }
    }
}

/// Social state of one complaint: cached likes plus persisted comments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintSocialDto {
    pub id: String,
    pub likes: Vec<String>,
    pub comments: Vec<CommentPayload>,
}

/// Snapshot of users currently online
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceSnapshotDto {
    pub online: Vec<String>,
}
