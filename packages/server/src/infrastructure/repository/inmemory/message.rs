//! InMemory Message Repository 実装
//!
//! ドメイン層が定義する MessageRepository trait の具体的な実装。
//! Vec をインメモリ DB として使用します。
//!
//! ## 技術的負債
//!
//! 現在、ドメインモデル（`DirectMessage`）を直接ストレージとして使用して
//! います。これは InMemory 実装では許容される妥協ですが、将来 DBMS を
//! 実装する際は DTO との変換層が必要になります。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ConversationEntry, DirectMessage, MessageRepository, RepositoryError, UserId,
};

/// インメモリ Message Repository 実装
pub struct InMemoryMessageRepository {
    /// 全メッセージ（挿入順）
    messages: Arc<Mutex<Vec<DirectMessage>>>,
}

impl InMemoryMessageRepository {
    /// 新しい InMemoryMessageRepository を作成
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 保存済みメッセージ数（テスト・診断用）
    pub async fn count(&self) -> usize {
        let messages = self.messages.lock().await;
        messages.len()
    }
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn save(&self, message: DirectMessage) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        messages.push(message);
        Ok(())
    }

    async fn history_between(&self, a: &UserId, b: &UserId) -> Vec<DirectMessage> {
        let messages = self.messages.lock().await;
        let mut history: Vec<DirectMessage> = messages
            .iter()
            .filter(|m| m.is_between(a, b))
            .cloned()
            .collect();
        // Stable sort: same-timestamp messages keep insertion order.
        history.sort_by_key(|m| m.created_at);
        history
    }

    async fn mark_read(&self, from: &UserId, to: &UserId) -> usize {
        let mut messages = self.messages.lock().await;
        let mut marked = 0;
        for message in messages.iter_mut() {
            if &message.sender == from && &message.receiver == to && !message.read {
                message.mark_read();
                marked += 1;
            }
        }
        marked
    }

    async fn latest_per_counterpart(&self, user: &UserId) -> Vec<ConversationEntry> {
        let messages = self.messages.lock().await;
        let mut involving: Vec<DirectMessage> = messages
            .iter()
            .filter(|m| &m.sender == user || &m.receiver == user)
            .cloned()
            .collect();
        // Descending time sort applied before grouping, so taking the first
        // message seen per counterpart yields the most recent one.
        involving.sort_by(|x, y| y.created_at.cmp(&x.created_at));

        let mut entries: Vec<ConversationEntry> = Vec::new();
        for message in involving {
            let counterpart = message.counterpart_of(user).clone();
            if entries.iter().any(|e| e.counterpart == counterpart) {
                continue;
            }
            entries.push(ConversationEntry {
                counterpart,
                last_message: message,
            });
        }
        entries
    }
}
