//! InMemory Presence Registry 実装
//!
//! ドメイン層が定義する PresenceRegistry trait の具体的な実装。
//! HashMap をプロセス内ストアとして使用します。
//!
//! プロセスローカルであるため、複数インスタンス構成では送信者と受信者が
//! 別インスタンスに接続すると配送されません（既知のアーキテクチャ上の制約）。
//! 水平スケールが必要になった場合は共有ストア実装に差し替えます。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, PresenceRegistry, UserId};

/// インメモリ Presence Registry 実装
pub struct InMemoryPresenceRegistry {
    /// user identity → 現在の接続 ID
    entries: Arc<Mutex<HashMap<UserId, ConnectionId>>>,
}

impl InMemoryPresenceRegistry {
    /// 新しい InMemoryPresenceRegistry を作成
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryPresenceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PresenceRegistry for InMemoryPresenceRegistry {
    async fn bind(&self, user: UserId, connection: ConnectionId) {
        let mut entries = self.entries.lock().await;
        // Last-authenticated-wins: a prior mapping is silently replaced.
        entries.insert(user, connection);
    }

    async fn unbind(&self, user: &UserId) {
        let mut entries = self.entries.lock().await;
        entries.remove(user);
    }

    async fn lookup(&self, user: &UserId) -> Option<ConnectionId> {
        let entries = self.entries.lock().await;
        entries.get(user).cloned()
    }

    async fn online_users(&self) -> Vec<UserId> {
        let entries = self.entries.lock().await;
        let mut users: Vec<UserId> = entries.keys().cloned().collect();
        users.sort();
        users
    }
}
