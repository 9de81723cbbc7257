//! InMemory Like Cache 実装
//!
//! プロセスローカルな「いいね」集合。永続化は行わず、再起動時に
//! ストレージと照合もされません（観測された設計の再現であり、
//! 既知の永続性ギャップ）。

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ComplaintId, LikeCache, LikeToggle, UserId};

/// インメモリ Like Cache 実装
pub struct InMemoryLikeCache {
    /// complaint → liking users
    likes: Arc<Mutex<HashMap<ComplaintId, HashSet<UserId>>>>,
}

impl InMemoryLikeCache {
    /// 新しい InMemoryLikeCache を作成
    pub fn new() -> Self {
        Self {
            likes: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryLikeCache {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted(set: &HashSet<UserId>) -> Vec<UserId> {
    let mut users: Vec<UserId> = set.iter().cloned().collect();
    users.sort();
    users
}

#[async_trait]
impl LikeCache for InMemoryLikeCache {
    async fn apply(
        &self,
        complaint: &ComplaintId,
        user: UserId,
        toggle: LikeToggle,
    ) -> Vec<UserId> {
        // Mutation and snapshot happen under one lock hold, so back-to-back
        // toggles observe deterministic last-writer ordering.
        let mut likes = self.likes.lock().await;
        let set = likes.entry(complaint.clone()).or_default();
        match toggle {
            LikeToggle::Like => {
                set.insert(user);
            }
            LikeToggle::Unlike => {
                set.remove(&user);
            }
        }
        sorted(set)
    }

    async fn likes_for(&self, complaint: &ComplaintId) -> Vec<UserId> {
        let likes = self.likes.lock().await;
        likes.get(complaint).map(sorted).unwrap_or_default()
    }
}
