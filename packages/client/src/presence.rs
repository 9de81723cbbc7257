//! Client-side presence mirror.
//!
//! The portal UI keeps a per-user online/offline map: seeded once from the
//! server's presence snapshot, then driven by `user_status` events. Only
//! online users are retained; an offline notification removes the entry.

use std::collections::BTreeSet;

use madoguchi_shared::event::PresenceStatus;

/// Mirror of which users currently hold a live connection.
#[derive(Debug, Default)]
pub struct PresenceMirror {
    online: BTreeSet<String>,
}

impl PresenceMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the mirror from a snapshot, replacing whatever it held.
    pub fn seed(&mut self, users: Vec<String>) {
        self.online = users.into_iter().collect();
    }

    /// Apply one presence notification.
    pub fn apply(&mut self, user_id: String, status: PresenceStatus) {
        match status {
            PresenceStatus::Online => {
                self.online.insert(user_id);
            }
            PresenceStatus::Offline => {
                self.online.remove(&user_id);
            }
        }
    }

    /// All users currently online, sorted.
    pub fn online(&self) -> Vec<String> {
        self.online.iter().cloned().collect()
    }

    /// Whether the given user is currently online.
    pub fn is_online(&self, user_id: &str) -> bool {
        self.online.contains(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_replaces_previous_state() {
        // テスト項目: スナップショットの適用は既存の状態を置き換える
        // given (前提条件):
        let mut mirror = PresenceMirror::new();
        mirror.apply("carol".to_string(), PresenceStatus::Online);

        // when (操作):
        mirror.seed(vec!["bob".to_string(), "alice".to_string()]);

        // then (期待する結果): ソート済みで返り、seed 前のエントリは消える
        assert_eq!(mirror.online(), vec!["alice", "bob"]);
        assert!(!mirror.is_online("carol"));
    }

    #[test]
    fn test_status_events_update_the_map() {
        // テスト項目: user_status の online/offline がマップに反映される
        // given (前提条件):
        let mut mirror = PresenceMirror::new();

        // when (操作):
        mirror.apply("alice".to_string(), PresenceStatus::Online);
        mirror.apply("bob".to_string(), PresenceStatus::Online);
        mirror.apply("alice".to_string(), PresenceStatus::Offline);

        // then (期待する結果):
        assert!(!mirror.is_online("alice"));
        assert!(mirror.is_online("bob"));
        assert_eq!(mirror.online(), vec!["bob"]);
    }

    #[test]
    fn test_offline_for_unknown_user_is_noop() {
        // テスト項目: 未知のユーザーの offline 通知は無害
        // given (前提条件):
        let mut mirror = PresenceMirror::new();

        // when (操作):
        mirror.apply("ghost".to_string(), PresenceStatus::Offline);

        // then (期待する結果):
        assert!(mirror.online().is_empty());
    }

    #[test]
    fn test_duplicate_online_is_idempotent() {
        // テスト項目: 再認証などによる重複 online 通知は1エントリのまま
        // given (前提条件):
        let mut mirror = PresenceMirror::new();

        // when (操作):
        mirror.apply("alice".to_string(), PresenceStatus::Online);
        mirror.apply("alice".to_string(), PresenceStatus::Online);

        // then (期待する結果):
        assert_eq!(mirror.online(), vec!["alice"]);
    }
}
