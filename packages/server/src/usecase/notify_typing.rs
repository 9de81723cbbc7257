//! UseCase: タイピングインジケーター転送
//!
//! 永続化も ACK もない一時的なシグナル。相手が在席していればその接続に
//! だけ届き、不在なら黙って捨てられます（再送なし）。レート制限は
//! サーバー側では行わず、送信側 UI のデバウンスに任せます。

use std::sync::Arc;

use crate::domain::{ConnectionId, PresenceRegistry, UserId};

/// タイピングインジケーター転送のユースケース
pub struct NotifyTypingUseCase {
    presence: Arc<dyn PresenceRegistry>,
}

impl NotifyTypingUseCase {
    /// 新しい NotifyTypingUseCase を作成
    pub fn new(presence: Arc<dyn PresenceRegistry>) -> Self {
        Self { presence }
    }

    /// 転送先の接続を解決
    ///
    /// # Returns
    ///
    /// * `Some(ConnectionId)` - 相手の接続（ユニキャスト先）
    /// * `None` - 相手が不在、または受信者 ID が不正（黙殺）
    pub async fn execute(&self, receiver_id: &str) -> Option<ConnectionId> {
        let receiver = UserId::new(receiver_id.to_string()).ok()?;
        self.presence.lookup(&receiver).await
    }
}
