//! UseCase: 会話履歴取得処理
//!
//! 履歴の取得と「相手→自分」の未読メッセージの既読化を行う
//! read-and-mutate 操作。既読化は述語（相手から・自分宛て・未読）で
//! フィルタした更新であり、スナップショットの書き戻しではないため、
//! クエリ後に挿入されたメッセージを上書きすることはありません。

use std::sync::Arc;

use crate::domain::{DirectMessage, MessageRepository, UserId};

/// 会話履歴取得のユースケース
pub struct FetchHistoryUseCase {
    messages: Arc<dyn MessageRepository>,
}

impl FetchHistoryUseCase {
    /// 新しい FetchHistoryUseCase を作成
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// 会話履歴を取得し、相手からの未読メッセージを既読化
    ///
    /// 返される履歴は既読化前のスナップショット（作成時刻の昇順）。
    pub async fn execute(&self, requester: &UserId, counterpart: &UserId) -> Vec<DirectMessage> {
        let history = self.messages.history_between(requester, counterpart).await;
        let marked = self.messages.mark_read(counterpart, requester).await;
        if marked > 0 {
            tracing::debug!(
                "Marked {} messages from '{}' to '{}' as read",
                marked,
                counterpart,
                requester
            );
        }
        history
    }
}
