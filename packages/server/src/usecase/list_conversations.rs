//! UseCase: 会話一覧取得処理
//!
//! 相手ごとに最新の1件だけを持つ一覧を、その最新メッセージの新しい順で
//! 返します。グループ化の前に降順ソートを適用することで「グループ内の
//! 最新」が正しくなります（集約の責務は Repository 側）。

use std::sync::Arc;

use crate::domain::{ConversationEntry, MessageRepository, UserId};

/// 会話一覧取得のユースケース
pub struct ListConversationsUseCase {
    messages: Arc<dyn MessageRepository>,
}

impl ListConversationsUseCase {
    /// 新しい ListConversationsUseCase を作成
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// ユーザーの会話一覧を取得
    pub async fn execute(&self, user: &UserId) -> Vec<ConversationEntry> {
        self.messages.latest_per_counterpart(user).await
    }
}
