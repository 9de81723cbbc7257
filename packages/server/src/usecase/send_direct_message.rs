//! UseCase: ダイレクトメッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendDirectMessageUseCase::execute() メソッド
//! - メッセージ生成・永続化・受信者の在席判定
//!
//! ### なぜこのテストが必要か
//! - 「永続化してから配送」の順序はこのサブシステムの配送保証の根幹
//! - 受信者不在でも送信確認（message_sent）が返ることを保証
//! - 永続化失敗が接続ではなく当該送信だけのエラーになることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：受信者在席／不在の送信
//! - 異常系：不正な内容、自分宛て、永続化失敗

use std::sync::Arc;

use madoguchi_shared::time::get_jst_timestamp;

use crate::domain::{
    ConnectionId, DirectMessage, MessageContent, MessageIdFactory, MessageRepository,
    PresenceRegistry, Timestamp, UserId,
};

use super::error::SendMessageError;

/// 送信結果: 永続化されたメッセージと、受信者が在席していればその接続
#[derive(Debug, Clone, PartialEq)]
pub struct SendOutcome {
    /// 永続化されたメッセージ（確認イベントと受信イベントの両方に使う）
    pub message: DirectMessage,
    /// 受信者の接続（不在なら None、その場合ライブ配送は行われない）
    pub receiver_connection: Option<ConnectionId>,
}

/// ダイレクトメッセージ送信のユースケース
pub struct SendDirectMessageUseCase {
    messages: Arc<dyn MessageRepository>,
    presence: Arc<dyn PresenceRegistry>,
}

impl SendDirectMessageUseCase {
    /// 新しい SendDirectMessageUseCase を作成
    pub fn new(messages: Arc<dyn MessageRepository>, presence: Arc<dyn PresenceRegistry>) -> Self {
        Self { messages, presence }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `sender` - 認証済み送信者（UI 層で束縛済み）
    /// * `receiver_id` - 受信者のユーザー ID（ワイヤ形式）
    /// * `content` - メッセージ本文（トリム後に非空であること）
    ///
    /// # Returns
    ///
    /// * `Ok(SendOutcome)` - 永続化済みメッセージと受信者の在席情報
    /// * `Err(SendMessageError)` - 送信失敗（当該送信に限定、接続は維持）
    pub async fn execute(
        &self,
        sender: UserId,
        receiver_id: String,
        content: String,
    ) -> Result<SendOutcome, SendMessageError> {
        let receiver =
            UserId::new(receiver_id).map_err(|_| SendMessageError::InvalidReceiver)?;
        let content =
            MessageContent::new(content).map_err(|_| SendMessageError::InvalidContent)?;
        let id =
            MessageIdFactory::generate().map_err(|_| SendMessageError::PersistenceFailed)?;

        let message = DirectMessage::new(
            id,
            sender,
            receiver.clone(),
            content,
            Timestamp::new(get_jst_timestamp()),
        )
        .map_err(|_| SendMessageError::SelfAddressed)?;

        // 1. 先に永続化する。失敗したら配送は一切行わない。
        self.messages
            .save(message.clone())
            .await
            .map_err(|_| SendMessageError::PersistenceFailed)?;

        // 2. 受信者の在席を確認（不在なら履歴フェッチで追い付く）
        let receiver_connection = self.presence.lookup(&receiver).await;

        Ok(SendOutcome {
            message,
            receiver_connection,
        })
    }
}
