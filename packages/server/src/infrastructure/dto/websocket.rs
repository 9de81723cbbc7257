//! WebSocket DTO 変換
//!
//! ワイヤーのペイロード（`madoguchi-shared`）とドメインのエンティティの
//! 相互変換。イベントのエンベロープ自体は shared 側で定義されています。

use madoguchi_shared::event::{CommentPayload, MessagePayload};

use crate::domain::{Comment, DirectMessage, Timestamp, UserId, ValueObjectError};

/// 永続化済みメッセージをワイヤー形式へ変換
pub fn message_to_payload(message: &DirectMessage) -> MessagePayload {
    MessagePayload {
        id: message.id.as_str().to_string(),
        content: message.content.as_str().to_string(),
        sender: message.sender.as_str().to_string(),
        receiver: message.receiver.as_str().to_string(),
        timestamp: message.created_at.value(),
    }
}

/// 永続化済みコメントをワイヤー形式へ変換
pub fn comment_to_payload(comment: &Comment) -> CommentPayload {
    CommentPayload {
        id: comment.id.clone(),
        user_id: comment.user_id.as_str().to_string(),
        user_name: comment.user_name.clone(),
        text: comment.text.clone(),
        created_at: comment.created_at.value(),
    }
}

/// クライアントが構築したコメントをドメインのレコードへ変換
///
/// 投稿者 ID の検証のみ行い、それ以外のフィールドはそのまま保持します。
pub fn comment_from_payload(payload: CommentPayload) -> Result<Comment, ValueObjectError> {
    let user_id = UserId::new(payload.user_id)?;
    Ok(Comment::new(
        payload.id,
        user_id,
        payload.user_name,
        payload.text,
        Timestamp::new(payload.created_at),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageContent, MessageIdFactory};

    #[test]
    fn test_message_to_payload_carries_all_fields() {
        // テスト項目: ドメインのメッセージがワイヤー形式に正しく写る
        // given (前提条件):
        let message = DirectMessage::new(
            MessageIdFactory::generate().unwrap(),
            UserId::new("alice".to_string()).unwrap(),
            UserId::new("bob".to_string()).unwrap(),
            MessageContent::new("Meeting at 5pm".to_string()).unwrap(),
            Timestamp::new(1000),
        )
        .unwrap();

        // when (操作):
        let payload = message_to_payload(&message);

        // then (期待する結果):
        assert_eq!(payload.sender, "alice");
        assert_eq!(payload.receiver, "bob");
        assert_eq!(payload.content, "Meeting at 5pm");
        assert_eq!(payload.timestamp, 1000);
    }

    #[test]
    fn test_comment_roundtrip_preserves_client_fields() {
        // テスト項目: クライアント構築のコメントはフィールドを保ったまま変換される
        // given (前提条件):
        let payload = CommentPayload {
            id: "cm-1".to_string(),
            user_id: "user-2".to_string(),
            user_name: "Tanaka".to_string(),
            text: "Same problem here".to_string(),
            created_at: 1234,
        };

        // when (操作):
        let comment = comment_from_payload(payload.clone()).unwrap();

        // then (期待する結果):
        assert_eq!(comment_to_payload(&comment), payload);
    }

    #[test]
    fn test_comment_with_empty_author_is_rejected() {
        // テスト項目: 投稿者 ID が空のコメントは変換できない
        // given (前提条件):
        let payload = CommentPayload {
            id: "cm-1".to_string(),
            user_id: "".to_string(),
            user_name: "Tanaka".to_string(),
            text: "hi".to_string(),
            created_at: 0,
        };

        // when (操作):
        let result = comment_from_payload(payload);

        // then (期待する結果):
        assert!(result.is_err());
    }
}
