//! UseCase 層のエラー定義

use thiserror::Error;

/// 接続認証時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthenticateError {
    /// 提示された ID が検証を通らなかった
    #[error("invalid user identity: {0}")]
    InvalidIdentity(String),
}

/// メッセージ送信時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// 受信者 ID が不正
    #[error("invalid receiver identity")]
    InvalidReceiver,

    /// メッセージ内容が空または長すぎる
    #[error("message content is empty")]
    InvalidContent,

    /// 自分自身への送信
    #[error("cannot send a message to yourself")]
    SelfAddressed,

    /// 永続化に失敗
    #[error("failed to save message")]
    PersistenceFailed,
}

/// いいねトグル時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToggleLikeError {
    /// 苦情 ID が不正
    #[error("invalid complaint identity")]
    InvalidComplaintId,

    /// ユーザー ID が不正
    #[error("invalid user identity")]
    InvalidUserId,
}

/// コメント追記時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddCommentError {
    /// 苦情 ID が不正
    #[error("invalid complaint identity")]
    InvalidComplaintId,

    /// 永続化に失敗（ブロードキャストは行われない）
    #[error("failed to persist comment: {0}")]
    PersistenceFailed(String),
}
