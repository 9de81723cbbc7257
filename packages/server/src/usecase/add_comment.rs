//! UseCase: コメント追記処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - AddCommentUseCase::execute() メソッド
//! - 永続化（アトミックな追記）とその成否によるブロードキャスト可否
//!
//! ### なぜこのテストが必要か
//! - 「永続化してからブロードキャスト」の順序により、クライアントが
//!   永続化されていないコメントを見ることはない
//! - 追記は push-only（配列全体の上書き禁止）で同時コメントに耐える
//!
//! ### どのような状況を想定しているか
//! - 正常系：コメント追記と追記後の取得
//! - 異常系：存在しない苦情、永続化失敗

use std::sync::Arc;

use crate::domain::{Comment, ComplaintId, ComplaintRepository, RepositoryError};

use super::error::AddCommentError;

/// コメント追記のユースケース
pub struct AddCommentUseCase {
    complaints: Arc<dyn ComplaintRepository>,
}

impl AddCommentUseCase {
    /// 新しい AddCommentUseCase を作成
    pub fn new(complaints: Arc<dyn ComplaintRepository>) -> Self {
        Self { complaints }
    }

    /// コメント追記を実行
    ///
    /// コメントは呼び出し側で構築済みのレコードをそのまま永続化します。
    ///
    /// # Returns
    ///
    /// * `Ok(Comment)` - 永続化されたコメント（ブロードキャスト用）
    /// * `Err(AddCommentError)` - 失敗（呼び出し側はブロードキャストしない）
    pub async fn execute(
        &self,
        complaint_id: String,
        comment: Comment,
    ) -> Result<Comment, AddCommentError> {
        let complaint =
            ComplaintId::new(complaint_id).map_err(|_| AddCommentError::InvalidComplaintId)?;

        self.complaints
            .append_comment(&complaint, comment.clone())
            .await
            .map_err(|e| match e {
                RepositoryError::ComplaintNotFound(id) => {
                    AddCommentError::PersistenceFailed(format!("complaint not found: {id}"))
                }
                RepositoryError::Storage(reason) => AddCommentError::PersistenceFailed(reason),
            })?;

        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Complaint, Timestamp, UserId, repository::MockComplaintRepository},
        infrastructure::InMemoryComplaintRepository,
    };

    fn comment(id: &str, author: &str, text: &str, at: i64) -> Comment {
        Comment::new(
            id.to_string(),
            UserId::new(author.to_string()).unwrap(),
            author.to_string(),
            text.to_string(),
            Timestamp::new(at),
        )
    }

    #[tokio::test]
    async fn test_add_comment_appends_to_complaint() {
        // テスト項目: コメントが永続化され、取得時に末尾要素として現れる
        // given (前提条件):
        let complaints = Arc::new(InMemoryComplaintRepository::new());
        let complaint_id = ComplaintId::new("c-1".to_string()).unwrap();
        complaints
            .insert(Complaint::new(complaint_id.clone()))
            .await
            .unwrap();
        let usecase = AddCommentUseCase::new(complaints.clone());

        // when (操作):
        let result = usecase
            .execute("c-1".to_string(), comment("cm-1", "alice", "Still broken", 1000))
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
        let found = complaints.find(&complaint_id).await.unwrap();
        assert_eq!(found.comments.len(), 1);
        assert_eq!(found.comments.last().unwrap().id, "cm-1");
    }

    #[tokio::test]
    async fn test_add_comment_to_missing_complaint_fails() {
        // テスト項目: 存在しない苦情への追記は PersistenceFailed になる
        // given (前提条件):
        let complaints = Arc::new(InMemoryComplaintRepository::new());
        let usecase = AddCommentUseCase::new(complaints);

        // when (操作):
        let result = usecase
            .execute("missing".to_string(), comment("cm-1", "alice", "hi", 0))
            .await;

        // then (期待する結果):
        assert!(matches!(
            result.unwrap_err(),
            AddCommentError::PersistenceFailed(_)
        ));
    }

    #[tokio::test]
    async fn test_add_comment_storage_failure() {
        // テスト項目: ストレージ障害は理由つきの PersistenceFailed になる
        // given (前提条件):
        let mut mock = MockComplaintRepository::new();
        mock.expect_append_comment()
            .returning(|_, _| Err(RepositoryError::Storage("write timeout".to_string())));
        let usecase = AddCommentUseCase::new(Arc::new(mock));

        // when (操作):
        let result = usecase
            .execute("c-1".to_string(), comment("cm-1", "alice", "hi", 0))
            .await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            AddCommentError::PersistenceFailed("write timeout".to_string())
        );
    }
}
