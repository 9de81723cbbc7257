//! UseCase: いいねトグル処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ToggleLikeUseCase::execute() メソッド
//! - いいね集合の冪等な追加・削除と、ブロードキャスト用の完全な集合の返却
//!
//! ### なぜこのテストが必要か
//! - 冪等性（like 二重適用・非いいねユーザーの unlike）は外部仕様
//! - クライアントは楽観的にローカル状態を変え、ブロードキャストの
//!   エコーで収束するため、返る集合は常に完全である必要がある
//!
//! ### どのような状況を想定しているか
//! - 正常系：like / unlike の適用
//! - 異常系：不正な ID

use std::sync::Arc;

use crate::domain::{ComplaintId, LikeCache, LikeToggle, UserId};

use super::error::ToggleLikeError;

/// いいねトグルのユースケース
///
/// 永続化は行いません。like 集合はプロセスメモリ上のキャッシュにのみ
/// 存在します（観測された設計の永続性ギャップを保存）。
pub struct ToggleLikeUseCase {
    likes: Arc<dyn LikeCache>,
}

impl ToggleLikeUseCase {
    /// 新しい ToggleLikeUseCase を作成
    pub fn new(likes: Arc<dyn LikeCache>) -> Self {
        Self { likes }
    }

    /// いいねトグルを実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - 更新後の完全ないいね集合（全接続へのブロードキャスト用）
    /// * `Err(ToggleLikeError)` - ID の検証失敗
    pub async fn execute(
        &self,
        complaint_id: String,
        user_id: String,
        toggle: LikeToggle,
    ) -> Result<Vec<String>, ToggleLikeError> {
        let complaint =
            ComplaintId::new(complaint_id).map_err(|_| ToggleLikeError::InvalidComplaintId)?;
        let user = UserId::new(user_id).map_err(|_| ToggleLikeError::InvalidUserId)?;

        let likes = self.likes.apply(&complaint, user, toggle).await;
        Ok(likes.into_iter().map(UserId::into_string).collect())
    }
}
