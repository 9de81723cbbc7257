//! UseCase: 接続認証処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - AuthenticateUserUseCase::execute() メソッド
//! - 提示された ID の検証と Presence Registry へのバインド
//!
//! ### なぜこのテストが必要か
//! - 後勝ち（last-authenticated-wins）の不変条件を保証
//! - 不正な ID が Presence に入り込まないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規認証、再認証（別接続での上書き）
//! - 異常系：空の ID

use std::sync::Arc;

use crate::domain::{ConnectionId, IdentityVerifier, PresenceRegistry, UserId};

use super::error::AuthenticateError;

/// 接続認証のユースケース
///
/// ID の検証は外部コラボレーター（IdentityVerifier）に委譲します。
/// 既定の実装はクライアントの申告をそのまま信頼します（観測された
/// 信頼境界の再現）。
pub struct AuthenticateUserUseCase {
    presence: Arc<dyn PresenceRegistry>,
    verifier: Arc<dyn IdentityVerifier>,
}

impl AuthenticateUserUseCase {
    /// 新しい AuthenticateUserUseCase を作成
    pub fn new(presence: Arc<dyn PresenceRegistry>, verifier: Arc<dyn IdentityVerifier>) -> Self {
        Self { presence, verifier }
    }

    /// 接続認証を実行
    ///
    /// # Arguments
    ///
    /// * `claimed_user_id` - クライアントが申告したユーザー ID
    /// * `connection` - この接続の ID
    ///
    /// # Returns
    ///
    /// * `Ok(UserId)` - バインドされたユーザー ID
    /// * `Err(AuthenticateError)` - 検証失敗
    pub async fn execute(
        &self,
        claimed_user_id: &str,
        connection: ConnectionId,
    ) -> Result<UserId, AuthenticateError> {
        let user = self
            .verifier
            .verify(claimed_user_id)
            .await
            .map_err(|_| AuthenticateError::InvalidIdentity(claimed_user_id.to_string()))?;

        // 既存のエントリは黙って置き換えられる（後勝ち）
        self.presence.bind(user.clone(), connection).await;

        Ok(user)
    }
}
