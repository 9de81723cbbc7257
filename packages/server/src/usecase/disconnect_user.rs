//! UseCase: 切断処理
//!
//! トランスポート層が接続断を検知したときに呼ばれます。接続がユーザー
//! にバインドされていた場合のみ Presence エントリを外します。冪等です。

use std::sync::Arc;

use crate::domain::{PresenceRegistry, UserId};

/// 切断処理のユースケース
pub struct DisconnectUserUseCase {
    presence: Arc<dyn PresenceRegistry>,
}

impl DisconnectUserUseCase {
    /// 新しい DisconnectUserUseCase を作成
    pub fn new(presence: Arc<dyn PresenceRegistry>) -> Self {
        Self { presence }
    }

    /// 切断処理を実行
    ///
    /// エントリが既に存在しない場合は何も起こりません。
    pub async fn execute(&self, user: &UserId) {
        self.presence.unbind(user).await;
    }
}
