//! InMemory Complaint Repository 実装
//!
//! ドメイン層が定義する ComplaintRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! コメント追記は単一ロック内の push で行い、配列全体の書き戻しは
//! 行いません（同時コメント時の更新消失を防ぐため）。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Complaint, ComplaintId, ComplaintRepository, Comment, RepositoryError,
};

/// インメモリ Complaint Repository 実装
pub struct InMemoryComplaintRepository {
    complaints: Arc<Mutex<HashMap<ComplaintId, Complaint>>>,
}

impl InMemoryComplaintRepository {
    /// 新しい InMemoryComplaintRepository を作成
    pub fn new() -> Self {
        Self {
            complaints: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryComplaintRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ComplaintRepository for InMemoryComplaintRepository {
    async fn insert(&self, complaint: Complaint) -> Result<(), RepositoryError> {
        let mut complaints = self.complaints.lock().await;
        complaints.insert(complaint.id.clone(), complaint);
        Ok(())
    }

    async fn find(&self, complaint_id: &ComplaintId) -> Result<Complaint, RepositoryError> {
        let complaints = self.complaints.lock().await;
        complaints
            .get(complaint_id)
            .cloned()
            .ok_or_else(|| RepositoryError::ComplaintNotFound(complaint_id.to_string()))
    }

    async fn append_comment(
        &self,
        complaint_id: &ComplaintId,
        comment: Comment,
    ) -> Result<(), RepositoryError> {
        let mut complaints = self.complaints.lock().await;
        let complaint = complaints
            .get_mut(complaint_id)
            .ok_or_else(|| RepositoryError::ComplaintNotFound(complaint_id.to_string()))?;
        complaint.append_comment(comment);
        Ok(())
    }
}
