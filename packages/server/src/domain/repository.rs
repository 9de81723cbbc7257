//! Repository and collaborator traits owned by the domain layer.
//!
//! The usecase layer depends on these traits only; the infrastructure layer
//! supplies the implementations (依存性の逆転). The presence registry and
//! like cache are trait-shaped so a shared-store-backed implementation can
//! replace the process-local default when the portal ever scales past one
//! instance.

use async_trait::async_trait;

use super::{
    entity::{Complaint, Comment, ConversationEntry, DirectMessage},
    error::RepositoryError,
    value_object::{ComplaintId, ConnectionId, LikeToggle, UserId},
};

/// Durable storage for direct messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a freshly created message.
    async fn save(&self, message: DirectMessage) -> Result<(), RepositoryError>;

    /// All messages between the pair, in either direction, ascending by
    /// creation time.
    async fn history_between(&self, a: &UserId, b: &UserId) -> Vec<DirectMessage>;

    /// Flip the read flag on every still-unread message from `from` to `to`.
    ///
    /// The update is filtered by that predicate rather than overwriting a
    /// snapshot, so a message inserted concurrently is never clobbered.
    /// Returns the number of messages marked.
    async fn mark_read(&self, from: &UserId, to: &UserId) -> usize;

    /// One entry per distinct counterpart of `user`, each holding only the
    /// most recent message, ordered by that message's recency (newest
    /// first).
    async fn latest_per_counterpart(&self, user: &UserId) -> Vec<ConversationEntry>;
}

/// Durable storage for the social subset of complaint records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Insert a complaint record (used by the composition root and tests;
    /// complaint CRUD proper lives outside this subsystem).
    async fn insert(&self, complaint: Complaint) -> Result<(), RepositoryError>;

    /// Fetch a complaint with its comment list.
    async fn find(&self, complaint_id: &ComplaintId) -> Result<Complaint, RepositoryError>;

    /// Atomically append one comment to the complaint's comment list.
    ///
    /// Push-only: implementations must never rewrite the whole list, so
    /// concurrent commenters cannot lose each other's appends.
    async fn append_comment(
        &self,
        complaint_id: &ComplaintId,
        comment: Comment,
    ) -> Result<(), RepositoryError>;
}

/// Mapping of user identity to the connection currently carrying it.
///
/// At most one live connection per user at any instant;
/// last-authenticated-wins when a user opens a second connection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PresenceRegistry: Send + Sync {
    /// Insert or overwrite the entry for `user`.
    async fn bind(&self, user: UserId, connection: ConnectionId);

    /// Remove the entry for `user`. Idempotent.
    async fn unbind(&self, user: &UserId);

    /// The connection currently bound to `user`, if any.
    async fn lookup(&self, user: &UserId) -> Option<ConnectionId>;

    /// Snapshot of all users currently holding a live connection.
    async fn online_users(&self) -> Vec<UserId>;
}

/// Process-local cache of per-complaint like sets.
///
/// This is the canonical (and only) home of like state for one deployment's
/// uptime; it is not reconciled with durable storage on restart. Reproduced
/// from the observed design, flagged as a durability gap.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeCache: Send + Sync {
    /// Apply a like/unlike toggle and return the complete updated like set,
    /// sorted for deterministic broadcasts. Both directions are idempotent.
    async fn apply(&self, complaint: &ComplaintId, user: UserId, toggle: LikeToggle)
    -> Vec<UserId>;

    /// Current like set for a complaint, sorted.
    async fn likes_for(&self, complaint: &ComplaintId) -> Vec<UserId>;
}

/// External collaborator that turns a caller-supplied identity claim into a
/// trusted UserId.
///
/// The observed design trusts whatever the client sends at authenticate
/// time; the default implementation reproduces that trust boundary. Real
/// deployments must plug in a verifier that binds the claim to a verified
/// session token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Resolve a claimed identity to a UserId, or reject it.
    async fn verify(&self, claimed: &str) -> Result<UserId, super::error::ValueObjectError>;
}
