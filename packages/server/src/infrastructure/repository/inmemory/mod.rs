//! プロセス内 HashMap/Vec を用いた Repository 実装群。

pub mod complaint;
pub mod likes;
pub mod message;
pub mod presence;

pub use complaint::InMemoryComplaintRepository;
pub use likes::InMemoryLikeCache;
pub use message::InMemoryMessageRepository;
pub use presence::InMemoryPresenceRegistry;
