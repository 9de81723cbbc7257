//! Infrastructure layer: concrete repository implementations, identity
//! collaborator, and HTTP DTOs.

pub mod dto;
pub mod identity;
pub mod repository;

pub use identity::TrustedIdentityVerifier;
pub use repository::{
    InMemoryComplaintRepository, InMemoryLikeCache, InMemoryMessageRepository,
    InMemoryPresenceRegistry,
};
