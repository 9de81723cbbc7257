//! Default identity collaborator.
//!
//! The portal delegates authentication to an external identity provider; at
//! the real-time layer the observed design simply trusts the identity the
//! client claims. `TrustedIdentityVerifier` reproduces that trust boundary
//! verbatim. Deployments that need real verification swap in an
//! implementation that checks the claim against a session token.

use async_trait::async_trait;

use crate::domain::{IdentityVerifier, UserId, ValueObjectError};

/// Accepts any syntactically valid caller-supplied identity.
pub struct TrustedIdentityVerifier;

#[async_trait]
impl IdentityVerifier for TrustedIdentityVerifier {
    async fn verify(&self, claimed: &str) -> Result<UserId, ValueObjectError> {
        UserId::new(claimed.to_string())
    }
}
