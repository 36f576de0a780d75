//! Claims domain ports

use async_trait::async_trait;
use core_kernel::{ClaimId, DomainPort, PolicyId, PortError};

use crate::claim::Claim;

/// Port trait for claim storage
#[async_trait]
pub trait ClaimRepository: DomainPort {
    /// Retrieves a claim by id, or `PortError::NotFound`
    async fn get_claim(&self, id: ClaimId) -> Result<Claim, PortError>;

    /// Returns every claim filed against the policy, order unspecified
    async fn find_by_policy(&self, policy_id: PolicyId) -> Result<Vec<Claim>, PortError>;

    /// Persists a claim
    async fn save_claim(&self, claim: &Claim) -> Result<(), PortError>;

    /// Atomically appends a document path and returns the updated claim
    ///
    /// The append either lands whole or not at all; a reader can never see
    /// a partially written trail.
    async fn append_document(&self, id: ClaimId, path: &str) -> Result<Claim, PortError>;
}

/// In-memory mock implementation for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    /// Mock claim store backed by a `HashMap`
    #[derive(Debug, Default)]
    pub struct MockClaimRepository {
        claims: RwLock<HashMap<ClaimId, Claim>>,
    }

    impl MockClaimRepository {
        /// Creates an empty mock store
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl DomainPort for MockClaimRepository {}

    #[async_trait]
    impl ClaimRepository for MockClaimRepository {
        async fn get_claim(&self, id: ClaimId) -> Result<Claim, PortError> {
            self.claims
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Claim", id))
        }

        async fn find_by_policy(&self, policy_id: PolicyId) -> Result<Vec<Claim>, PortError> {
            Ok(self
                .claims
                .read()
                .await
                .values()
                .filter(|c| c.policy_id == policy_id)
                .cloned()
                .collect())
        }

        async fn save_claim(&self, claim: &Claim) -> Result<(), PortError> {
            self.claims.write().await.insert(claim.id, claim.clone());
            Ok(())
        }

        async fn append_document(&self, id: ClaimId, path: &str) -> Result<Claim, PortError> {
            let mut claims = self.claims.write().await;
            let claim = claims
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Claim", id))?;
            claim.append_document(path);
            Ok(claim.clone())
        }
    }
}
