//! Policy domain ports

use async_trait::async_trait;
use core_kernel::{DomainPort, PartyId, PolicyId, PortError};

use crate::policy::Policy;

/// Port trait for policy storage
#[async_trait]
pub trait PolicyRepository: DomainPort {
    /// Retrieves a policy by id, or `PortError::NotFound`
    async fn get_policy(&self, id: PolicyId) -> Result<Policy, PortError>;

    /// Returns every policy held by the customer, order unspecified
    async fn find_by_customer(&self, customer_id: PartyId) -> Result<Vec<Policy>, PortError>;

    /// Returns every policy bound by the agent, order unspecified
    async fn find_by_agent(&self, agent_id: PartyId) -> Result<Vec<Policy>, PortError>;

    /// Inserts or replaces a policy record
    async fn save_policy(&self, policy: &Policy) -> Result<(), PortError>;

    /// Hard-deletes a policy, or `PortError::NotFound`
    async fn delete_policy(&self, id: PolicyId) -> Result<(), PortError>;
}

/// Referential guard consulted before deleting a policy
///
/// Implemented by whichever adapter can see the claims collection; the
/// policy domain itself stays independent of the claims domain.
#[async_trait]
pub trait ClaimsGuard: DomainPort {
    /// Returns true when any claim references the policy
    async fn has_claims(&self, policy_id: PolicyId) -> Result<bool, PortError>;
}

/// In-memory mock implementations for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use tokio::sync::RwLock;

    /// Mock policy store backed by a `HashMap`
    #[derive(Debug, Default)]
    pub struct MockPolicyRepository {
        policies: RwLock<HashMap<PolicyId, Policy>>,
    }

    impl MockPolicyRepository {
        /// Creates an empty mock store
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl DomainPort for MockPolicyRepository {}

    #[async_trait]
    impl PolicyRepository for MockPolicyRepository {
        async fn get_policy(&self, id: PolicyId) -> Result<Policy, PortError> {
            self.policies
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Policy", id))
        }

        async fn find_by_customer(&self, customer_id: PartyId) -> Result<Vec<Policy>, PortError> {
            Ok(self
                .policies
                .read()
                .await
                .values()
                .filter(|p| p.customer_id == customer_id)
                .cloned()
                .collect())
        }

        async fn find_by_agent(&self, agent_id: PartyId) -> Result<Vec<Policy>, PortError> {
            Ok(self
                .policies
                .read()
                .await
                .values()
                .filter(|p| p.agent_id == agent_id)
                .cloned()
                .collect())
        }

        async fn save_policy(&self, policy: &Policy) -> Result<(), PortError> {
            self.policies.write().await.insert(policy.id, policy.clone());
            Ok(())
        }

        async fn delete_policy(&self, id: PolicyId) -> Result<(), PortError> {
            self.policies
                .write()
                .await
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Policy", id))
        }
    }

    /// Mock claims guard holding an explicit set of claimed policies
    #[derive(Debug, Default)]
    pub struct MockClaimsGuard {
        claimed: RwLock<HashSet<PolicyId>>,
    }

    impl MockClaimsGuard {
        /// Creates a guard that reports no claims anywhere
        pub fn new() -> Self {
            Self::default()
        }

        /// Marks a policy as having claims attached
        pub async fn attach_claim(&self, policy_id: PolicyId) {
            self.claimed.write().await.insert(policy_id);
        }
    }

    impl DomainPort for MockClaimsGuard {}

    #[async_trait]
    impl ClaimsGuard for MockClaimsGuard {
        async fn has_claims(&self, policy_id: PolicyId) -> Result<bool, PortError> {
            Ok(self.claimed.read().await.contains(&policy_id))
        }
    }
}
