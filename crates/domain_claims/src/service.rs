//! Claims lifecycle service

use std::sync::Arc;

use core_kernel::{ClaimId, Clock, PartyId, PolicyId, PortError};
use domain_party::PartyPort;
use domain_policy::PolicyRepository;

use crate::claim::Claim;
use crate::error::ClaimError;
use crate::ports::ClaimRepository;

/// Application service for the claims lifecycle
///
/// Filing only requires that the policy and customer resolve. Whether the
/// filing customer actually holds the policy is an authorization concern
/// and is checked upstream, not here.
pub struct ClaimService {
    claims: Arc<dyn ClaimRepository>,
    policies: Arc<dyn PolicyRepository>,
    parties: Arc<dyn PartyPort>,
    clock: Arc<dyn Clock>,
}

impl ClaimService {
    /// Creates the service over its collaborating ports
    pub fn new(
        claims: Arc<dyn ClaimRepository>,
        policies: Arc<dyn PolicyRepository>,
        parties: Arc<dyn PartyPort>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            claims,
            policies,
            parties,
            clock,
        }
    }

    /// Files a new claim against a policy
    pub async fn file(
        &self,
        policy_id: PolicyId,
        customer_id: PartyId,
        description: &str,
    ) -> Result<Claim, ClaimError> {
        self.resolve_policy(policy_id).await?;
        self.parties
            .get_party(customer_id)
            .await
            .map_err(|e| not_found_as(e, ClaimError::CustomerNotFound(customer_id)))?;

        let claim = Claim::file(policy_id, customer_id, description, self.clock.now());
        self.claims.save_claim(&claim).await?;

        tracing::info!(
            claim_id = %claim.id,
            claim_number = %claim.claim_number,
            policy_id = %policy_id,
            "filed claim"
        );
        Ok(claim)
    }

    /// Retrieves a claim by id
    pub async fn get_by_id(&self, id: ClaimId) -> Result<Claim, ClaimError> {
        self.claims
            .get_claim(id)
            .await
            .map_err(|e| not_found_as(e, ClaimError::ClaimNotFound(id)))
    }

    /// Returns every claim filed against the policy
    ///
    /// The policy must resolve; a policy with no claims yields an empty
    /// vec, not an error.
    pub async fn get_by_policy(&self, policy_id: PolicyId) -> Result<Vec<Claim>, ClaimError> {
        self.resolve_policy(policy_id).await?;
        Ok(self.claims.find_by_policy(policy_id).await?)
    }

    /// Appends a document reference to a claim's trail
    ///
    /// The path is stored verbatim; validating that it points anywhere is
    /// the document store's concern.
    pub async fn upload_document(&self, claim_id: ClaimId, path: &str) -> Result<Claim, ClaimError> {
        let claim = self
            .claims
            .append_document(claim_id, path)
            .await
            .map_err(|e| not_found_as(e, ClaimError::ClaimNotFound(claim_id)))?;

        tracing::info!(claim_id = %claim_id, path, "attached claim document");
        Ok(claim)
    }

    async fn resolve_policy(&self, policy_id: PolicyId) -> Result<(), ClaimError> {
        self.policies
            .get_policy(policy_id)
            .await
            .map(|_| ())
            .map_err(|e| not_found_as(e, ClaimError::PolicyNotFound(policy_id)))
    }
}

/// Maps a port-level NotFound onto the domain's specific variant
fn not_found_as(error: PortError, not_found: ClaimError) -> ClaimError {
    if error.is_not_found() {
        not_found
    } else {
        ClaimError::Storage(error)
    }
}
