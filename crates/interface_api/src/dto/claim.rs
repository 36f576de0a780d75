//! Claim DTOs

use chrono::{DateTime, Utc};
use core_kernel::{ClaimId, PartyId, PolicyId};
use domain_claims::{Claim, ClaimStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct FileClaimRequest {
    pub policy_id: PolicyId,
    pub customer_id: PartyId,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UploadDocumentRequest {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: ClaimId,
    pub claim_number: String,
    pub policy_id: PolicyId,
    pub customer_id: PartyId,
    pub description: String,
    pub status: ClaimStatus,
    pub document_paths: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ClaimResponse {
    /// Projects a claim onto its response shape
    pub fn from_domain(claim: &Claim) -> Self {
        Self {
            id: claim.id,
            claim_number: claim.claim_number.to_string(),
            policy_id: claim.policy_id,
            customer_id: claim.customer_id,
            description: claim.description.clone(),
            status: claim.status,
            document_paths: claim.document_paths.clone(),
            created_at: claim.created_at,
        }
    }
}
