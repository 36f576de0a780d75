//! Claim aggregate

use chrono::{DateTime, Utc};
use core_kernel::{ClaimId, ClaimNumber, PartyId, PolicyId};
use serde::{Deserialize, Serialize};

/// Claim lifecycle status
///
/// Claims are filed as `New`; the remaining variants reserve the state
/// space for the adjudication flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    New,
    InReview,
    Approved,
    Denied,
    Closed,
}

/// A request for compensation filed against a policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Human-readable reference, unique and immutable
    pub claim_number: ClaimNumber,
    /// Policy the claim is filed against
    pub policy_id: PolicyId,
    /// Filing customer
    pub customer_id: PartyId,
    /// Loss description
    pub description: String,
    /// Lifecycle status
    pub status: ClaimStatus,
    /// Attached document references, append-only, insertion order
    pub document_paths: Vec<String>,
    /// Filing timestamp
    pub created_at: DateTime<Utc>,
}

impl Claim {
    /// Files a new claim with an empty document trail
    pub fn file(
        policy_id: PolicyId,
        customer_id: PartyId,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ClaimId::new(),
            claim_number: ClaimNumber::generate(),
            policy_id,
            customer_id,
            description: description.into(),
            status: ClaimStatus::New,
            document_paths: Vec::new(),
            created_at,
        }
    }

    /// Appends a document reference to the trail
    ///
    /// Paths are stored verbatim; the same path may appear more than once.
    /// There is no removal operation.
    pub fn append_document(&mut self, path: impl Into<String>) {
        self.document_paths.push(path.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filed_claim_starts_new_and_empty() {
        let claim = Claim::file(PolicyId::new(), PartyId::new(), "Rear-ended", Utc::now());

        assert_eq!(claim.status, ClaimStatus::New);
        assert!(claim.document_paths.is_empty());
        assert!(claim.claim_number.as_str().starts_with("MER-CLM-"));
    }

    #[test]
    fn documents_append_in_order_and_allow_duplicates() {
        let mut claim = Claim::file(PolicyId::new(), PartyId::new(), "Hail damage", Utc::now());

        claim.append_document("/a");
        claim.append_document("/b");
        claim.append_document("/a");

        assert_eq!(claim.document_paths, vec!["/a", "/b", "/a"]);
    }
}
