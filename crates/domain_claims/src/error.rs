//! Claims domain errors

use core_kernel::{ClaimId, PartyId, PolicyId, PortError};
use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    /// The referenced claim does not resolve
    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    /// The referenced policy does not resolve
    #[error("Policy not found: {0}")]
    PolicyNotFound(PolicyId),

    /// The referenced customer does not resolve
    #[error("Customer not found: {0}")]
    CustomerNotFound(PartyId),

    /// The underlying store rejected the operation
    #[error(transparent)]
    Storage(#[from] PortError),
}

impl ClaimError {
    /// Returns true when the failure means a referenced id did not resolve
    pub fn is_not_found(&self) -> bool {
        match self {
            ClaimError::ClaimNotFound(_)
            | ClaimError::PolicyNotFound(_)
            | ClaimError::CustomerNotFound(_) => true,
            ClaimError::Storage(port) => port.is_not_found(),
        }
    }
}
