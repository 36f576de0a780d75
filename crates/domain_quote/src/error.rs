//! Quote domain errors

use core_kernel::{PartyId, PortError, QuoteId, VehicleId};
use thiserror::Error;

/// Errors that can occur in the quote domain
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The referenced customer does not resolve
    #[error("Customer not found: {0}")]
    CustomerNotFound(PartyId),

    /// The referenced vehicle does not resolve
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(VehicleId),

    /// The referenced quote does not resolve
    #[error("Quote not found: {0}")]
    QuoteNotFound(QuoteId),

    /// The quote is terminal and cannot be converted again
    #[error("Quote {0} has already been converted")]
    AlreadyConverted(QuoteId),

    /// The underlying store rejected the operation
    #[error(transparent)]
    Storage(#[from] PortError),
}

impl QuoteError {
    /// Returns true when the failure means a referenced id did not resolve
    pub fn is_not_found(&self) -> bool {
        match self {
            QuoteError::CustomerNotFound(_)
            | QuoteError::VehicleNotFound(_)
            | QuoteError::QuoteNotFound(_) => true,
            QuoteError::Storage(port) => port.is_not_found(),
            _ => false,
        }
    }

    /// Returns true when the failure means an invariant was violated
    pub fn is_invalid_state(&self) -> bool {
        match self {
            QuoteError::AlreadyConverted(_) => true,
            QuoteError::Storage(port) => port.is_conflict(),
            _ => false,
        }
    }
}
