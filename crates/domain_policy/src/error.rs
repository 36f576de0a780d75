//! Policy domain errors

use chrono::NaiveDate;
use core_kernel::{PartyId, PolicyId, PortError, QuoteId};
use thiserror::Error;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The referenced policy does not resolve
    #[error("Policy not found: {0}")]
    PolicyNotFound(PolicyId),

    /// The referenced quote does not resolve
    #[error("Quote not found: {0}")]
    QuoteNotFound(QuoteId),

    /// The referenced agent does not resolve
    #[error("Agent not found: {0}")]
    AgentNotFound(PartyId),

    /// The referenced customer does not resolve
    #[error("Customer not found: {0}")]
    CustomerNotFound(PartyId),

    /// The coverage period is inverted
    #[error("Invalid coverage period: start {start} is after end {end}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },

    /// The source quote has already been converted
    #[error("Quote {0} has already been converted")]
    QuoteAlreadyConverted(QuoteId),

    /// Claims still reference the policy
    #[error("Policy {0} has claims attached and cannot be deleted")]
    ClaimsAttached(PolicyId),

    /// The underlying store rejected the operation
    #[error(transparent)]
    Storage(#[from] PortError),
}

impl PolicyError {
    /// Returns true when the failure means a referenced id did not resolve
    pub fn is_not_found(&self) -> bool {
        match self {
            PolicyError::PolicyNotFound(_)
            | PolicyError::QuoteNotFound(_)
            | PolicyError::AgentNotFound(_)
            | PolicyError::CustomerNotFound(_) => true,
            PolicyError::Storage(port) => port.is_not_found(),
            _ => false,
        }
    }

    /// Returns true when the failure means an invariant was violated
    pub fn is_invalid_state(&self) -> bool {
        match self {
            PolicyError::InvalidPeriod { .. }
            | PolicyError::QuoteAlreadyConverted(_)
            | PolicyError::ClaimsAttached(_) => true,
            PolicyError::Storage(port) => port.is_conflict(),
            _ => false,
        }
    }
}
