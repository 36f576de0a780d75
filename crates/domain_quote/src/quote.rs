//! Quote aggregate

use chrono::{DateTime, Utc};
use core_kernel::{Money, PartyId, QuoteId, QuoteNumber, VehicleId};
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Coverage description applied to engine-rated quotes
pub const STANDARD_COVERAGE: &str = "Standard auto coverage";

/// Quote lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteStatus {
    /// Produced by the rating engine from raw vehicle and driver facts
    Generated,
    /// Persisted with a caller-supplied premium, no rating applied
    Saved,
    /// Terminal: a policy was created from this quote
    Converted,
}

/// A rated or manually priced offer of coverage, not yet binding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Unique identifier
    pub id: QuoteId,
    /// Human-readable reference, unique and immutable
    pub quote_number: QuoteNumber,
    /// Vehicle being quoted
    pub vehicle_id: VehicleId,
    /// Customer requesting coverage
    pub customer_id: PartyId,
    /// Annual premium
    pub premium: Money,
    /// Coverage description
    pub coverage_details: String,
    /// Lifecycle status
    pub status: QuoteStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Quote {
    /// Creates an engine-rated quote with standard coverage
    pub fn generated(
        vehicle_id: VehicleId,
        customer_id: PartyId,
        premium: Money,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: QuoteId::new(),
            quote_number: QuoteNumber::generate(),
            vehicle_id,
            customer_id,
            premium,
            coverage_details: STANDARD_COVERAGE.to_string(),
            status: QuoteStatus::Generated,
            created_at,
        }
    }

    /// Creates a manually priced quote with caller-supplied terms
    pub fn saved(
        vehicle_id: VehicleId,
        customer_id: PartyId,
        premium: Money,
        coverage_details: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: QuoteId::new(),
            quote_number: QuoteNumber::generate(),
            vehicle_id,
            customer_id,
            premium,
            coverage_details: coverage_details.into(),
            status: QuoteStatus::Saved,
            created_at,
        }
    }

    /// Returns true once the quote has been converted into a policy
    pub fn is_converted(&self) -> bool {
        self.status == QuoteStatus::Converted
    }

    /// Transitions the quote to its terminal Converted status
    ///
    /// Conversion happens exactly once per quote. A second attempt fails
    /// rather than silently succeeding, so one quote can never back two
    /// policies.
    pub fn mark_converted(&mut self) -> Result<(), QuoteError> {
        if self.is_converted() {
            return Err(QuoteError::AlreadyConverted(self.id));
        }
        self.status = QuoteStatus::Converted;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_quote() -> Quote {
        Quote::generated(
            VehicleId::new(),
            PartyId::new(),
            Money::new(dec!(3000.00)),
            Utc::now(),
        )
    }

    #[test]
    fn generated_quote_has_standard_coverage() {
        let quote = sample_quote();
        assert_eq!(quote.status, QuoteStatus::Generated);
        assert_eq!(quote.coverage_details, STANDARD_COVERAGE);
    }

    #[test]
    fn saved_quote_keeps_caller_terms() {
        let quote = Quote::saved(
            VehicleId::new(),
            PartyId::new(),
            Money::new(dec!(1234.56)),
            "Collision only",
            Utc::now(),
        );
        assert_eq!(quote.status, QuoteStatus::Saved);
        assert_eq!(quote.coverage_details, "Collision only");
        assert_eq!(quote.premium.amount(), dec!(1234.56));
    }

    #[test]
    fn conversion_is_terminal() {
        let mut quote = sample_quote();
        quote.mark_converted().unwrap();
        assert!(quote.is_converted());

        let err = quote.mark_converted().unwrap_err();
        assert!(matches!(err, QuoteError::AlreadyConverted(id) if id == quote.id));
    }
}
