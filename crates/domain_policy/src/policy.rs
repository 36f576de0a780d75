//! Policy aggregate

use chrono::NaiveDate;
use core_kernel::{Money, PartyId, PolicyId, PolicyNumber, QuoteId, VehicleId};
use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// Policy lifecycle status
///
/// Only `Active` is ever assigned by this engine today; the remaining
/// variants reserve the state space for expiry and cancellation flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyStatus {
    Active,
    Expired,
    Cancelled,
}

/// A binding coverage contract derived from exactly one quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Unique identifier
    pub id: PolicyId,
    /// Human-readable reference, unique and immutable
    pub policy_number: PolicyNumber,
    /// Source quote, exactly one per policy
    pub quote_id: QuoteId,
    /// Insured vehicle, copied from the quote at creation
    pub vehicle_id: VehicleId,
    /// Policyholder, copied from the quote at creation
    pub customer_id: PartyId,
    /// Binding agent
    pub agent_id: PartyId,
    /// First day of coverage
    pub start_date: NaiveDate,
    /// Last day of coverage
    pub end_date: NaiveDate,
    /// Annual premium, copied from the quote at creation
    pub premium: Money,
    /// Lifecycle status
    pub status: PolicyStatus,
}

impl Policy {
    /// Creates an active policy over the given coverage period
    ///
    /// Fails when the period is inverted; nothing is constructed in that
    /// case, so an invalid period can never reach the store.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        policy_number: PolicyNumber,
        quote_id: QuoteId,
        vehicle_id: VehicleId,
        customer_id: PartyId,
        agent_id: PartyId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        premium: Money,
    ) -> Result<Self, PolicyError> {
        check_period(start_date, end_date)?;
        Ok(Self {
            id: PolicyId::new(),
            policy_number,
            quote_id,
            vehicle_id,
            customer_id,
            agent_id,
            start_date,
            end_date,
            premium,
            status: PolicyStatus::Active,
        })
    }

    /// Replaces the coverage period, leaving every other field untouched
    pub fn update_period(
        &mut self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<(), PolicyError> {
        check_period(start_date, end_date)?;
        self.start_date = start_date;
        self.end_date = end_date;
        Ok(())
    }
}

fn check_period(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), PolicyError> {
    if start_date > end_date {
        return Err(PolicyError::InvalidPeriod {
            start: start_date,
            end: end_date,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use core_kernel::PolicyNumberSequence;
    use rust_decimal_macros::dec;

    fn number() -> PolicyNumber {
        PolicyNumberSequence::new().next(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_policy_is_active() {
        let policy = Policy::new(
            number(),
            QuoteId::new(),
            VehicleId::new(),
            PartyId::new(),
            PartyId::new(),
            date(2024, 6, 1),
            date(2025, 6, 1),
            Money::new(dec!(3000.00)),
        )
        .unwrap();

        assert_eq!(policy.status, PolicyStatus::Active);
        assert!(policy.policy_number.as_str().starts_with("MER-POL-"));
    }

    #[test]
    fn inverted_period_is_rejected_at_creation() {
        let err = Policy::new(
            number(),
            QuoteId::new(),
            VehicleId::new(),
            PartyId::new(),
            PartyId::new(),
            date(2025, 6, 1),
            date(2024, 6, 1),
            Money::new(dec!(3000.00)),
        )
        .unwrap_err();

        assert!(matches!(err, PolicyError::InvalidPeriod { .. }));
        assert!(err.is_invalid_state());
    }

    #[test]
    fn a_single_day_period_is_allowed() {
        let policy = Policy::new(
            number(),
            QuoteId::new(),
            VehicleId::new(),
            PartyId::new(),
            PartyId::new(),
            date(2024, 6, 1),
            date(2024, 6, 1),
            Money::zero(),
        );
        assert!(policy.is_ok());
    }

    #[test]
    fn update_period_touches_only_the_dates() {
        let mut policy = Policy::new(
            number(),
            QuoteId::new(),
            VehicleId::new(),
            PartyId::new(),
            PartyId::new(),
            date(2024, 6, 1),
            date(2025, 6, 1),
            Money::new(dec!(3000.00)),
        )
        .unwrap();
        let premium_before = policy.premium;

        policy
            .update_period(date(2024, 7, 1), date(2025, 7, 1))
            .unwrap();

        assert_eq!(policy.start_date, date(2024, 7, 1));
        assert_eq!(policy.premium, premium_before);
        assert_eq!(policy.status, PolicyStatus::Active);

        let err = policy
            .update_period(date(2025, 7, 2), date(2025, 7, 1))
            .unwrap_err();
        assert!(matches!(err, PolicyError::InvalidPeriod { .. }));
        // the failed update left the dates unchanged
        assert_eq!(policy.start_date, date(2024, 7, 1));
    }
}
