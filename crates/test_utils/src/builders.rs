//! Test data builders

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::{Clock, Money, PartyId, PolicyNumberSequence, QuoteId, VehicleId};
use domain_policy::{Policy, PolicyError};
use domain_quote::Quote;
use rust_decimal_macros::dec;

use crate::fixtures;

/// Builder for quotes with sensible defaults
pub struct QuoteBuilder {
    vehicle_id: VehicleId,
    customer_id: PartyId,
    premium: Money,
    created_at: DateTime<Utc>,
}

impl Default for QuoteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            vehicle_id: VehicleId::new(),
            customer_id: PartyId::new(),
            premium: Money::new(dec!(3000.00)),
            created_at: fixtures::fixed_clock().now(),
        }
    }

    /// Sets the customer
    pub fn with_customer(mut self, customer_id: PartyId) -> Self {
        self.customer_id = customer_id;
        self
    }

    /// Sets the vehicle
    pub fn with_vehicle(mut self, vehicle_id: VehicleId) -> Self {
        self.vehicle_id = vehicle_id;
        self
    }

    /// Sets the premium
    pub fn with_premium(mut self, premium: Money) -> Self {
        self.premium = premium;
        self
    }

    /// Builds an engine-rated quote
    pub fn build(self) -> Quote {
        Quote::generated(self.vehicle_id, self.customer_id, self.premium, self.created_at)
    }
}

/// Builder for policies with sensible defaults
pub struct PolicyBuilder {
    quote_id: QuoteId,
    vehicle_id: VehicleId,
    customer_id: PartyId,
    agent_id: PartyId,
    start_date: NaiveDate,
    end_date: NaiveDate,
    premium: Money,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        let (start_date, end_date) = fixtures::period();
        Self {
            quote_id: QuoteId::new(),
            vehicle_id: VehicleId::new(),
            customer_id: PartyId::new(),
            agent_id: PartyId::new(),
            start_date,
            end_date,
            premium: Money::new(dec!(3000.00)),
        }
    }

    /// Copies the reference fields from a quote
    pub fn from_quote(mut self, quote: &Quote) -> Self {
        self.quote_id = quote.id;
        self.vehicle_id = quote.vehicle_id;
        self.customer_id = quote.customer_id;
        self.premium = quote.premium;
        self
    }

    /// Sets the binding agent
    pub fn with_agent(mut self, agent_id: PartyId) -> Self {
        self.agent_id = agent_id;
        self
    }

    /// Sets the customer
    pub fn with_customer(mut self, customer_id: PartyId) -> Self {
        self.customer_id = customer_id;
        self
    }

    /// Sets the coverage period
    pub fn with_period(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Builds the policy
    pub fn build(self) -> Result<Policy, PolicyError> {
        Policy::new(
            PolicyNumberSequence::new().next(fixtures::fixed_clock().now()),
            self.quote_id,
            self.vehicle_id,
            self.customer_id,
            self.agent_id,
            self.start_date,
            self.end_date,
            self.premium,
        )
    }
}
