//! Quote lifecycle service

use std::sync::Arc;

use core_kernel::{Clock, Money, PartyId, PortError, QuoteId, VehicleId};
use domain_party::PartyPort;

use crate::error::QuoteError;
use crate::ports::{QuoteRepository, VehicleRepository};
use crate::quote::Quote;
use crate::rating::RatingEngine;
use crate::registry::VehicleRegistry;
use crate::vehicle::Vin;

/// Application service for the quote lifecycle
///
/// Stateless over its ports: every operation runs to completion against
/// the store and either fully commits or leaves state unchanged.
pub struct QuoteService {
    quotes: Arc<dyn QuoteRepository>,
    vehicles: Arc<dyn VehicleRepository>,
    parties: Arc<dyn PartyPort>,
    registry: VehicleRegistry,
    rating: RatingEngine,
    clock: Arc<dyn Clock>,
}

impl QuoteService {
    /// Creates the service over its collaborating ports
    pub fn new(
        quotes: Arc<dyn QuoteRepository>,
        vehicles: Arc<dyn VehicleRepository>,
        parties: Arc<dyn PartyPort>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            quotes,
            vehicles: vehicles.clone(),
            parties,
            registry: VehicleRegistry::new(vehicles),
            rating: RatingEngine::new(clock.clone()),
            clock,
        }
    }

    /// Generates an engine-rated quote from raw vehicle and driver facts
    ///
    /// Resolves the customer, resolves or registers the vehicle by VIN,
    /// prices the risk, and persists a Generated quote with standard
    /// coverage.
    pub async fn generate(
        &self,
        customer_id: PartyId,
        make: &str,
        model: &str,
        year: i32,
        vin: Vin,
        driver_age: i32,
    ) -> Result<Quote, QuoteError> {
        self.resolve_customer(customer_id).await?;

        let vehicle = self
            .registry
            .resolve_or_create(vin, make, model, year, customer_id)
            .await?;

        let premium = self.rating.rate(driver_age, year);
        let quote = Quote::generated(vehicle.id, customer_id, premium, self.clock.now());
        self.quotes.save_quote(&quote).await?;

        tracing::info!(
            quote_id = %quote.id,
            quote_number = %quote.quote_number,
            premium = %quote.premium,
            "generated quote"
        );
        Ok(quote)
    }

    /// Persists an agent-entered quote with caller-supplied terms
    ///
    /// No rating is applied; the premium and coverage details are stored
    /// verbatim.
    pub async fn save(
        &self,
        customer_id: PartyId,
        vehicle_id: VehicleId,
        coverage_details: &str,
        premium: Money,
    ) -> Result<Quote, QuoteError> {
        self.resolve_customer(customer_id).await?;
        self.vehicles
            .get_vehicle(vehicle_id)
            .await
            .map_err(|e| not_found_as(e, QuoteError::VehicleNotFound(vehicle_id)))?;

        let quote = Quote::saved(
            vehicle_id,
            customer_id,
            premium,
            coverage_details,
            self.clock.now(),
        );
        self.quotes.save_quote(&quote).await?;

        tracing::info!(
            quote_id = %quote.id,
            quote_number = %quote.quote_number,
            "saved quote"
        );
        Ok(quote)
    }

    /// Retrieves a quote by id
    pub async fn get_by_id(&self, id: QuoteId) -> Result<Quote, QuoteError> {
        self.quotes
            .get_quote(id)
            .await
            .map_err(|e| not_found_as(e, QuoteError::QuoteNotFound(id)))
    }

    /// Returns every quote for the customer
    ///
    /// The customer must resolve; a customer with no quotes yields an
    /// empty vec, not an error. Order is unspecified.
    pub async fn get_by_customer(&self, customer_id: PartyId) -> Result<Vec<Quote>, QuoteError> {
        self.resolve_customer(customer_id).await?;
        Ok(self.quotes.find_by_customer(customer_id).await?)
    }

    /// Flips a quote to its terminal Converted status
    ///
    /// Invoked by the policy domain when a policy is bound from the quote.
    /// Fails closed on a quote that is already Converted.
    pub async fn mark_converted(&self, id: QuoteId) -> Result<Quote, QuoteError> {
        let quote = self.quotes.mark_converted(id).await.map_err(|e| match e {
            PortError::NotFound { .. } => QuoteError::QuoteNotFound(id),
            PortError::Conflict { .. } => QuoteError::AlreadyConverted(id),
            other => QuoteError::Storage(other),
        })?;

        tracing::info!(quote_id = %id, "quote converted");
        Ok(quote)
    }

    async fn resolve_customer(&self, customer_id: PartyId) -> Result<(), QuoteError> {
        self.parties
            .get_party(customer_id)
            .await
            .map(|_| ())
            .map_err(|e| not_found_as(e, QuoteError::CustomerNotFound(customer_id)))
    }
}

/// Maps a port-level NotFound onto the domain's specific variant
fn not_found_as(error: PortError, not_found: QuoteError) -> QuoteError {
    if error.is_not_found() {
        not_found
    } else {
        QuoteError::Storage(error)
    }
}
