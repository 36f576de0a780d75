//! Quote domain ports
//!
//! Repository traits the quote lifecycle needs from its data source, plus
//! in-memory mocks for tests. Adapters implement these over whatever store
//! a deployment uses; every operation is a single logical transaction.

use async_trait::async_trait;
use core_kernel::{DomainPort, PartyId, PortError, QuoteId, VehicleId};

use crate::quote::Quote;
use crate::vehicle::{Vehicle, Vin};

/// Port trait for vehicle storage
#[async_trait]
pub trait VehicleRepository: DomainPort {
    /// Looks up a vehicle by VIN
    async fn find_by_vin(&self, vin: &Vin) -> Result<Option<Vehicle>, PortError>;

    /// Retrieves a vehicle by id, or `PortError::NotFound`
    async fn get_vehicle(&self, id: VehicleId) -> Result<Vehicle, PortError>;

    /// Persists a new vehicle
    ///
    /// Fails with `PortError::Conflict` when another vehicle already
    /// carries the same VIN. This backstops the registry's
    /// lookup-before-create under concurrent registration.
    async fn save_vehicle(&self, vehicle: &Vehicle) -> Result<(), PortError>;
}

/// Port trait for quote storage
#[async_trait]
pub trait QuoteRepository: DomainPort {
    /// Retrieves a quote by id, or `PortError::NotFound`
    async fn get_quote(&self, id: QuoteId) -> Result<Quote, PortError>;

    /// Returns every quote belonging to the customer, order unspecified
    async fn find_by_customer(&self, customer_id: PartyId) -> Result<Vec<Quote>, PortError>;

    /// Persists a quote
    async fn save_quote(&self, quote: &Quote) -> Result<(), PortError>;

    /// Atomically flips a quote to Converted and returns the updated record
    ///
    /// Compare-and-set semantics: fails with `PortError::NotFound` when the
    /// quote is absent and `PortError::Conflict` when it is already
    /// Converted, without modifying the record.
    async fn mark_converted(&self, id: QuoteId) -> Result<Quote, PortError>;
}

/// In-memory mock implementations for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    /// Mock vehicle store backed by a `HashMap`
    #[derive(Debug, Default)]
    pub struct MockVehicleRepository {
        vehicles: RwLock<HashMap<VehicleId, Vehicle>>,
    }

    impl MockVehicleRepository {
        /// Creates an empty mock store
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl DomainPort for MockVehicleRepository {}

    #[async_trait]
    impl VehicleRepository for MockVehicleRepository {
        async fn find_by_vin(&self, vin: &Vin) -> Result<Option<Vehicle>, PortError> {
            Ok(self
                .vehicles
                .read()
                .await
                .values()
                .find(|v| &v.vin == vin)
                .cloned())
        }

        async fn get_vehicle(&self, id: VehicleId) -> Result<Vehicle, PortError> {
            self.vehicles
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Vehicle", id))
        }

        async fn save_vehicle(&self, vehicle: &Vehicle) -> Result<(), PortError> {
            let mut vehicles = self.vehicles.write().await;
            if vehicles
                .values()
                .any(|v| v.vin == vehicle.vin && v.id != vehicle.id)
            {
                return Err(PortError::conflict(format!(
                    "VIN {} is already registered",
                    vehicle.vin
                )));
            }
            vehicles.insert(vehicle.id, vehicle.clone());
            Ok(())
        }
    }

    /// Mock quote store backed by a `HashMap`
    #[derive(Debug, Default)]
    pub struct MockQuoteRepository {
        quotes: RwLock<HashMap<QuoteId, Quote>>,
    }

    impl MockQuoteRepository {
        /// Creates an empty mock store
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl DomainPort for MockQuoteRepository {}

    #[async_trait]
    impl QuoteRepository for MockQuoteRepository {
        async fn get_quote(&self, id: QuoteId) -> Result<Quote, PortError> {
            self.quotes
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Quote", id))
        }

        async fn find_by_customer(&self, customer_id: PartyId) -> Result<Vec<Quote>, PortError> {
            Ok(self
                .quotes
                .read()
                .await
                .values()
                .filter(|q| q.customer_id == customer_id)
                .cloned()
                .collect())
        }

        async fn save_quote(&self, quote: &Quote) -> Result<(), PortError> {
            self.quotes.write().await.insert(quote.id, quote.clone());
            Ok(())
        }

        async fn mark_converted(&self, id: QuoteId) -> Result<Quote, PortError> {
            let mut quotes = self.quotes.write().await;
            let quote = quotes
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Quote", id))?;
            quote
                .mark_converted()
                .map_err(|_| PortError::conflict(format!("Quote {id} has already been converted")))?;
            Ok(quote.clone())
        }
    }
}
