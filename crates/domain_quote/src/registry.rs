//! Vehicle registry
//!
//! Resolves vehicles by VIN, creating a record on first sight. An existing
//! vehicle is returned unchanged: the request's make, model, and year are
//! ignored on a VIN hit, so repeated quoting cannot mutate the fleet.

use std::sync::Arc;

use core_kernel::PartyId;

use crate::error::QuoteError;
use crate::ports::VehicleRepository;
use crate::vehicle::{Vehicle, Vin};

/// Resolves or registers vehicles keyed by VIN
pub struct VehicleRegistry {
    vehicles: Arc<dyn VehicleRepository>,
}

impl VehicleRegistry {
    /// Creates a registry over the given vehicle store
    pub fn new(vehicles: Arc<dyn VehicleRepository>) -> Self {
        Self { vehicles }
    }

    /// Returns the vehicle for the VIN, registering it if never seen
    ///
    /// Owner existence is the caller's responsibility; the registry only
    /// guarantees VIN uniqueness (the store rejects a duplicate VIN that
    /// slips past the lookup under concurrency).
    pub async fn resolve_or_create(
        &self,
        vin: Vin,
        make: &str,
        model: &str,
        year: i32,
        owner_id: PartyId,
    ) -> Result<Vehicle, QuoteError> {
        if let Some(existing) = self.vehicles.find_by_vin(&vin).await? {
            return Ok(existing);
        }

        let vehicle = Vehicle::new(make, model, year, vin, owner_id);
        self.vehicles.save_vehicle(&vehicle).await?;
        tracing::info!(vehicle_id = %vehicle.id, vin = %vehicle.vin, "registered vehicle");
        Ok(vehicle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::MockVehicleRepository;

    fn registry() -> VehicleRegistry {
        VehicleRegistry::new(Arc::new(MockVehicleRepository::new()))
    }

    #[tokio::test]
    async fn same_vin_resolves_to_the_same_vehicle() {
        let registry = registry();
        let owner = PartyId::new();

        let first = registry
            .resolve_or_create(Vin::new("VIN0001"), "Toyota", "Corolla", 2019, owner)
            .await
            .unwrap();
        let second = registry
            .resolve_or_create(Vin::new("vin0001"), "Honda", "Civic", 2021, owner)
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        // the original record wins; the second request's facts are ignored
        assert_eq!(second.make, "Toyota");
        assert_eq!(second.year, 2019);
    }

    #[tokio::test]
    async fn different_vin_creates_a_distinct_vehicle() {
        let registry = registry();
        let owner = PartyId::new();

        let first = registry
            .resolve_or_create(Vin::new("VIN0001"), "Toyota", "Corolla", 2019, owner)
            .await
            .unwrap();
        let third = registry
            .resolve_or_create(Vin::new("VIN0002"), "Toyota", "Corolla", 2019, owner)
            .await
            .unwrap();

        assert_ne!(first.id, third.id);
    }
}
