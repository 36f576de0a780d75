//! In-memory store implementing all repository ports

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use core_kernel::{ClaimId, DomainPort, PartyId, PolicyId, PortError, QuoteId, VehicleId};
use domain_claims::ports::ClaimRepository;
use domain_claims::Claim;
use domain_party::{Party, PartyPort};
use domain_policy::ports::{ClaimsGuard, PolicyRepository};
use domain_policy::Policy;
use domain_quote::ports::{QuoteRepository, VehicleRepository};
use domain_quote::{Quote, Vehicle, Vin};

#[derive(Debug, Default)]
struct Collections {
    parties: HashMap<PartyId, Party>,
    vehicles: HashMap<VehicleId, Vehicle>,
    quotes: HashMap<QuoteId, Quote>,
    policies: HashMap<PolicyId, Policy>,
    claims: HashMap<ClaimId, Claim>,
}

/// Shared in-process store backing every lifecycle repository
///
/// All collections sit behind one `RwLock`; each port call takes the lock
/// once, so concurrent mutations of the same entity serialize and a
/// reader never observes a half-applied write.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Collections>,
}

impl InMemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryStore {}

#[async_trait]
impl PartyPort for InMemoryStore {
    async fn get_party(&self, id: PartyId) -> Result<Party, PortError> {
        self.inner
            .read()
            .await
            .parties
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Party", id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Party>, PortError> {
        let needle = email.to_lowercase();
        Ok(self
            .inner
            .read()
            .await
            .parties
            .values()
            .find(|p| p.email == needle)
            .cloned())
    }

    async fn save_party(&self, party: &Party) -> Result<(), PortError> {
        self.inner
            .write()
            .await
            .parties
            .insert(party.id, party.clone());
        Ok(())
    }

    async fn list_parties(&self) -> Result<Vec<Party>, PortError> {
        Ok(self.inner.read().await.parties.values().cloned().collect())
    }
}

#[async_trait]
impl VehicleRepository for InMemoryStore {
    async fn find_by_vin(&self, vin: &Vin) -> Result<Option<Vehicle>, PortError> {
        Ok(self
            .inner
            .read()
            .await
            .vehicles
            .values()
            .find(|v| &v.vin == vin)
            .cloned())
    }

    async fn get_vehicle(&self, id: VehicleId) -> Result<Vehicle, PortError> {
        self.inner
            .read()
            .await
            .vehicles
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Vehicle", id))
    }

    async fn save_vehicle(&self, vehicle: &Vehicle) -> Result<(), PortError> {
        let mut inner = self.inner.write().await;
        if inner
            .vehicles
            .values()
            .any(|v| v.vin == vehicle.vin && v.id != vehicle.id)
        {
            return Err(PortError::conflict(format!(
                "VIN {} is already registered",
                vehicle.vin
            )));
        }
        inner.vehicles.insert(vehicle.id, vehicle.clone());
        Ok(())
    }
}

#[async_trait]
impl QuoteRepository for InMemoryStore {
    async fn get_quote(&self, id: QuoteId) -> Result<Quote, PortError> {
        self.inner
            .read()
            .await
            .quotes
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Quote", id))
    }

    async fn find_by_customer(&self, customer_id: PartyId) -> Result<Vec<Quote>, PortError> {
        Ok(self
            .inner
            .read()
            .await
            .quotes
            .values()
            .filter(|q| q.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn save_quote(&self, quote: &Quote) -> Result<(), PortError> {
        self.inner.write().await.quotes.insert(quote.id, quote.clone());
        Ok(())
    }

    async fn mark_converted(&self, id: QuoteId) -> Result<Quote, PortError> {
        let mut inner = self.inner.write().await;
        let quote = inner
            .quotes
            .get_mut(&id)
            .ok_or_else(|| PortError::not_found("Quote", id))?;
        quote
            .mark_converted()
            .map_err(|_| PortError::conflict(format!("Quote {id} has already been converted")))?;
        Ok(quote.clone())
    }
}

#[async_trait]
impl PolicyRepository for InMemoryStore {
    async fn get_policy(&self, id: PolicyId) -> Result<Policy, PortError> {
        self.inner
            .read()
            .await
            .policies
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Policy", id))
    }

    async fn find_by_customer(&self, customer_id: PartyId) -> Result<Vec<Policy>, PortError> {
        Ok(self
            .inner
            .read()
            .await
            .policies
            .values()
            .filter(|p| p.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_by_agent(&self, agent_id: PartyId) -> Result<Vec<Policy>, PortError> {
        Ok(self
            .inner
            .read()
            .await
            .policies
            .values()
            .filter(|p| p.agent_id == agent_id)
            .cloned()
            .collect())
    }

    async fn save_policy(&self, policy: &Policy) -> Result<(), PortError> {
        self.inner
            .write()
            .await
            .policies
            .insert(policy.id, policy.clone());
        Ok(())
    }

    async fn delete_policy(&self, id: PolicyId) -> Result<(), PortError> {
        self.inner
            .write()
            .await
            .policies
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PortError::not_found("Policy", id))
    }
}

#[async_trait]
impl ClaimsGuard for InMemoryStore {
    async fn has_claims(&self, policy_id: PolicyId) -> Result<bool, PortError> {
        Ok(self
            .inner
            .read()
            .await
            .claims
            .values()
            .any(|c| c.policy_id == policy_id))
    }
}

#[async_trait]
impl ClaimRepository for InMemoryStore {
    async fn get_claim(&self, id: ClaimId) -> Result<Claim, PortError> {
        self.inner
            .read()
            .await
            .claims
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Claim", id))
    }

    async fn find_by_policy(&self, policy_id: PolicyId) -> Result<Vec<Claim>, PortError> {
        Ok(self
            .inner
            .read()
            .await
            .claims
            .values()
            .filter(|c| c.policy_id == policy_id)
            .cloned()
            .collect())
    }

    async fn save_claim(&self, claim: &Claim) -> Result<(), PortError> {
        self.inner.write().await.claims.insert(claim.id, claim.clone());
        Ok(())
    }

    async fn append_document(&self, id: ClaimId, path: &str) -> Result<Claim, PortError> {
        let mut inner = self.inner.write().await;
        let claim = inner
            .claims
            .get_mut(&id)
            .ok_or_else(|| PortError::not_found("Claim", id))?;
        claim.append_document(path);
        Ok(claim.clone())
    }
}
