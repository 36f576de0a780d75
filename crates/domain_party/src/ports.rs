//! Party directory port
//!
//! The lifecycle services resolve customer and agent ids through this
//! trait. Adapters can be internal (the in-memory reference store) or
//! external (an upstream identity system); a mock lives here for tests.

use async_trait::async_trait;
use core_kernel::{DomainPort, PartyId, PortError};

use crate::party::Party;

/// Port trait for party directory operations
#[async_trait]
pub trait PartyPort: DomainPort {
    /// Retrieves a party by id, or `PortError::NotFound`
    async fn get_party(&self, id: PartyId) -> Result<Party, PortError>;

    /// Finds a party by email, if one exists
    async fn find_by_email(&self, email: &str) -> Result<Option<Party>, PortError>;

    /// Inserts or replaces a party record
    async fn save_party(&self, party: &Party) -> Result<(), PortError>;

    /// Lists every party in the directory
    async fn list_parties(&self) -> Result<Vec<Party>, PortError>;
}

/// In-memory mock implementation of [`PartyPort`] for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    /// Mock directory backed by a `HashMap`
    #[derive(Debug, Default)]
    pub struct MockPartyPort {
        parties: RwLock<HashMap<PartyId, Party>>,
    }

    impl MockPartyPort {
        /// Creates an empty mock directory
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the directory with parties for testing
        pub async fn with_parties(parties: Vec<Party>) -> Self {
            let port = Self::new();
            {
                let mut guard = port.parties.write().await;
                for party in parties {
                    guard.insert(party.id, party);
                }
            }
            port
        }
    }

    impl DomainPort for MockPartyPort {}

    #[async_trait]
    impl PartyPort for MockPartyPort {
        async fn get_party(&self, id: PartyId) -> Result<Party, PortError> {
            self.parties
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Party", id))
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Party>, PortError> {
            let needle = email.to_lowercase();
            Ok(self
                .parties
                .read()
                .await
                .values()
                .find(|p| p.email == needle)
                .cloned())
        }

        async fn save_party(&self, party: &Party) -> Result<(), PortError> {
            self.parties.write().await.insert(party.id, party.clone());
            Ok(())
        }

        async fn list_parties(&self) -> Result<Vec<Party>, PortError> {
            Ok(self.parties.read().await.values().cloned().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockPartyPort;
    use super::*;
    use crate::party::Role;

    #[tokio::test]
    async fn save_then_get_round_trips() {
        let port = MockPartyPort::new();
        let party = Party::new("Demo", "Customer", "customer@mercury.com", Role::Customer);

        port.save_party(&party).await.unwrap();

        let retrieved = port.get_party(party.id).await.unwrap();
        assert_eq!(retrieved.email, "customer@mercury.com");
    }

    #[tokio::test]
    async fn get_unknown_party_is_not_found() {
        let port = MockPartyPort::new();
        let result = port.get_party(PartyId::new()).await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn find_by_email_ignores_case() {
        let party = Party::new("System", "Admin", "admin@mercury.com", Role::Admin);
        let port = MockPartyPort::with_parties(vec![party]).await;

        let found = port.find_by_email("Admin@Mercury.com").await.unwrap();
        assert!(found.is_some());

        let missing = port.find_by_email("nobody@mercury.com").await.unwrap();
        assert!(missing.is_none());
    }
}
