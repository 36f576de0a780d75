//! Demo directory seeding
//!
//! Inserts the three demo parties on first start so the API is usable out
//! of the box. Seeding is idempotent: a party whose email already resolves
//! is left alone.

use core_kernel::PortError;
use domain_party::{Party, PartyPort, Role};

/// Inserts the demo admin, agent, and customer if absent
pub async fn seed_demo_parties(parties: &dyn PartyPort) -> Result<(), PortError> {
    let demo = [
        Party::new("System", "Admin", "admin@mercury.com", Role::Admin),
        Party::new("Default", "Agent", "agent@mercury.com", Role::Agent),
        Party::new("Demo", "Customer", "customer@mercury.com", Role::Customer),
    ];

    for party in demo {
        if parties.find_by_email(&party.email).await?.is_none() {
            tracing::info!(email = %party.email, role = ?party.role, "seeding demo party");
            parties.save_party(&party).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra_store::InMemoryStore;

    #[tokio::test]
    async fn seeding_twice_inserts_each_party_once() {
        let store = InMemoryStore::new();

        seed_demo_parties(&store).await.unwrap();
        seed_demo_parties(&store).await.unwrap();

        assert_eq!(store.list_parties().await.unwrap().len(), 3);
    }
}
