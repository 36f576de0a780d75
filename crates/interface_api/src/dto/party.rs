//! Party DTOs

use core_kernel::PartyId;
use domain_party::{Party, Role};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PartyResponse {
    pub id: PartyId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl PartyResponse {
    /// Projects a party onto its response shape
    pub fn from_domain(party: &Party) -> Self {
        Self {
            id: party.id,
            first_name: party.first_name.clone(),
            last_name: party.last_name.clone(),
            email: party.email.clone(),
            role: party.role,
        }
    }
}
