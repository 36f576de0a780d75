//! Party records

use chrono::NaiveDate;
use core_kernel::PartyId;
use serde::{Deserialize, Serialize};

/// Role a party plays in the system
///
/// Role gating happens upstream of the engine; the role is carried here
/// for display and audit only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Agent,
    Admin,
}

/// A person known to the directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    /// Unique identifier
    pub id: PartyId,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email, stored lowercase
    pub email: String,
    /// Directory role
    pub role: Role,
    /// Driver's license number, when known
    pub license_number: Option<String>,
    /// Date of birth, when known
    pub date_of_birth: Option<NaiveDate>,
}

impl Party {
    /// Creates a new party with a fresh identifier
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: PartyId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into().to_lowercase(),
            role,
            license_number: None,
            date_of_birth: None,
        }
    }

    /// Returns the display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
