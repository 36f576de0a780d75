//! Vehicle records and VIN handling

use core_kernel::{PartyId, VehicleId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle identification number
///
/// VINs are globally unique per vehicle and immutable once recorded.
/// Construction normalizes to uppercase so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vin(String);

impl Vin {
    /// Creates a VIN, trimming whitespace and uppercasing
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_uppercase())
    }

    /// Returns the normalized VIN string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A vehicle known to the system
///
/// Vehicles are created on the first quote for a never-seen VIN and are
/// never deleted by the lifecycle engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier
    pub id: VehicleId,
    /// Manufacturer
    pub make: String,
    /// Model name
    pub model: String,
    /// Model year
    pub year: i32,
    /// Vehicle identification number, unique and immutable
    pub vin: Vin,
    /// Owning customer
    pub owner_id: PartyId,
}

impl Vehicle {
    /// Creates a new vehicle record with a fresh identifier
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        vin: Vin,
        owner_id: PartyId,
    ) -> Self {
        Self {
            id: VehicleId::new(),
            make: make.into(),
            model: model.into(),
            year,
            vin,
            owner_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vin_is_normalized() {
        let vin = Vin::new("  5yj3e1ea7kf317000 ");
        assert_eq!(vin.as_str(), "5YJ3E1EA7KF317000");
    }

    #[test]
    fn equal_vins_compare_equal_across_case() {
        assert_eq!(Vin::new("abc123"), Vin::new("ABC123"));
    }
}
