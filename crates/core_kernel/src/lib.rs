//! Core Kernel - Foundational types for the Mercury policy administration system
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money and rate types with precise decimal arithmetic
//! - Strongly-typed entity identifiers
//! - Human-readable reference numbering for quotes, policies, and claims
//! - An injectable clock so time-dependent logic stays deterministic in tests

pub mod clock;
pub mod identifiers;
pub mod money;
pub mod numbering;
pub mod ports;

pub use clock::{Clock, FixedClock, SystemClock};
pub use identifiers::{ClaimId, PartyId, PolicyId, QuoteId, VehicleId};
pub use money::{Money, Rate};
pub use numbering::{ClaimNumber, NumberingError, PolicyNumber, PolicyNumberSequence, QuoteNumber};
pub use ports::{DomainPort, PortError};
