//! Party Directory
//!
//! This crate holds the minimal directory of people the lifecycle engine
//! references: customers who hold quotes and policies, agents who bind
//! policies, and admins. Identity management proper (authentication,
//! credentials, role enforcement) lives outside the engine; the directory
//! only resolves party ids and records profile facts.

pub mod party;
pub mod ports;

pub use party::{Party, Role};
pub use ports::PartyPort;
