//! Policy Lifecycle Domain
//!
//! A policy is a binding coverage contract derived from exactly one quote.
//! This crate owns policy creation (from an explicit date range or by
//! converting a quote), retrieval, date-range updates, and deletion, and
//! enforces the invariants that bind a policy to its source quote.
//!
//! # Invariants
//!
//! - A policy traces to exactly one quote; a quote backs at most one policy
//! - `start_date <= end_date` at creation and on every update
//! - Vehicle, customer, and premium are copied from the quote at creation
//!   and are thereafter independent of it
//! - A policy with live claims cannot be deleted

pub mod error;
pub mod policy;
pub mod ports;
pub mod service;

pub use error::PolicyError;
pub use policy::{Policy, PolicyStatus};
pub use ports::{ClaimsGuard, PolicyRepository};
pub use service::PolicyService;
