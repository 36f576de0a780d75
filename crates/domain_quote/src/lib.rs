//! Quote Lifecycle Domain
//!
//! This crate covers the front half of the policy administration lifecycle:
//! a prospective customer's vehicle is resolved (or registered) by VIN, the
//! rating engine prices the risk, and a numbered quote is persisted. A quote
//! stays open until the policy domain converts it, after which it is
//! terminal.
//!
//! # Quote Lifecycle
//!
//! ```text
//! Generated --\
//!              +--> Converted (terminal, set exactly once)
//! Saved -----/
//! ```

pub mod error;
pub mod ports;
pub mod quote;
pub mod rating;
pub mod registry;
pub mod service;
pub mod vehicle;

pub use error::QuoteError;
pub use ports::{QuoteRepository, VehicleRepository};
pub use quote::{Quote, QuoteStatus, STANDARD_COVERAGE};
pub use rating::{premium_for, RatingEngine};
pub use registry::VehicleRegistry;
pub use service::QuoteService;
pub use vehicle::{Vehicle, Vin};
