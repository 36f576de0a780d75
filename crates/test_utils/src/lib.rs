//! Test Utilities
//!
//! Shared fixtures and builders so integration tests can state only the
//! facts they care about and take defaults for everything else.

pub mod builders;
pub mod fixtures;

pub use builders::{PolicyBuilder, QuoteBuilder};
pub use fixtures::{agent, customer, fixed_clock, period};
