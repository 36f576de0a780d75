//! Claims Lifecycle Domain
//!
//! A claim is a request for compensation filed against a policy. This
//! crate owns claim filing, retrieval, and the append-only document trail
//! attached to each claim. Adjudication states exist in the status enum
//! but no transition into them is implemented here.

pub mod claim;
pub mod error;
pub mod ports;
pub mod service;

pub use claim::{Claim, ClaimStatus};
pub use error::ClaimError;
pub use ports::ClaimRepository;
pub use service::ClaimService;
