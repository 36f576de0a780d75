//! Request and response data transfer objects
//!
//! Every domain entity has exactly one hand-written projection function to
//! its response shape. Projections are total over the response fields, so
//! a field added to a response without a source is a compile error, never
//! a silent null.

pub mod claim;
pub mod party;
pub mod policy;
pub mod quote;
