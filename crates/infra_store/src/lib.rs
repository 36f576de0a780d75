//! Reference persistence adapter
//!
//! One in-process store implements every repository port the lifecycle
//! domains define. All collections live behind a single lock, so each
//! port operation is serialized the way a transactional store would
//! serialize it: writes are never partially visible, the VIN uniqueness
//! check and insert are one critical section, and the quote-converted
//! flip is a true compare-and-set.
//!
//! A deployment would swap this crate for a database-backed adapter; the
//! domain crates only ever see the port traits.

pub mod store;

pub use store::InMemoryStore;
