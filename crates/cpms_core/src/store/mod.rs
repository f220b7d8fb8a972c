//! Record persistence layer: storage seam and the company record store.
//!
//! # Responsibility
//! - Define the injected key-value storage contract.
//! - Bridge the in-memory collection and its durable JSON slot.
//!
//! # Invariants
//! - Every mutation overwrites the slot with the full serialized
//!   collection; there is no append-only log and no partial write.
//! - Storage failures surface as typed errors, never panics.

pub mod backend;
pub mod company_store;
