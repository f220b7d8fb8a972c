//! Canonical domain model for company profile records.
//!
//! # Responsibility
//! - Define the data structures persisted by the record store.
//! - Keep one unified line-item shape for every nested item list.
//!
//! # Invariants
//! - Every record, section and item is identified by a stable string id.
//! - Deletion is permanent hard delete; there are no tombstones.

pub mod company;
pub mod user;
