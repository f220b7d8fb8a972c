//! Core use-case services.
//!
//! # Responsibility
//! - Wrap the record store behind capability-checked entry points.
//! - Keep orchestration logic out of persistence and model layers.
//!
//! # Invariants
//! - Service APIs never bypass the store's persistence contracts.
//! - Authorization decisions happen here, not inside the store.

pub mod company_service;
