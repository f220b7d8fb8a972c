//! Core domain logic for CPMS, a company profile management console.
//! This crate is the single source of truth for business invariants.

pub mod auth;
pub mod editor;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;

pub use auth::{AuthError, AuthGate, AuthResult, USER_SLOT};
pub use editor::section_editor::{Attachment, EditError, EditResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::company::{
    generate_id, ActionType, CompanyId, CompanyProfile, CompanySize, LineItem, Section,
};
pub use model::user::{Capability, User};
pub use service::company_service::{
    CompanyFilter, CompanyService, CompanySummary, ServiceError, ServiceResult,
};
pub use store::backend::{FileStorage, MemoryStorage, StorageBackend, StorageError, StorageResult};
pub use store::company_store::{CompanyStore, StoreError, StoreResult, COMPANIES_SLOT};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
