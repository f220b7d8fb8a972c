//! Company use-case service.
//!
//! # Responsibility
//! - Provide the UI-facing list/get/create/update/delete entry points.
//! - Perform the explicit per-operation capability check.
//! - Apply list filtering and derive dashboard statistics over the
//!   store's canonical collection.
//!
//! # Invariants
//! - Every operation names the capability it requires, even though every
//!   authenticated user passes today.
//! - Filtering is pure; it never touches durable storage.

use crate::model::company::{CompanyId, CompanyProfile, CompanySize};
use crate::model::user::{Capability, User};
use crate::store::backend::StorageBackend;
use crate::store::company_store::{CompanyStore, StoreError};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors from company use-case operations.
#[derive(Debug)]
pub enum ServiceError {
    /// Acting user lacks the named capability.
    AccessDenied(Capability),
    /// Store-level failure, forwarded unchanged.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccessDenied(capability) => {
                write!(f, "access denied: requires {}", capability.as_str())
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AccessDenied(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// List filter options; `None`/empty means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFilter {
    /// Case-insensitive substring match against name or description.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Exact location match.
    pub location: Option<String>,
    /// Exact size match.
    pub size: Option<CompanySize>,
}

impl CompanyFilter {
    fn matches(&self, company: &CompanyProfile) -> bool {
        let matches_search = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                company.name.to_lowercase().contains(&term)
                    || company.description.to_lowercase().contains(&term)
            }
        };
        let matches_category = self
            .category
            .as_deref()
            .is_none_or(|category| company.category == category);
        let matches_location = self
            .location
            .as_deref()
            .is_none_or(|location| company.location == location);
        let matches_size = self.size.is_none_or(|size| company.size == size);

        matches_search && matches_category && matches_location && matches_size
    }
}

/// Aggregated collection statistics for the dashboard view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanySummary {
    /// Count of all stored records.
    pub total_companies: usize,
    /// Per-category record counts, sorted by count descending; ties keep
    /// first-seen collection order. Records with an empty category are
    /// not counted.
    pub category_counts: Vec<(String, usize)>,
    /// Per-location record counts, same ordering and empty-value rule as
    /// `category_counts`.
    pub location_counts: Vec<(String, usize)>,
}

fn count_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        if value.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(name, _)| name.as_str() == value) {
            Some(entry) => entry.1 += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    // Stable sort, so equal counts keep first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Use-case wrapper around the record store.
///
/// Owns the store for its lifetime; callers pass the acting user with
/// every operation so the authorization seam stays explicit.
pub struct CompanyService<S: StorageBackend> {
    store: CompanyStore<S>,
}

impl<S: StorageBackend> CompanyService<S> {
    /// Wraps a store; the store should already be loaded.
    pub fn new(store: CompanyStore<S>) -> Self {
        Self { store }
    }

    /// Lists records matching the filter, in stored display order.
    pub fn list(&self, user: &User, filter: &CompanyFilter) -> ServiceResult<Vec<&CompanyProfile>> {
        self.check(user, Capability::ViewCompanies)?;
        Ok(self
            .store
            .list()
            .iter()
            .filter(|company| filter.matches(company))
            .collect())
    }

    /// Gets one record by id.
    pub fn get(&self, user: &User, id: &str) -> ServiceResult<&CompanyProfile> {
        self.check(user, Capability::ViewCompanies)?;
        Ok(self.store.get_by_id(id)?)
    }

    /// Creates a record and returns its generated id.
    pub fn create(&mut self, user: &User, candidate: CompanyProfile) -> ServiceResult<CompanyId> {
        self.check(user, Capability::ManageCompanies)?;
        Ok(self.store.create(candidate)?)
    }

    /// Replaces a record wholesale.
    pub fn update(&mut self, user: &User, id: &str, fields: CompanyProfile) -> ServiceResult<()> {
        self.check(user, Capability::ManageCompanies)?;
        Ok(self.store.update(id, fields)?)
    }

    /// Deletes a record; absent ids are tolerated.
    pub fn delete(&mut self, user: &User, id: &str) -> ServiceResult<()> {
        self.check(user, Capability::ManageCompanies)?;
        Ok(self.store.delete(id)?)
    }

    /// Derives dashboard statistics from the full collection.
    pub fn summarize(&self, user: &User) -> ServiceResult<CompanySummary> {
        self.check(user, Capability::ViewCompanies)?;
        let companies = self.store.list();
        Ok(CompanySummary {
            total_companies: companies.len(),
            category_counts: count_values(companies.iter().map(|c| c.category.as_str())),
            location_counts: count_values(companies.iter().map(|c| c.location.as_str())),
        })
    }

    /// Returns up to `limit` records from the head of the collection, in
    /// stored display order.
    pub fn recent(&self, user: &User, limit: usize) -> ServiceResult<Vec<&CompanyProfile>> {
        self.check(user, Capability::ViewCompanies)?;
        Ok(self.store.list().iter().take(limit).collect())
    }

    fn check(&self, user: &User, capability: Capability) -> ServiceResult<()> {
        if user.allows(capability) {
            Ok(())
        } else {
            warn!(
                "event=capability_check module=service status=denied user_id={} capability={}",
                user.id,
                capability.as_str()
            );
            Err(ServiceError::AccessDenied(capability))
        }
    }
}
