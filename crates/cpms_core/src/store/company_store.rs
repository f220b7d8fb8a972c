//! Company record store: canonical collection plus durable persistence.
//!
//! # Responsibility
//! - Own the in-memory company collection as the single source of truth.
//! - Assign record ids and timestamps; callers never supply them.
//! - Serialize the whole collection into one durable slot per mutation.
//!
//! # Invariants
//! - In-memory state always equals the last successfully-applied state: a
//!   failed persist rolls the triggering mutation back before returning.
//! - `created_at` is frozen at creation; `updated_at` is refreshed on every
//!   successful update and never regresses below `created_at`.
//! - Insertion order is display order; there is no secondary index.

use crate::model::company::{generate_id, CompanyId, CompanyProfile};
use crate::seed::seed_companies;
use crate::store::backend::StorageBackend;
use chrono::{SecondsFormat, Utc};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Durable slot holding the JSON-serialized record array.
pub const COMPANIES_SLOT: &str = "cpms_companies";

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from record store operations.
///
/// All variants are recoverable at the boundary; nothing here is fatal.
#[derive(Debug)]
pub enum StoreError {
    /// Operation addressed a record that does not exist.
    NotFound(CompanyId),
    /// Durable payload could not be read or parsed at startup.
    LoadFailure(String),
    /// Durable slot write failed; the mutation was rolled back.
    PersistFailure(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "company not found: {id}"),
            Self::LoadFailure(detail) => write!(f, "failed to load company data: {detail}"),
            Self::PersistFailure(detail) => write!(f, "failed to persist company data: {detail}"),
        }
    }
}

impl Error for StoreError {}

/// Record store over an injected durable backend.
///
/// Constructed once per process and passed by reference to every consumer.
/// All operations run to completion on the calling thread; concurrent
/// dispatch is resolved as last-write-wins with no conflict detection.
pub struct CompanyStore<S: StorageBackend> {
    backend: S,
    companies: Vec<CompanyProfile>,
}

impl<S: StorageBackend> CompanyStore<S> {
    /// Creates a store with an empty collection. Call [`load`] before use.
    ///
    /// [`load`]: CompanyStore::load
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            companies: Vec::new(),
        }
    }

    /// Loads the collection from the durable slot.
    ///
    /// # Contract
    /// - Absent slot: seeds the built-in dataset and persists it.
    /// - Corrupt or unreadable slot: returns `LoadFailure`, collection
    ///   stays empty, caller keeps running.
    /// - Seed persist failure: the seed stays in memory and the failure is
    ///   surfaced as `PersistFailure`.
    pub fn load(&mut self) -> StoreResult<()> {
        self.companies.clear();
        let payload = self.backend.read(COMPANIES_SLOT).map_err(|err| {
            error!(
                "event=companies_load module=store status=error error_code=read_failed error={err}"
            );
            StoreError::LoadFailure(err.to_string())
        })?;

        match payload {
            Some(bytes) => {
                self.companies = serde_json::from_slice(&bytes).map_err(|err| {
                    error!(
                        "event=companies_load module=store status=error error_code=parse_failed error={err}"
                    );
                    StoreError::LoadFailure(err.to_string())
                })?;
                info!(
                    "event=companies_load module=store status=ok source=slot count={}",
                    self.companies.len()
                );
                Ok(())
            }
            None => {
                self.companies = seed_companies();
                info!(
                    "event=companies_load module=store status=ok source=seed count={}",
                    self.companies.len()
                );
                if let Err(err) = self.persist() {
                    warn!("event=companies_seed_persist module=store status=error error={err}");
                    return Err(err);
                }
                Ok(())
            }
        }
    }

    /// Returns the current in-memory collection in display order.
    pub fn list(&self) -> &[CompanyProfile] {
        &self.companies
    }

    /// Finds one record by id via linear scan.
    pub fn get_by_id(&self, id: &str) -> StoreResult<&CompanyProfile> {
        self.companies
            .iter()
            .find(|company| company.id.as_deref() == Some(id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Appends a new record and persists the collection.
    ///
    /// # Contract
    /// - Any caller-supplied `id`/timestamps are ignored and reassigned.
    /// - On persist failure the speculative append is rolled back and
    ///   `PersistFailure` is returned.
    /// - Returns the generated id on success.
    pub fn create(&mut self, candidate: CompanyProfile) -> StoreResult<CompanyId> {
        let id = generate_id();
        let stamp = now();
        let record = CompanyProfile {
            id: Some(id.clone()),
            created_at: Some(stamp.clone()),
            updated_at: Some(stamp),
            ..candidate
        };

        self.companies.push(record);
        if let Err(err) = self.persist() {
            self.companies.pop();
            error!("event=company_create module=store status=error company_id={id} error={err}");
            return Err(err);
        }

        info!("event=company_create module=store status=ok company_id={id}");
        Ok(id)
    }

    /// Replaces the record with the given id wholesale.
    ///
    /// # Contract
    /// - Absent id: returns `NotFound`, performs no write.
    /// - The stored `id` and `created_at` survive the replacement; only
    ///   `updated_at` is refreshed.
    /// - On persist failure the prior record is restored.
    pub fn update(&mut self, id: &str, fields: CompanyProfile) -> StoreResult<()> {
        let index = self
            .companies
            .iter()
            .position(|company| company.id.as_deref() == Some(id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let previous = self.companies[index].clone();
        self.companies[index] = CompanyProfile {
            id: previous.id.clone(),
            created_at: previous.created_at.clone(),
            updated_at: Some(now()),
            ..fields
        };

        if let Err(err) = self.persist() {
            self.companies[index] = previous;
            error!("event=company_update module=store status=error company_id={id} error={err}");
            return Err(err);
        }

        info!("event=company_update module=store status=ok company_id={id}");
        Ok(())
    }

    /// Removes the record with the given id, if present.
    ///
    /// # Contract
    /// - Idempotent: removing an absent id is not an error.
    /// - On persist failure the removed record is restored at its
    ///   original position.
    pub fn delete(&mut self, id: &str) -> StoreResult<()> {
        let index = self
            .companies
            .iter()
            .position(|company| company.id.as_deref() == Some(id));

        let removed = index.map(|index| (index, self.companies.remove(index)));

        if let Err(err) = self.persist() {
            if let Some((index, record)) = removed {
                self.companies.insert(index, record);
            }
            error!("event=company_delete module=store status=error company_id={id} error={err}");
            return Err(err);
        }

        info!(
            "event=company_delete module=store status=ok company_id={id} removed={}",
            removed.is_some()
        );
        Ok(())
    }

    /// Serializes the full collection and overwrites the durable slot.
    fn persist(&self) -> StoreResult<()> {
        let bytes = serde_json::to_vec(&self.companies)
            .map_err(|err| StoreError::PersistFailure(err.to_string()))?;
        self.backend
            .write(COMPANIES_SLOT, &bytes)
            .map_err(|err| StoreError::PersistFailure(err.to_string()))
    }
}

/// Current time as an RFC 3339 UTC string with millisecond precision.
///
/// Fixed-width formatting keeps lexicographic order equal to time order.
fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
