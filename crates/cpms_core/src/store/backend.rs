//! Durable slot storage contracts and implementations.
//!
//! # Responsibility
//! - Define the injected key-value storage seam used by store and auth.
//! - Provide a file-backed implementation plus an in-memory fake.
//!
//! # Invariants
//! - Slot names are validated identifiers (`[a-z0-9_]+`).
//! - A file slot is never observable half-written: writes land in a temp
//!   file first and are moved into place with a single rename.

use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub type StorageResult<T> = Result<T, StorageError>;

/// Errors from slot storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// Underlying filesystem failure.
    Io(std::io::Error),
    /// Slot name is empty or contains unsupported characters.
    InvalidSlot(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::InvalidSlot(name) => write!(f, "invalid storage slot name: `{name}`"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidSlot(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Injected durable storage seam.
///
/// One named slot holds one opaque payload. Implementations must make
/// `write` atomic at the slot level; callers rely on never reading a
/// partially-written payload.
pub trait StorageBackend {
    /// Reads a slot. `Ok(None)` means the slot has never been written.
    fn read(&self, slot: &str) -> StorageResult<Option<Vec<u8>>>;
    /// Replaces the slot payload wholesale.
    fn write(&self, slot: &str, bytes: &[u8]) -> StorageResult<()>;
    /// Removes the slot. Removing an absent slot is not an error.
    fn remove(&self, slot: &str) -> StorageResult<()>;
}

impl<S: StorageBackend + ?Sized> StorageBackend for &S {
    fn read(&self, slot: &str) -> StorageResult<Option<Vec<u8>>> {
        (**self).read(slot)
    }

    fn write(&self, slot: &str, bytes: &[u8]) -> StorageResult<()> {
        (**self).write(slot, bytes)
    }

    fn remove(&self, slot: &str) -> StorageResult<()> {
        (**self).remove(slot)
    }
}

fn validate_slot(slot: &str) -> StorageResult<()> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidSlot(slot.to_string()))
    }
}

/// File-per-slot storage rooted at an injected directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a backend rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn slot_path(&self, slot: &str) -> StorageResult<PathBuf> {
        validate_slot(slot)?;
        Ok(self.dir.join(format!("{slot}.json")))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, slot: &str) -> StorageResult<Option<Vec<u8>>> {
        let path = self.slot_path(slot)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, slot: &str, bytes: &[u8]) -> StorageResult<()> {
        let path = self.slot_path(slot)?;
        let tmp = self.dir.join(format!("{slot}.json.tmp"));
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, slot: &str) -> StorageResult<()> {
        let path = self.slot_path(slot)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-process storage fake for tests and demos.
///
/// Interior mutability keeps the trait object shareable from `&self`
/// callers; the core is single-threaded by design.
#[derive(Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates one slot, bypassing validation of payload contents.
    pub fn with_slot(slot: &str, bytes: Vec<u8>) -> Self {
        let storage = Self::default();
        storage.slots.borrow_mut().insert(slot.to_string(), bytes);
        storage
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, slot: &str) -> StorageResult<Option<Vec<u8>>> {
        validate_slot(slot)?;
        Ok(self.slots.borrow().get(slot).cloned())
    }

    fn write(&self, slot: &str, bytes: &[u8]) -> StorageResult<()> {
        validate_slot(slot)?;
        self.slots
            .borrow_mut()
            .insert(slot.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, slot: &str) -> StorageResult<()> {
        validate_slot(slot)?;
        self.slots.borrow_mut().remove(slot);
        Ok(())
    }
}
