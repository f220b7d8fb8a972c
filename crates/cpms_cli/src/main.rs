//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cpms_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use cpms_core::{CompanyStore, MemoryStorage};

fn main() {
    println!("cpms_core version={}", cpms_core::core_version());

    // Exercise the seed path against the in-memory backend; no files touched.
    let mut store = CompanyStore::new(MemoryStorage::new());
    match store.load() {
        Ok(()) => println!("cpms_core seed_records={}", store.list().len()),
        Err(err) => eprintln!("cpms_core load_error={err}"),
    }
}
