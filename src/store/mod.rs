//! Record store adapter.
//!
//! The engine only needs an ordered JSON document per key, the same way
//! the report used to live in browser local storage. Backends implement
//! [`RecordStore`]; typed access goes through [`read_records`] /
//! [`write_records`] and [`read_document`] / [`write_document`].

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

pub const NOTES_KEY: &str = "weekly_report_notes_v9";
pub const DATE_RANGE_KEY: &str = "weekly_report_dateRange_v9";

/// Key/value persistence for serialized collections.
///
/// Failures are returned as-is; the engine never retries or masks them.
pub trait RecordStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Remove every key in one atomic step.
    fn remove_all(&mut self, keys: &[&str]) -> AppResult<()>;

    /// Append an audit line. Backends without an audit trail ignore it.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Ordered records under `key`; empty when absent or unreadable.
pub fn read_records<T, S>(store: &S, key: &str) -> AppResult<Vec<T>>
where
    T: DeserializeOwned,
    S: RecordStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(records) => Ok(records),
        Err(e) => {
            warn!(key, error = %e, "stored collection could not be parsed, reading it as empty");
            Ok(Vec::new())
        }
    }
}

pub fn write_records<T, S>(store: &mut S, key: &str, records: &[T]) -> AppResult<()>
where
    T: Serialize,
    S: RecordStore + ?Sized,
{
    let json = serde_json::to_string(records)?;
    store.set(key, &json)
}

/// Single JSON document under `key`; default when absent or unreadable.
pub fn read_document<T, S>(store: &S, key: &str) -> AppResult<T>
where
    T: DeserializeOwned + Default,
    S: RecordStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(T::default());
    };

    match serde_json::from_str::<T>(&raw) {
        Ok(doc) => Ok(doc),
        Err(e) => {
            warn!(key, error = %e, "stored document could not be parsed, using defaults");
            Ok(T::default())
        }
    }
}

pub fn write_document<T, S>(store: &mut S, key: &str, doc: &T) -> AppResult<()>
where
    T: Serialize,
    S: RecordStore + ?Sized,
{
    let json = serde_json::to_string(doc)?;
    store.set(key, &json)
}
