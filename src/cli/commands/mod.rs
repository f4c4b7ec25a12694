pub mod clear;
pub mod completed;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod notes;
pub mod ongoing;
pub mod range;

use crate::config::Config;
use crate::core::repository::{Repository, Upsert};
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::{success, warning};

/// Repository over the configured SQLite database.
pub(crate) fn open_repo(cfg: &Config) -> AppResult<Repository<SqliteStore>> {
    Ok(Repository::new(SqliteStore::open(&cfg.database)?))
}

/// Report the outcome of an upsert. `label` is e.g. "Ongoing inspection".
pub(crate) fn report_upsert(label: &str, outcome: &Upsert) {
    match outcome {
        Upsert::Created(id) => success(format!("{label} added (id {id}).")),
        Upsert::Updated(id) => success(format!("{label} {id} updated.")),
        Upsert::Ignored(id) => warning(format!("{label} '{id}' not found; nothing changed.")),
    }
}
