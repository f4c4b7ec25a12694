//! SQLite-backed record store (one row per key in `kv_store`).

use super::RecordStore;
use crate::db::audit::{self, LogRow};
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_values, load_value, save_value};
use crate::errors::AppResult;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        run_pending_migrations(&pool.conn)?;
        Ok(Self { pool })
    }

    /// Private in-memory database, handy for tests.
    pub fn open_in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        run_pending_migrations(&pool.conn)?;
        Ok(Self { pool })
    }

    /// Internal log, newest first.
    pub fn log_rows(&self) -> AppResult<Vec<LogRow>> {
        audit::newest_first(&self.pool.conn)
    }
}

impl RecordStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        load_value(&self.pool.conn, key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        save_value(&self.pool.conn, key, value)
    }

    fn remove_all(&mut self, keys: &[&str]) -> AppResult<()> {
        self.pool.with_conn(|conn| delete_values(conn, keys))
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        audit::append(&self.pool.conn, operation, target, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_and_remove_all_is_complete() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set("a", "[1]").unwrap();
        store.set("b", "[2]").unwrap();
        store.set("a", "[3]").unwrap();

        assert_eq!(store.get("a").unwrap().as_deref(), Some("[3]"));

        store.remove_all(&["a", "b", "never-set"]).unwrap();
        assert!(store.get("a").unwrap().is_none());
        assert!(store.get("b").unwrap().is_none());
    }

    #[test]
    fn audit_lines_come_back_newest_first() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.audit("add", "ongo_1", "first").unwrap();
        store.audit("del", "ongo_1", "second").unwrap();

        let rows: Vec<String> = store
            .log_rows()
            .unwrap()
            .into_iter()
            .filter(|r| r.operation == "add" || r.operation == "del")
            .map(|r| r.message)
            .collect();
        assert_eq!(rows, ["second", "first"]);
    }
}
