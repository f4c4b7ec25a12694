use super::RecordStore;
use crate::errors::AppResult;
use std::collections::BTreeMap;

/// In-process store, used by tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_all(&mut self, keys: &[&str]) -> AppResult<()> {
        for key in keys {
            self.entries.remove(*key);
        }
        Ok(())
    }
}
