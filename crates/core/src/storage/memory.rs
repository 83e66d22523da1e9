use std::collections::HashMap;

use crate::errors::CoreError;

use super::traits::PersistenceAdapter;

/// In-memory blob store.
///
/// Behaves like browser `localStorage`, including an optional size quota:
/// a write that would push the stored bytes (keys + values) past the quota
/// is rejected and leaves the previous value in place.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
    write_count: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes once `quota_bytes` would be exceeded.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Change (or lift) the quota. Existing entries are kept as they are.
    pub fn set_quota(&mut self, quota_bytes: Option<usize>) {
        self.quota_bytes = quota_bytes;
    }

    /// Raw value under `key`, bypassing the adapter interface.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Put a raw value in place, e.g. to simulate data written by an older build.
    /// Not counted as a write and not subject to the quota.
    pub fn insert_raw(&mut self, key: impl Into<String>, data: impl Into<String>) {
        self.entries.insert(key.into(), data.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of `save`/`delete` calls received, including rejected ones.
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Bytes currently stored (keys + values).
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl PersistenceAdapter for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, data: &str) -> Result<(), CoreError> {
        self.write_count += 1;

        if let Some(quota) = self.quota_bytes {
            let replaced = self.entries.get(key).map_or(0, |v| key.len() + v.len());
            let needed = self.used_bytes() - replaced + key.len() + data.len();
            if needed > quota {
                return Err(CoreError::Persistence(format!(
                    "Storage quota exceeded: writing '{key}' needs {needed} bytes, quota is {quota}"
                )));
            }
        }

        self.entries.insert(key.to_string(), data.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), CoreError> {
        self.write_count += 1;
        self.entries.remove(key);
        Ok(())
    }
}
