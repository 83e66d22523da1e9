use crate::errors::CoreError;
use crate::models::expense::ExpenseRecord;

use super::format;
use super::traits::PersistenceAdapter;

/// Snapshot operations against a blob store under one fixed key.
///
/// Flow: `[ExpenseRecord]` → JSON text → `adapter.save(key, ..)`
#[derive(Debug)]
pub struct SnapshotManager<P> {
    adapter: P,
    key: String,
}

impl<P: PersistenceAdapter> SnapshotManager<P> {
    pub fn new(adapter: P, key: impl Into<String>) -> Self {
        Self {
            adapter,
            key: key.into(),
        }
    }

    /// Overwrite the stored snapshot with `expenses`.
    pub fn save(&mut self, expenses: &[ExpenseRecord]) -> Result<(), CoreError> {
        let data = format::encode_snapshot(expenses)?;
        self.adapter.save(&self.key, &data)
    }

    /// Read and decode the stored snapshot.
    ///
    /// `Ok(None)` if nothing is stored. A store read failure comes back as
    /// `CoreError::Persistence`, malformed data as `CoreError::Deserialization`.
    pub fn load(&self) -> Result<Option<Vec<ExpenseRecord>>, CoreError> {
        match self.adapter.load(&self.key)? {
            Some(data) => format::decode_snapshot(&data).map(Some),
            None => Ok(None),
        }
    }

    /// Remove the stored snapshot. The key is deleted, not set to an empty list.
    pub fn delete(&mut self) -> Result<(), CoreError> {
        self.adapter.delete(&self.key)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn adapter(&self) -> &P {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut P {
        &mut self.adapter
    }

    pub fn into_adapter(self) -> P {
        self.adapter
    }
}
