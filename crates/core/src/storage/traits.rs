use crate::errors::CoreError;

/// Key-value blob store the expense snapshot lives in.
///
/// The browser build maps this onto `localStorage`; native builds use
/// `MemoryStorage` or `FileStorage`. The adapter only moves strings around —
/// encoding is handled by `storage::format`.
///
/// All calls are synchronous. A rejected write (quota exceeded, storage
/// disabled) must be reported as `CoreError::Persistence`.
pub trait PersistenceAdapter {
    /// Read the value under `key`. `Ok(None)` if never written or deleted.
    fn load(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Write `data` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, data: &str) -> Result<(), CoreError>;

    /// Remove `key` entirely. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), CoreError>;
}

impl<P: PersistenceAdapter + ?Sized> PersistenceAdapter for Box<P> {
    fn load(&self, key: &str) -> Result<Option<String>, CoreError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, data: &str) -> Result<(), CoreError> {
        (**self).save(key, data)
    }

    fn delete(&mut self, key: &str) -> Result<(), CoreError> {
        (**self).delete(key)
    }
}
