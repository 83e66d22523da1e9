use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Storage key used by the browser build of the tracker.
pub const DEFAULT_STORAGE_KEY: &str = "expenses";

/// Store configuration.
///
/// Every field has a default, so a partial JSON document (or `{}`) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Key under which the snapshot is written in the blob store.
    pub storage_key: String,

    /// Undo the in-memory change when the blob store rejects a write.
    /// When `false`, memory keeps the change and storage lags behind
    /// until the next successful write.
    pub rollback_on_persistence_failure: bool,

    /// Accept zero and negative amounts in `create`.
    pub allow_non_positive_amounts: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            rollback_on_persistence_failure: true,
            allow_non_positive_amounts: true,
        }
    }
}

impl StoreSettings {
    /// Parse settings from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: StoreSettings = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidConfig(format!("Failed to parse settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.storage_key.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "storage_key must not be empty".into(),
            ));
        }
        Ok(())
    }
}
