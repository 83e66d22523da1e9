pub mod errors;
pub mod models;
pub mod services;
pub mod storage;
pub mod view;

use models::{
    expense::{AmountInput, ExpenseRecord},
    settings::StoreSettings,
};
use services::{expense_service::ExpenseService, id_service::IdService};
use storage::{manager::SnapshotManager, traits::PersistenceAdapter};

use errors::CoreError;

/// What `ExpenseStore::load` found in storage.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Nothing stored; the list starts empty.
    Empty,
    /// A valid snapshot replaced the list.
    Restored { count: usize },
    /// Stored data was malformed and ignored; the list starts empty.
    Discarded { reason: String },
}

/// Result of `ExpenseStore::remove`. A missing id is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Removal {
    Removed(ExpenseRecord),
    NotFound,
}

/// Main entry point for the Expense Tracker core library.
/// Owns the expense list and is the only writer of its persisted snapshot.
///
/// Lifecycle: `new` → `load` → create / remove / clear. Mutations before
/// `load` fail with `CoreError::NotReady`. Every successful mutation is
/// written through to storage before it returns.
#[must_use]
pub struct ExpenseStore<P> {
    expenses: Vec<ExpenseRecord>,
    snapshots: SnapshotManager<P>,
    settings: StoreSettings,
    expense_service: ExpenseService,
    id_service: IdService,
    ready: bool,
}

impl<P> std::fmt::Debug for ExpenseStore<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseStore")
            .field("expenses", &self.expenses.len())
            .field("settings", &self.settings)
            .field("last_id", &self.id_service.last_issued())
            .field("ready", &self.ready)
            .finish()
    }
}

impl<P: PersistenceAdapter> ExpenseStore<P> {
    /// Create an unloaded store with default settings.
    pub fn new(adapter: P) -> Self {
        Self::build(adapter, StoreSettings::default())
    }

    /// Create an unloaded store with custom settings.
    pub fn with_settings(adapter: P, settings: StoreSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(adapter, settings))
    }

    // ── Startup ─────────────────────────────────────────────────────

    /// Read the persisted snapshot and replace the in-memory list with it.
    ///
    /// Malformed data does not fail the call: it is logged, the list starts
    /// empty and `LoadOutcome::Discarded` says why. Only a failing store
    /// read is returned as an error, in which case the store stays as it was.
    /// Never writes to storage.
    pub fn load(&mut self) -> Result<LoadOutcome, CoreError> {
        let outcome = match self.snapshots.load() {
            Ok(Some(expenses)) => {
                let count = expenses.len();
                self.expenses = expenses;
                LoadOutcome::Restored { count }
            }
            Ok(None) => {
                self.expenses.clear();
                LoadOutcome::Empty
            }
            Err(CoreError::Deserialization(reason)) => {
                tracing::warn!(
                    key = self.snapshots.key(),
                    %reason,
                    "Discarding malformed expense snapshot"
                );
                self.expenses.clear();
                LoadOutcome::Discarded { reason }
            }
            Err(e) => return Err(e),
        };

        self.id_service.seed(self.expenses.iter().map(|e| e.id));
        self.ready = true;
        tracing::info!(key = self.snapshots.key(), ?outcome, "Expense store loaded");
        Ok(outcome)
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Record a new expense and persist the updated list.
    ///
    /// Invalid input fails with `CoreError::InvalidInput` before anything
    /// is touched, so no storage write is issued.
    pub fn create(
        &mut self,
        name: &str,
        amount: impl Into<AmountInput>,
    ) -> Result<ExpenseRecord, CoreError> {
        self.ensure_ready()?;
        let (name, amount) =
            self.expense_service
                .validate_input(name, &amount.into(), &self.settings)?;

        let record = ExpenseRecord::new(self.id_service.next_id(), name, amount);
        self.expenses.push(record.clone());

        if let Err(e) = self.snapshots.save(&self.expenses) {
            let rolled_back = self.settings.rollback_on_persistence_failure;
            if rolled_back {
                self.expenses.pop();
            }
            tracing::warn!(error = %e, rolled_back, "Failed to persist new expense");
            return Err(e);
        }

        tracing::debug!(id = record.id, total = self.total(), "Expense created");
        Ok(record)
    }

    /// Remove the expense with `id`. Removing an unknown id succeeds with
    /// `Removal::NotFound`. The snapshot is rewritten either way.
    pub fn remove(&mut self, id: i64) -> Result<Removal, CoreError> {
        self.ensure_ready()?;
        let removed = self.expense_service.remove(&mut self.expenses, id);

        if let Err(e) = self.snapshots.save(&self.expenses) {
            let rolled_back = self.settings.rollback_on_persistence_failure;
            if rolled_back {
                if let Some((idx, record)) = removed {
                    self.expenses.insert(idx, record);
                }
            }
            tracing::warn!(error = %e, id, rolled_back, "Failed to persist expense removal");
            return Err(e);
        }

        tracing::debug!(id, found = removed.is_some(), total = self.total(), "Expense removed");
        Ok(match removed {
            Some((_, record)) => Removal::Removed(record),
            None => Removal::NotFound,
        })
    }

    /// Remove every expense and delete the stored snapshot key.
    pub fn clear(&mut self) -> Result<(), CoreError> {
        self.ensure_ready()?;
        let previous = std::mem::take(&mut self.expenses);

        if let Err(e) = self.snapshots.delete() {
            let rolled_back = self.settings.rollback_on_persistence_failure;
            if rolled_back {
                self.expenses = previous;
            }
            tracing::warn!(error = %e, rolled_back, "Failed to delete expense snapshot");
            return Err(e);
        }

        tracing::debug!(removed = previous.len(), "Expenses cleared");
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Sum of all amounts; 0 for an empty list.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.expense_service.total(&self.expenses)
    }

    /// All expenses in insertion (display) order.
    #[must_use]
    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&ExpenseRecord> {
        self.expenses.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// `true` once `load` has completed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Export all expenses as a pretty-printed JSON string.
    pub fn export_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.expenses)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize expenses to JSON: {e}")))
    }

    // ── Storage Access ──────────────────────────────────────────────

    /// The underlying blob store (read-only).
    pub fn storage(&self) -> &P {
        self.snapshots.adapter()
    }

    /// Hand the blob store back, e.g. to reopen it with a fresh store.
    pub fn into_storage(self) -> P {
        self.snapshots.into_adapter()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn ensure_ready(&self) -> Result<(), CoreError> {
        if self.ready {
            Ok(())
        } else {
            Err(CoreError::NotReady)
        }
    }

    fn build(adapter: P, settings: StoreSettings) -> Self {
        let snapshots = SnapshotManager::new(adapter, settings.storage_key.clone());

        Self {
            expenses: Vec::new(),
            snapshots,
            settings,
            expense_service: ExpenseService::new(),
            id_service: IdService::new(),
            ready: false,
        }
    }
}
