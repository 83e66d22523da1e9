use crate::errors::CoreError;
use crate::models::expense::{AmountInput, ExpenseRecord};
use crate::storage::traits::PersistenceAdapter;
use crate::{ExpenseStore, LoadOutcome, Removal};

use super::renderer::{format_total, Renderer};

/// Prompt shown before deleting a single expense.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this expense?";

/// Prompt shown before clearing all expenses.
pub const CLEAR_PROMPT: &str = "Are you sure you want to delete all expenses?";

/// Forwards user intents (submit, delete, clear) to an `ExpenseStore` and
/// keeps a `Renderer` in sync with the result.
///
/// Errors are shown through `Renderer::show_error` and also returned, so
/// callers can react (e.g. keep the form filled in after a failed submit).
pub struct ExpenseController<P, R> {
    store: ExpenseStore<P>,
    renderer: R,
}

impl<P: PersistenceAdapter, R: Renderer> ExpenseController<P, R> {
    pub fn new(store: ExpenseStore<P>, renderer: R) -> Self {
        Self { store, renderer }
    }

    /// Load persisted expenses and draw the initial list and total.
    pub fn start(&mut self) -> Result<LoadOutcome, CoreError> {
        let outcome = match self.store.load() {
            Ok(outcome) => outcome,
            Err(e) => {
                self.renderer.show_error(&e);
                return Err(e);
            }
        };

        if let LoadOutcome::Discarded { reason } = &outcome {
            self.renderer
                .show_error(&CoreError::Deserialization(reason.clone()));
        }

        self.renderer.clear_display();
        for record in self.store.expenses() {
            self.renderer.display_record(record);
        }
        self.refresh_total();
        Ok(outcome)
    }

    /// Handle a form submission.
    pub fn submit(
        &mut self,
        name: &str,
        amount: impl Into<AmountInput>,
    ) -> Result<ExpenseRecord, CoreError> {
        match self.store.create(name, amount) {
            Ok(record) => {
                self.renderer.display_record(&record);
                self.refresh_total();
                Ok(record)
            }
            Err(e) => {
                self.renderer.show_error(&e);
                Err(e)
            }
        }
    }

    /// Handle a click on a record's delete icon.
    /// Returns `Ok(None)` if the user declined the confirmation.
    pub fn delete(&mut self, id: i64) -> Result<Option<Removal>, CoreError> {
        if !self.renderer.confirm(DELETE_PROMPT) {
            return Ok(None);
        }

        match self.store.remove(id) {
            Ok(removal) => {
                if matches!(removal, Removal::Removed(_)) {
                    self.renderer.remove_displayed_record(id);
                }
                self.refresh_total();
                Ok(Some(removal))
            }
            Err(e) => {
                self.renderer.show_error(&e);
                Err(e)
            }
        }
    }

    /// Handle a click on the clear button.
    /// Returns `Ok(false)` if the user declined the confirmation.
    pub fn clear_all(&mut self) -> Result<bool, CoreError> {
        if !self.renderer.confirm(CLEAR_PROMPT) {
            return Ok(false);
        }

        match self.store.clear() {
            Ok(()) => {
                self.renderer.clear_display();
                self.refresh_total();
                Ok(true)
            }
            Err(e) => {
                self.renderer.show_error(&e);
                Err(e)
            }
        }
    }

    pub fn store(&self) -> &ExpenseStore<P> {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_parts(self) -> (ExpenseStore<P>, R) {
        (self.store, self.renderer)
    }

    fn refresh_total(&mut self) {
        let total = format_total(self.store.total());
        self.renderer.show_total(&total);
    }
}
