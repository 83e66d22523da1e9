use crate::errors::CoreError;
use crate::models::expense::{AmountInput, ExpenseRecord};
use crate::models::settings::StoreSettings;

/// Validates expense input and computes totals.
///
/// Pure business logic — no I/O, no clock. Easy to test.
pub struct ExpenseService;

impl ExpenseService {
    pub fn new() -> Self {
        Self
    }

    /// Validate raw form input and return the cleaned `(name, amount)` pair.
    ///
    /// Rules:
    /// - Name must be non-empty after trimming
    /// - Amount must parse as a finite number
    /// - Amount must be positive unless the settings allow otherwise
    pub fn validate_input(
        &self,
        name: &str,
        amount: &AmountInput,
        settings: &StoreSettings,
    ) -> Result<(String, f64), CoreError> {
        let name = self.validate_name(name)?;
        let amount = self.parse_amount(amount)?;

        if !settings.allow_non_positive_amounts && amount <= 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "Expense amount must be positive, got {amount}"
            )));
        }

        Ok((name, amount))
    }

    /// Trim surrounding whitespace and reject empty names.
    pub fn validate_name(&self, name: &str) -> Result<String, CoreError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidInput(
                "Expense name must not be empty".into(),
            ));
        }
        Ok(trimmed.to_string())
    }

    /// Parse an amount. The whole trimmed text must be a float literal;
    /// `"12abc"` is rejected rather than read as 12.
    pub fn parse_amount(&self, amount: &AmountInput) -> Result<f64, CoreError> {
        let value = match amount {
            AmountInput::Number(n) => *n,
            AmountInput::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                CoreError::InvalidInput(format!("'{text}' is not a valid amount"))
            })?,
        };

        if !value.is_finite() {
            return Err(CoreError::InvalidInput(format!(
                "Amount must be a finite number, got '{amount}'"
            )));
        }

        Ok(value)
    }

    /// Sum of all amounts, folded left from 0.0. Non-finite values propagate.
    pub fn total(&self, expenses: &[ExpenseRecord]) -> f64 {
        expenses.iter().fold(0.0, |acc, e| acc + e.amount)
    }

    /// Remove the record with the given id.
    /// Returns its former position and the record so the caller can restore it.
    pub fn remove(
        &self,
        expenses: &mut Vec<ExpenseRecord>,
        id: i64,
    ) -> Option<(usize, ExpenseRecord)> {
        let idx = expenses.iter().position(|e| e.id == id)?;
        Some((idx, expenses.remove(idx)))
    }
}

impl Default for ExpenseService {
    fn default() -> Self {
        Self::new()
    }
}
