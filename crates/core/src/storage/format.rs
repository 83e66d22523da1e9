use std::collections::HashSet;

use crate::errors::CoreError;
use crate::models::expense::ExpenseRecord;

/// Encode the expense list as a snapshot.
///
/// Layout (same as the browser build's `localStorage` value):
/// ```text
/// [{"id":1700000000000,"name":"Coffee","amount":3.5}, ...]
/// ```
pub fn encode_snapshot(expenses: &[ExpenseRecord]) -> Result<String, CoreError> {
    serde_json::to_string(expenses)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize expenses: {e}")))
}

/// Decode and check a snapshot.
///
/// Besides being well-formed JSON of the right shape, a snapshot must hold
/// unique ids and finite amounts. Anything else is reported as
/// `CoreError::Deserialization`. Names are taken as stored: older builds
/// saved empty names, and those records are still the user's data.
pub fn decode_snapshot(data: &str) -> Result<Vec<ExpenseRecord>, CoreError> {
    let expenses: Vec<ExpenseRecord> = serde_json::from_str(data)
        .map_err(|e| CoreError::Deserialization(format!("Failed to parse expense snapshot: {e}")))?;

    let mut seen = HashSet::with_capacity(expenses.len());
    for (idx, expense) in expenses.iter().enumerate() {
        if !seen.insert(expense.id) {
            return Err(CoreError::Deserialization(format!(
                "Duplicate expense id {} at position {idx}",
                expense.id
            )));
        }
        if !expense.amount.is_finite() {
            return Err(CoreError::Deserialization(format!(
                "Expense {} has a non-finite amount",
                expense.id
            )));
        }
    }

    Ok(expenses)
}
