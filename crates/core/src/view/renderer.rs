use crate::errors::CoreError;
use crate::models::expense::ExpenseRecord;

/// Display surface driven by `ExpenseController`.
///
/// Implemented by the UI layer (DOM, terminal, test double). Holds no
/// expense state of its own; everything it shows comes from the store.
pub trait Renderer {
    /// Append one record to the list, with a delete affordance keyed by `record.id`.
    /// The amount badge is expected to read `format_amount(record.amount)`.
    fn display_record(&mut self, record: &ExpenseRecord);

    /// Remove the displayed record with this id.
    fn remove_displayed_record(&mut self, id: i64);

    /// Remove every displayed record.
    fn clear_display(&mut self);

    /// Show the running total, already formatted by `format_total`.
    fn show_total(&mut self, total: &str);

    /// Ask the user to confirm a destructive action.
    fn confirm(&mut self, message: &str) -> bool;

    /// Tell the user an action failed.
    fn show_error(&mut self, error: &CoreError);
}

/// Format a record amount for the list badge, e.g. `$3.50` (`$-3.50` when negative).
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("${}", format_total(amount))
}

/// Format a total with exactly two decimals, e.g. `15.50`.
///
/// Rounds like JavaScript's `toFixed(2)`: an exact tie at the third decimal
/// goes away from zero (`1.125` → `1.13`), where `{:.2}` would pick the even digit.
#[must_use]
pub fn format_total(total: f64) -> String {
    // -0.0 would print as "-0.00"
    let total = if total == 0.0 { 0.0 } else { total };
    let sign = if total < 0.0 { "-" } else { "" };
    let magnitude = total.abs();

    // Exact ties are the odd multiples of 1/8
    let eighths = magnitude * 8.0;
    let magnitude = if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        (magnitude * 100.0).ceil() / 100.0
    } else {
        magnitude
    };

    format!("{sign}{magnitude:.2}")
}
