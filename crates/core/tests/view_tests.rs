// ═══════════════════════════════════════════════════════════════════
// View Tests — formatting helpers, ExpenseController + Renderer
// ═══════════════════════════════════════════════════════════════════

use std::collections::VecDeque;

use expense_tracker_core::errors::CoreError;
use expense_tracker_core::models::expense::ExpenseRecord;
use expense_tracker_core::storage::memory::MemoryStorage;
use expense_tracker_core::view::controller::{ExpenseController, CLEAR_PROMPT, DELETE_PROMPT};
use expense_tracker_core::view::renderer::{format_amount, format_total, Renderer};
use expense_tracker_core::{ExpenseStore, LoadOutcome, Removal};

// ═══════════════════════════════════════════════════════════════════
// Recording renderer
// ═══════════════════════════════════════════════════════════════════

/// Keeps what a DOM would show, plus every confirmation prompt and error.
#[derive(Debug, Default)]
struct RecordingRenderer {
    rows: Vec<(i64, String, String)>,
    total: Option<String>,
    prompts: Vec<String>,
    answers: VecDeque<bool>,
    errors: Vec<String>,
}

impl RecordingRenderer {
    fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Renderer for RecordingRenderer {
    fn display_record(&mut self, record: &ExpenseRecord) {
        self.rows
            .push((record.id, record.name.clone(), format_amount(record.amount)));
    }

    fn remove_displayed_record(&mut self, id: i64) {
        self.rows.retain(|(row_id, _, _)| *row_id != id);
    }

    fn clear_display(&mut self) {
        self.rows.clear();
    }

    fn show_total(&mut self, total: &str) {
        self.total = Some(total.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.answers.pop_front().unwrap_or(true)
    }

    fn show_error(&mut self, error: &CoreError) {
        self.errors.push(error.to_string());
    }
}

fn started(storage: MemoryStorage, answers: &[bool]) -> ExpenseController<MemoryStorage, RecordingRenderer> {
    let mut controller = ExpenseController::new(
        ExpenseStore::new(storage),
        RecordingRenderer::answering(answers),
    );
    controller.start().unwrap();
    controller
}

// ═══════════════════════════════════════════════════════════════════
// Formatting
// ═══════════════════════════════════════════════════════════════════

mod formatting {
    use super::*;

    #[test]
    fn total_has_two_decimals() {
        assert_eq!(format_total(0.0), "0.00");
        assert_eq!(format_total(15.5), "15.50");
        assert_eq!(format_total(12.0), "12.00");
        assert_eq!(format_total(1234.567), "1234.57");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_total(-0.0), "0.00");
    }

    #[test]
    fn negative_total() {
        assert_eq!(format_total(-2.5), "-2.50");
    }

    #[test]
    fn amount_has_dollar_sign() {
        assert_eq!(format_amount(3.5), "$3.50");
        assert_eq!(format_amount(12.0), "$12.00");
    }

    #[test]
    fn negative_amount_keeps_sign_after_dollar() {
        assert_eq!(format_amount(-3.5), "$-3.50");
    }

    #[test]
    fn amount_uses_total_rounding() {
        assert_eq!(format_amount(1.125), "$1.13");
        assert_eq!(format_amount(0.0), "$0.00");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_total(1.125), "1.13");
        assert_eq!(format_total(0.375), "0.38");
        assert_eq!(format_total(0.625), "0.63");
        assert_eq!(format_total(-1.125), "-1.13");
    }

    #[test]
    fn near_ties_follow_binary_value() {
        // 1.005 and 2.675 are stored just below the halfway point
        assert_eq!(format_total(1.005), "1.00");
        assert_eq!(format_total(2.675), "2.67");
    }

    #[test]
    fn non_finite_total() {
        assert_eq!(format_total(f64::NAN), "NaN");
        assert_eq!(format_total(f64::INFINITY), "inf");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Start
// ═══════════════════════════════════════════════════════════════════

mod start {
    use super::*;

    #[test]
    fn empty_storage_shows_zero_total() {
        let controller = started(MemoryStorage::new(), &[]);
        assert!(controller.renderer().rows.is_empty());
        assert_eq!(controller.renderer().total.as_deref(), Some("0.00"));
    }

    #[test]
    fn renders_persisted_records_in_order() {
        let mut storage = MemoryStorage::new();
        storage.insert_raw(
            "expenses",
            r#"[{"id":1,"name":"Coffee","amount":3.5},{"id":2,"name":"Lunch","amount":12}]"#,
        );
        let controller = started(storage, &[]);
        let rows = &controller.renderer().rows;
        assert_eq!(
            rows,
            &vec![
                (1, "Coffee".to_string(), "$3.50".to_string()),
                (2, "Lunch".to_string(), "$12.00".to_string()),
            ]
        );
        assert_eq!(controller.renderer().total.as_deref(), Some("15.50"));
    }

    #[test]
    fn corrupt_storage_reports_error_and_starts_empty() {
        let mut storage = MemoryStorage::new();
        storage.insert_raw("expenses", "oops");
        let mut controller =
            ExpenseController::new(ExpenseStore::new(storage), RecordingRenderer::default());

        let outcome = controller.start().unwrap();
        assert!(matches!(outcome, LoadOutcome::Discarded { .. }));
        assert_eq!(controller.renderer().errors.len(), 1);
        assert!(controller.renderer().errors[0].starts_with("Deserialization error"));
        assert_eq!(controller.renderer().total.as_deref(), Some("0.00"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Submit / delete / clear
// ═══════════════════════════════════════════════════════════════════

mod intents {
    use super::*;

    #[test]
    fn submit_displays_record_and_total() {
        let mut controller = started(MemoryStorage::new(), &[]);
        let record = controller.submit("Coffee", "3.50").unwrap();
        assert_eq!(
            controller.renderer().rows,
            vec![(record.id, "Coffee".to_string(), "$3.50".to_string())]
        );
        assert_eq!(controller.renderer().total.as_deref(), Some("3.50"));
    }

    #[test]
    fn invalid_submit_shows_error_and_keeps_display() {
        let mut controller = started(MemoryStorage::new(), &[]);
        controller.submit("Coffee", "3.50").unwrap();

        let err = controller.submit("Bad", "abc").unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
        assert_eq!(controller.renderer().rows.len(), 1);
        assert_eq!(controller.renderer().total.as_deref(), Some("3.50"));
        assert_eq!(controller.renderer().errors.len(), 1);
    }

    #[test]
    fn delete_asks_for_confirmation() {
        let mut controller = started(MemoryStorage::new(), &[true]);
        let coffee = controller.submit("Coffee", "3.50").unwrap();
        controller.submit("Lunch", "12").unwrap();

        let removal = controller.delete(coffee.id).unwrap();
        assert_eq!(removal, Some(Removal::Removed(coffee.clone())));
        assert_eq!(controller.renderer().prompts, vec![DELETE_PROMPT.to_string()]);
        assert_eq!(controller.renderer().rows.len(), 1);
        assert_eq!(controller.renderer().total.as_deref(), Some("12.00"));
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let mut controller = started(MemoryStorage::new(), &[false]);
        let coffee = controller.submit("Coffee", "3.50").unwrap();
        let writes = controller.store().storage().write_count();

        assert_eq!(controller.delete(coffee.id).unwrap(), None);
        assert_eq!(controller.store().len(), 1);
        assert_eq!(controller.renderer().rows.len(), 1);
        assert_eq!(controller.store().storage().write_count(), writes);
    }

    #[test]
    fn delete_unknown_id_is_harmless() {
        let mut controller = started(MemoryStorage::new(), &[true]);
        controller.submit("Coffee", "3.50").unwrap();
        assert_eq!(controller.delete(999).unwrap(), Some(Removal::NotFound));
        assert_eq!(controller.renderer().rows.len(), 1);
        assert!(controller.renderer().errors.is_empty());
    }

    #[test]
    fn clear_all_asks_for_confirmation() {
        let mut controller = started(MemoryStorage::new(), &[true]);
        controller.submit("Coffee", "3.50").unwrap();
        controller.submit("Lunch", "12").unwrap();

        assert!(controller.clear_all().unwrap());
        assert_eq!(controller.renderer().prompts, vec![CLEAR_PROMPT.to_string()]);
        assert!(controller.renderer().rows.is_empty());
        assert_eq!(controller.renderer().total.as_deref(), Some("0.00"));
        assert!(!controller.store().storage().contains_key("expenses"));
    }

    #[test]
    fn declined_clear_changes_nothing() {
        let mut controller = started(MemoryStorage::new(), &[false]);
        controller.submit("Coffee", "3.50").unwrap();
        assert!(!controller.clear_all().unwrap());
        assert_eq!(controller.store().len(), 1);
        assert_eq!(controller.renderer().rows.len(), 1);
    }

    #[test]
    fn persistence_failure_is_shown() {
        let mut controller = started(MemoryStorage::with_quota(100), &[]);
        controller.submit("Coffee", "3.50").unwrap();

        let err = controller.submit(&"x".repeat(300), "1").unwrap_err();
        assert!(matches!(err, CoreError::Persistence(_)));
        assert!(controller.renderer().errors[0].starts_with("Persistence failure"));
        assert_eq!(controller.renderer().rows.len(), 1);
    }

    #[test]
    fn into_parts_returns_store_and_renderer() {
        let mut controller = started(MemoryStorage::new(), &[]);
        controller.submit("Coffee", "3.50").unwrap();
        controller.renderer_mut().errors.push("note".into());
        let (store, renderer) = controller.into_parts();
        assert_eq!(store.len(), 1);
        assert_eq!(renderer.errors, vec!["note".to_string()]);
    }
}
