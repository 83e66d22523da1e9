use serde::{Deserialize, Serialize};

/// A single recorded expense.
///
/// `id` is assigned by the store at creation time (milliseconds since the
/// Unix epoch, bumped to stay strictly increasing) and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier within the store
    pub id: i64,

    /// What the money was spent on (trimmed, never empty)
    pub name: String,

    /// Amount spent (finite)
    pub amount: f64,
}

impl ExpenseRecord {
    pub fn new(id: i64, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
        }
    }
}

/// Raw amount as handed over by the caller.
///
/// Form fields deliver text; programmatic callers may already have a number.
/// Both go through the same validation in `ExpenseService::parse_amount`.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    /// Unparsed text, e.g. the value of an `<input>` element
    Text(String),
    /// Already-numeric value
    Number(f64),
}

impl From<&str> for AmountInput {
    fn from(s: &str) -> Self {
        AmountInput::Text(s.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(s: String) -> Self {
        AmountInput::Text(s)
    }
}

impl From<f64> for AmountInput {
    fn from(n: f64) -> Self {
        AmountInput::Number(n)
    }
}

impl std::fmt::Display for AmountInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmountInput::Text(s) => write!(f, "{s}"),
            AmountInput::Number(n) => write!(f, "{n}"),
        }
    }
}
