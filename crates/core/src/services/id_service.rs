use chrono::Utc;

/// Issues expense ids.
///
/// Ids start from the wall clock in milliseconds but are forced to be
/// strictly increasing: two creations within the same millisecond, or a
/// clock that steps backwards, still yield distinct ids.
#[derive(Debug, Default)]
pub struct IdService {
    last_issued: Option<i64>,
}

impl IdService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id based on the current time.
    pub fn next_id(&mut self) -> i64 {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    /// Next id given an explicit clock reading (milliseconds).
    pub fn next_id_at(&mut self, now_ms: i64) -> i64 {
        let id = match self.last_issued {
            Some(last) if now_ms <= last => last.saturating_add(1),
            _ => now_ms,
        };
        self.last_issued = Some(id);
        id
    }

    /// Make sure future ids are greater than every id in `existing`.
    pub fn seed(&mut self, existing: impl IntoIterator<Item = i64>) {
        if let Some(max) = existing.into_iter().max() {
            self.last_issued = Some(self.last_issued.map_or(max, |last| last.max(max)));
        }
    }

    /// The most recently issued (or seeded) id.
    pub fn last_issued(&self) -> Option<i64> {
        self.last_issued
    }
}
