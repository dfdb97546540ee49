use serde::{Deserialize, Serialize};

/// One weekday's raw input: clock-in/out times as typed (possibly empty)
/// plus the two break flags.
///
/// Mirrors the persisted JSON shape exactly:
/// `{ "start": "HH:MM"|"", "end": "HH:MM"|"", "lunch": bool, "dinner": bool }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayEntry {
    pub start: String,
    pub end: String,
    pub lunch: bool,
    pub dinner: bool,
}

impl DayEntry {
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty() && !self.lunch && !self.dinner
    }

    /// Return the entry to its default empty/false state.
    pub fn clear(&mut self) {
        *self = DayEntry::default();
    }
}
