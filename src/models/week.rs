use super::day_entry::DayEntry;
use super::weekday::Weekday;
use serde::{Deserialize, Serialize};

/// The five-day week snapshot, one [`DayEntry`] per canonical weekday.
///
/// Field order is the fixed Mon..Fri iteration order and is preserved by the
/// JSON serializer. Days missing from a persisted snapshot deserialize to the
/// default empty entry; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekState {
    pub mon: DayEntry,
    pub tue: DayEntry,
    pub wed: DayEntry,
    pub thu: DayEntry,
    pub fri: DayEntry,
}

impl WeekState {
    pub fn entry(&self, day: Weekday) -> &DayEntry {
        match day {
            Weekday::Mon => &self.mon,
            Weekday::Tue => &self.tue,
            Weekday::Wed => &self.wed,
            Weekday::Thu => &self.thu,
            Weekday::Fri => &self.fri,
        }
    }

    pub fn entry_mut(&mut self, day: Weekday) -> &mut DayEntry {
        match day {
            Weekday::Mon => &mut self.mon,
            Weekday::Tue => &mut self.tue,
            Weekday::Wed => &mut self.wed,
            Weekday::Thu => &mut self.thu,
            Weekday::Fri => &mut self.fri,
        }
    }

    /// Clear all five entries to empty/false.
    pub fn clear(&mut self) {
        for day in Weekday::ALL {
            self.entry_mut(day).clear();
        }
    }
}
