//! The week ledger: in-memory state plus its persisted snapshot.

use crate::core::calculator::recalc_week;
use crate::db::{KvStore, TARGET_KEY, WEEK_KEY};
use crate::errors::AppResult;
use crate::models::{DayEntry, WeekReport, WeekState, Weekday};

/// Weekly target applied when none is stored, or the stored one is unusable.
pub const DEFAULT_TARGET_HOURS: f64 = 40.0;

/// The working week and its target, bound to an injected key-value store.
///
/// The ledger never surfaces a storage error to its caller: loading falls
/// back to defaults and [`TimeLedger::recalc`] swallows persistence failures,
/// so the in-memory computation keeps working even with a broken store.
pub struct TimeLedger<S: KvStore> {
    store: S,
    pub week: WeekState,
    pub target_hours: f64,
}

fn sanitize_target(hours: Option<f64>) -> f64 {
    match hours {
        Some(h) if h.is_finite() && h >= 0.0 => h,
        _ => DEFAULT_TARGET_HOURS,
    }
}

impl<S: KvStore> TimeLedger<S> {
    /// Build a ledger over `store`, loading whatever snapshot it holds.
    pub fn open(store: S) -> Self {
        let mut ledger = Self {
            store,
            week: WeekState::default(),
            target_hours: DEFAULT_TARGET_HOURS,
        };
        ledger.load();
        ledger
    }

    /// Re-read target and week from the store.
    ///
    /// A missing or non-numeric target falls back to 40; a missing week key
    /// or malformed JSON falls back to the all-empty week.
    pub fn load(&mut self) {
        self.target_hours = match self.store.get(TARGET_KEY) {
            Ok(Some(raw)) => sanitize_target(raw.trim().parse().ok()),
            _ => DEFAULT_TARGET_HOURS,
        };

        self.week = match self.store.get(WEEK_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => WeekState::default(),
        };
    }

    /// Persist the current week snapshot and target under their fixed keys.
    pub fn save(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.week)?;
        self.store.set(WEEK_KEY, &json)?;
        self.store.set(TARGET_KEY, &self.target_hours.to_string())
    }

    /// Recompute the whole week and persist the snapshot.
    ///
    /// Persistence failures are swallowed here: the report is produced from
    /// memory regardless of the store's health.
    pub fn recalc(&mut self) -> WeekReport {
        let report = recalc_week(self.target_hours, &self.week);
        self.save().ok();
        report
    }

    /// Update one day's entry. `None` fields are left untouched, so
    /// `set --in` does not wipe a previously recorded end time.
    pub fn set_day(
        &mut self,
        day: Weekday,
        start: Option<String>,
        end: Option<String>,
        lunch: Option<bool>,
        dinner: Option<bool>,
    ) {
        let entry = self.week.entry_mut(day);
        if let Some(s) = start {
            entry.start = s;
        }
        if let Some(e) = end {
            entry.end = e;
        }
        if let Some(l) = lunch {
            entry.lunch = l;
        }
        if let Some(d) = dinner {
            entry.dinner = d;
        }
    }

    /// Return one day to the default empty entry.
    pub fn clear_day(&mut self, day: Weekday) {
        self.week.entry_mut(day).clear();
    }

    pub fn entry(&self, day: Weekday) -> &DayEntry {
        self.week.entry(day)
    }

    /// Set the weekly target, clamping unusable values back to the default.
    pub fn set_target(&mut self, hours: f64) {
        self.target_hours = sanitize_target(Some(hours));
    }

    /// Clear all five entries and drop the persisted week key, keeping the
    /// stored target exactly as it was.
    pub fn reset_week(&mut self) {
        self.week.clear();

        // read the target before touching the store, restore it afterwards
        let saved_target = self.store.get(TARGET_KEY).ok().flatten();
        self.store.remove(WEEK_KEY).ok();
        if let Some(t) = saved_target {
            self.store.set(TARGET_KEY, &t).ok();
        }
    }

    /// Direct access to the underlying store (used for the operations log).
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
