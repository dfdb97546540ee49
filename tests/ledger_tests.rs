//! Ledger behaviour against an injected in-memory store: persistence
//! round-trips, default fallbacks, and the never-fails-the-caller contract.

use weekledger::core::TimeLedger;
use weekledger::db::mem::MemStore;
use weekledger::db::{KvStore, TARGET_KEY, WEEK_KEY};
use weekledger::errors::{AppError, AppResult};
use weekledger::models::Weekday;

/// A store where every operation fails, for exercising the silent-fallback
/// paths.
struct BrokenStore;

impl KvStore for BrokenStore {
    fn get(&mut self, _key: &str) -> AppResult<Option<String>> {
        Err(AppError::Other("store unavailable".into()))
    }
    fn set(&mut self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::Other("store unavailable".into()))
    }
    fn remove(&mut self, _key: &str) -> AppResult<()> {
        Err(AppError::Other("store unavailable".into()))
    }
}

#[test]
fn fresh_store_loads_defaults() {
    let ledger = TimeLedger::open(MemStore::new());
    assert_eq!(ledger.target_hours, 40.0);
    for day in Weekday::ALL {
        assert!(ledger.entry(day).is_empty());
    }
}

#[test]
fn save_and_load_round_trip() {
    let mut ledger = TimeLedger::open(MemStore::new());
    ledger.set_day(
        Weekday::Tue,
        Some("08:30".into()),
        Some("17:15".into()),
        Some(true),
        None,
    );
    ledger.set_target(37.5);
    ledger.save().unwrap();

    // the snapshot lives under the two fixed keys
    let store = ledger.store_mut();
    let week_json = store.get(WEEK_KEY).unwrap().unwrap();
    assert!(week_json.contains("\"start\":\"08:30\""));
    assert_eq!(store.get(TARGET_KEY).unwrap().unwrap(), "37.5");

    // a second ledger over the same store sees the same state
    let mut reopened = MemStore::new();
    reopened.insert_raw(WEEK_KEY, &week_json);
    reopened.insert_raw(TARGET_KEY, "37.5");
    let other = TimeLedger::open(reopened);

    assert_eq!(other.target_hours, 37.5);
    let tue = other.entry(Weekday::Tue);
    assert_eq!(tue.start, "08:30");
    assert_eq!(tue.end, "17:15");
    assert!(tue.lunch);
    assert!(!tue.dinner);
    assert!(other.entry(Weekday::Mon).is_empty());
}

#[test]
fn malformed_week_json_falls_back_to_empty_week() {
    let mut store = MemStore::new();
    store.insert_raw(WEEK_KEY, "{not json");
    let ledger = TimeLedger::open(store);

    for day in Weekday::ALL {
        assert!(ledger.entry(day).is_empty());
    }
}

#[test]
fn partial_week_json_defaults_missing_days() {
    let mut store = MemStore::new();
    store.insert_raw(
        WEEK_KEY,
        r#"{"wed":{"start":"10:00","end":"16:00","lunch":false,"dinner":false}}"#,
    );
    let ledger = TimeLedger::open(store);

    assert_eq!(ledger.entry(Weekday::Wed).start, "10:00");
    assert!(ledger.entry(Weekday::Mon).is_empty());
    assert!(ledger.entry(Weekday::Fri).is_empty());
}

#[test]
fn unusable_target_falls_back_to_forty() {
    for raw in ["", "abc", "-5", "NaN", "inf"] {
        let mut store = MemStore::new();
        store.insert_raw(TARGET_KEY, raw);
        let ledger = TimeLedger::open(store);
        assert_eq!(ledger.target_hours, 40.0, "target string {raw:?}");
    }
}

#[test]
fn set_target_rejects_negative_and_non_finite() {
    let mut ledger = TimeLedger::open(MemStore::new());
    ledger.set_target(-3.0);
    assert_eq!(ledger.target_hours, 40.0);
    ledger.set_target(f64::NAN);
    assert_eq!(ledger.target_hours, 40.0);
    ledger.set_target(36.0);
    assert_eq!(ledger.target_hours, 36.0);
}

#[test]
fn recalc_persists_the_snapshot() {
    let mut ledger = TimeLedger::open(MemStore::new());
    ledger.set_day(Weekday::Mon, Some("09:00".into()), Some("18:00".into()), None, None);

    let report = ledger.recalc();
    assert_eq!(report.days[0].total, "9:00");

    let store = ledger.store_mut();
    assert!(store.contains(WEEK_KEY));
    assert!(store.contains(TARGET_KEY));
}

#[test]
fn reset_week_clears_entries_and_keeps_target() {
    let mut ledger = TimeLedger::open(MemStore::new());
    ledger.set_target(35.0);
    ledger.set_day(
        Weekday::Fri,
        Some("09:00".into()),
        Some("13:00".into()),
        Some(true),
        Some(true),
    );
    ledger.save().unwrap();

    ledger.reset_week();

    for day in Weekday::ALL {
        assert!(ledger.entry(day).is_empty());
    }
    assert_eq!(ledger.target_hours, 35.0);

    // week key removed, target key untouched
    let store = ledger.store_mut();
    assert!(!store.contains(WEEK_KEY));
    assert_eq!(store.get(TARGET_KEY).unwrap().unwrap(), "35");
}

#[test]
fn broken_store_never_fails_the_caller() {
    let mut ledger = TimeLedger::open(BrokenStore);

    // loading degraded to defaults
    assert_eq!(ledger.target_hours, 40.0);

    ledger.set_day(Weekday::Mon, Some("09:00".into()), Some("17:00".into()), None, None);

    // recalc still produces the report even though persistence fails
    let report = ledger.recalc();
    assert_eq!(report.days[0].total, "8:00");

    // reset is equally tolerant
    ledger.reset_week();
    assert!(ledger.entry(Weekday::Mon).is_empty());
}

#[test]
fn set_day_leaves_untouched_fields_alone() {
    let mut ledger = TimeLedger::open(MemStore::new());
    ledger.set_day(
        Weekday::Thu,
        Some("09:00".into()),
        Some("18:00".into()),
        Some(true),
        None,
    );
    // later: only flip dinner
    ledger.set_day(Weekday::Thu, None, None, None, Some(true));

    let thu = ledger.entry(Weekday::Thu);
    assert_eq!(thu.start, "09:00");
    assert_eq!(thu.end, "18:00");
    assert!(thu.lunch);
    assert!(thu.dinner);
}

#[test]
fn clear_day_resets_only_that_day() {
    let mut ledger = TimeLedger::open(MemStore::new());
    ledger.set_day(Weekday::Mon, Some("09:00".into()), Some("17:00".into()), None, None);
    ledger.set_day(Weekday::Tue, Some("10:00".into()), Some("18:00".into()), None, None);

    ledger.clear_day(Weekday::Mon);

    assert!(ledger.entry(Weekday::Mon).is_empty());
    assert_eq!(ledger.entry(Weekday::Tue).start, "10:00");
}
