pub mod initialize;
pub mod log;
pub mod mem;
pub mod pool;

use crate::errors::AppResult;

/// Storage key for the persisted five-day week snapshot (JSON).
pub const WEEK_KEY: &str = "work-time-calculator:v1";
/// Storage key for the weekly target, stored as a plain decimal string.
pub const TARGET_KEY: &str = "work-time-calculator:weekly-target-hours";

/// Flat string key-value store backing the ledger.
///
/// The production implementation is a SQLite `kv` table ([`pool::DbPool`]);
/// tests inject [`mem::MemStore`] instead.
pub trait KvStore {
    fn get(&mut self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}
