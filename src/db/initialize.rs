use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the store schema if it does not exist yet.
///
/// Two tables: `kv` holds the flat key-value pairs the ledger persists into,
/// `log` keeps the internal operations log.
pub fn init_store(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
             key   TEXT PRIMARY KEY,
             value TEXT NOT NULL
         );
         CREATE TABLE IF NOT EXISTS log (
             id        INTEGER PRIMARY KEY AUTOINCREMENT,
             date      TEXT NOT NULL,
             operation TEXT NOT NULL,
             target    TEXT NOT NULL DEFAULT '',
             message   TEXT NOT NULL DEFAULT ''
         );",
    )?;
    Ok(())
}
