use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the store database schema.
/// `kv` mirrors the store collections as serialized snapshots;
/// `log` is the internal audit trail.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
             key   TEXT PRIMARY KEY,
             value TEXT NOT NULL
         );
         CREATE TABLE IF NOT EXISTS log (
             id        INTEGER PRIMARY KEY AUTOINCREMENT,
             date      TEXT NOT NULL,
             operation TEXT NOT NULL,
             target    TEXT NOT NULL,
             message   TEXT NOT NULL
         );",
    )?;
    Ok(())
}
