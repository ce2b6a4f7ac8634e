//! Key-value persistence backends.
//!
//! The store mirrors its collections as opaque serialized values under
//! logical keys. `SqliteKv` is the durable backend; `MemoryKv` backs unit
//! tests and ephemeral sessions.

use crate::db::initialize::init_db;
use crate::db::log::twlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::OptionalExtension;
use rusqlite::params;
use std::collections::HashMap;

/// Key-value persistence contract used by the store.
/// Last write wins; `get` returns None for keys never set.
pub trait KvStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn delete(&mut self, key: &str) -> AppResult<()>;

    /// Best-effort audit hook; backends without a log sink ignore it.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) {}
}

pub struct SqliteKv {
    pool: DbPool,
}

impl SqliteKv {
    /// Open (or create) the store database and ensure the schema exists.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl KvStore for SqliteKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        // fire-and-forget: a failed log line never fails the mutation
        let _ = twlog(&self.pool.conn, operation, target, message);
    }
}

/// In-memory backend. No durability, no audit sink.
#[derive(Debug, Default)]
pub struct MemoryKv {
    map: HashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> AppResult<()> {
        self.map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_contract<K: KvStore>(kv: &mut K) {
        assert_eq!(kv.get("entries").unwrap(), None);

        kv.set("entries", "[1]").unwrap();
        assert_eq!(kv.get("entries").unwrap().as_deref(), Some("[1]"));

        // last write wins
        kv.set("entries", "[2]").unwrap();
        assert_eq!(kv.get("entries").unwrap().as_deref(), Some("[2]"));

        kv.delete("entries").unwrap();
        assert_eq!(kv.get("entries").unwrap(), None);

        // deleting an absent key is fine
        kv.delete("entries").unwrap();
    }

    #[test]
    fn memory_kv_contract() {
        check_contract(&mut MemoryKv::new());
    }

    #[test]
    fn sqlite_kv_contract() {
        let mut path = std::env::temp_dir();
        path.push("kv_contract_trapwatch.sqlite");
        std::fs::remove_file(&path).ok();

        let mut kv = SqliteKv::open(&path.to_string_lossy()).unwrap();
        check_contract(&mut kv);
    }
}
