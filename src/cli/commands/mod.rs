pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod locations;
pub mod log;
pub mod stats;

use crate::config::Config;
use crate::db::kv::SqliteKv;
use crate::errors::{AppError, AppResult};
use crate::store::TrapStore;
use crate::utils::date;
use chrono::NaiveDate;

/// Open the store backend and rehydrate persisted state.
pub fn open_store(cfg: &Config) -> AppResult<TrapStore<SqliteKv>> {
    let kv = SqliteKv::open(&cfg.database)?;
    let mut store = TrapStore::new(kv);
    store.hydrate();
    Ok(store)
}

/// Parse an optional date flag, mapping parse failures to InvalidDate.
pub fn parse_opt_date(arg: &Option<String>) -> AppResult<Option<NaiveDate>> {
    match arg {
        Some(s) => date::parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(None),
    }
}
