use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::entry::NewEntry;
use crate::ui::messages::{info, success};
use crate::utils::date;

/// Record pests found in a trap location.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        location,
        count,
        date: date_arg,
        new_location,
    } = cmd
    {
        //
        // 1. Resolve date (defaults to today)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        //
        // 2. Reject zero counts; the store accepts them, the CLI does not
        //
        if *count == 0 {
            return Err(AppError::InvalidCount(count.to_string()));
        }

        //
        // 3. Open store and check the location exists
        //
        let mut store = open_store(cfg)?;

        if !store.has_location(location) {
            if *new_location {
                store.add_trap_location(location);
                info(format!("Created trap location '{}'", location));
            } else {
                return Err(AppError::UnknownLocation(format!(
                    "'{}' (use --new-location to create it)",
                    location
                )));
            }
        }

        //
        // 4. Record the entry
        //
        let id = store.add_entry(NewEntry {
            date: d,
            trap_id: location.clone(),
            count: *count,
        });

        success(format!(
            "Recorded {} at {} on {} (entry #{})",
            count, location, d, id
        ));
    }

    Ok(())
}
