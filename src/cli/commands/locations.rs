use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Locations { add, remove } = cmd {
        let mut store = open_store(cfg)?;

        if let Some(name) = add {
            // the store allows duplicates; the CLI pre-checks, like the form did
            if store.has_location(name) {
                return Err(AppError::DuplicateLocation(name.clone()));
            }
            let id = store.add_trap_location(name);
            success(format!("Added trap location '{}' (#{})", name, id));
            return Ok(());
        }

        if let Some(name) = remove {
            let orphans = store
                .entries()
                .iter()
                .filter(|e| e.trap_id == *name)
                .count();

            let removed = store.remove_trap_location(name);
            if removed == 0 {
                info(format!("No trap location named '{}'; nothing removed.", name));
                return Ok(());
            }

            success(format!("Removed {} location(s) named '{}'.", removed, name));
            if orphans > 0 {
                warning(format!(
                    "{} existing entries still reference '{}'.",
                    orphans, name
                ));
            }
            return Ok(());
        }

        let mut table = Table::new(vec!["ID", "Name", "Entries"]);
        for loc in store.locations() {
            let entries = store
                .entries()
                .iter()
                .filter(|e| e.trap_id == loc.name)
                .count();
            table.add_row(vec![
                loc.id.to_string(),
                loc.name.clone(),
                entries.to_string(),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
