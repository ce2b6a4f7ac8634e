use crate::cli::commands::{open_store, parse_opt_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{EntryFilter, sort_entries};
use crate::errors::AppResult;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        location,
        from,
        to,
        sort,
        asc,
    } = cmd
    {
        let store = open_store(cfg)?;

        if store.entries().is_empty() {
            println!("No entries yet. Add your first entry to see data here.");
            return Ok(());
        }

        let filter = EntryFilter {
            location: location.clone(),
            from: parse_opt_date(from)?,
            to: parse_opt_date(to)?,
        };

        let mut rows = filter.apply(store.entries());
        sort_entries(&mut rows, *sort, *asc);

        let mut any_orphan = false;
        let mut table = Table::new(vec!["ID", "Date", "Location", "Count"]);
        for e in &rows {
            let name = if store.has_location(&e.trap_id) {
                e.trap_id.clone()
            } else {
                any_orphan = true;
                format!("{} *", e.trap_id)
            };
            table.add_row(vec![
                e.id.to_string(),
                e.date.to_string(),
                name,
                e.count.to_string(),
            ]);
        }

        print!("{}", table.render());

        if any_orphan {
            println!("* location has since been removed");
        }
        println!("Showing {} of {} entries", rows.len(), store.entries().len());
    }

    Ok(())
}
