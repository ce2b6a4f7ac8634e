use crate::cli::commands::{open_store, parse_opt_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::EntryFilter;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, write_csv, write_json};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        from,
        to,
        force,
    } = cmd
    {
        if Path::new(file).exists() && !force {
            return Err(AppError::Export(format!(
                "file '{}' already exists (use --force to overwrite)",
                file
            )));
        }

        let store = open_store(cfg)?;
        let filter = EntryFilter {
            location: None,
            from: parse_opt_date(from)?,
            to: parse_opt_date(to)?,
        };
        // exported in stored order: newest first
        let rows = filter.apply(store.entries());

        match format {
            ExportFormat::Csv => write_csv(file, &rows)?,
            ExportFormat::Json => write_json(file, &rows)?,
        }
    }

    Ok(())
}
