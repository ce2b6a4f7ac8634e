use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Nothing to do. Try --print.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let rows = load_log(&mut pool)?;

        if rows.is_empty() {
            info("Log is empty.");
            return Ok(());
        }

        for (date, operation, target, message) in rows {
            println!("{} | {:<14} | {:<12} | {}", date, operation, target, message);
        }
    }

    Ok(())
}
