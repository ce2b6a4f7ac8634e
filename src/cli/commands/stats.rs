use crate::cli::commands::{open_store, parse_opt_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::EntryFilter;
use crate::core::stats::{daily_totals, location_totals, summarize};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, count_color};
use unicode_width::UnicodeWidthStr;

const BAR_MAX_WIDTH: u64 = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { from, to } = cmd {
        let store = open_store(cfg)?;

        let filter = EntryFilter {
            location: None,
            from: parse_opt_date(from)?,
            to: parse_opt_date(to)?,
        };
        let rows = filter.apply(store.entries());

        if rows.is_empty() {
            println!("No stats to show. Add entries to see statistics here.");
            return Ok(());
        }

        let summary = summarize(&rows);

        header("Stats");
        println!("Total collected: {}", summary.total);
        if let Some((name, total)) = &summary.worst {
            println!("Worst location:  {} ({})", name, total);
        }
        println!(
            "Daily average:   {} over {} day(s)",
            summary.daily_average, summary.days
        );

        println!();
        header("Total by trap location");
        let by_location = location_totals(&rows);
        print!("{}", render_bars(&by_location));

        println!();
        header("Daily totals");
        let by_day: Vec<(String, u64)> = daily_totals(&rows)
            .into_iter()
            .map(|(d, v)| (d.to_string(), v))
            .collect();
        print!("{}", render_bars(&by_day));
    }

    Ok(())
}

/// One bar per row, scaled to the largest value. Labels are padded by
/// display width; the bar itself carries the severity color.
fn render_bars(rows: &[(String, u64)]) -> String {
    let max = rows.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let label_width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, value) in rows {
        let len = if max == 0 {
            0
        } else {
            (value * BAR_MAX_WIDTH).div_ceil(max)
        };
        let bar = "█".repeat(len as usize);
        let pad = " ".repeat(label_width - label.width());
        let color = count_color(*value);
        out.push_str(&format!(
            "{}{}  {}{}{} {}\n",
            label, pad, color, bar, RESET, value
        ));
    }
    out
}
