use crate::export::notify_export_success;
use crate::models::entry::TrapEntry;
use csv::Writer;
use std::path::Path;

/// Write entries as CSV to the given file.
pub fn write_csv(path: &str, entries: &[TrapEntry]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["id", "date", "location", "count"])?;

    for e in entries {
        wtr.write_record(&[
            e.id.to_string(),
            e.date.to_string(),
            e.trap_id.clone(),
            e.count.to_string(),
        ])?;
    }

    wtr.flush()?;
    notify_export_success("CSV", Path::new(path));
    Ok(())
}
