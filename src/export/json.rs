use crate::export::notify_export_success;
use crate::models::entry::TrapEntry;
use std::path::Path;

/// Write entries as pretty-printed JSON, same shape as the persisted layout.
pub fn write_json(path: &str, entries: &[TrapEntry]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(entries).map_err(std::io::Error::other)?;
    std::fs::write(path, json)?;
    notify_export_success("JSON", Path::new(path));
    Ok(())
}
