use crate::config::Config;
use crate::db::log::twlog;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use flate2::Compression;
use flate2::write::GzEncoder;
use rusqlite::Connection;
use std::fs;
use std::io::{self, Write, stdin, stdout};
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        // 1. Check the store database exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Store database not found: {}", src.display()),
            )
            .into());
        }

        // 2. Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3. If destination file exists, ask confirmation
        if dest.exists() {
            warning(format!(
                "The file '{}' already exists. Overwrite it? [y/N]:",
                dest.display()
            ));

            let mut answer = String::new();
            print!("> ");
            stdout().flush().ok();
            stdin().read_line(&mut answer)?;

            let answer = answer.trim().to_lowercase();
            if !(answer == "y" || answer == "yes") {
                info("Backup cancelled.");
                return Ok(());
            }
        }

        // 4. Copy database
        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5. Optional compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        // 6. Audit in the store database (best-effort)
        if let Ok(conn) = Connection::open(src) {
            let _ = twlog(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(())
    }
}

/// Compress a backup to gzip, keeping the original name plus ".gz".
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let gz_path = PathBuf::from(format!("{}.gz", path.display()));

    let mut input = fs::File::open(path)?;
    let output = fs::File::create(&gz_path)?;
    let mut encoder = GzEncoder::new(output, Compression::default());

    io::copy(&mut input, &mut encoder)?;
    encoder.finish()?;

    success(format!("Compressed: {}", gz_path.display()));

    Ok(gz_path)
}
