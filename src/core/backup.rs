use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// High-level logic for the `backup` command. The store file is copied
/// as opaque bytes; the destination is whatever transport the operator
/// points at (a synced folder, a mount, ...).
///
/// Takes the store path directly instead of an open pool: opening the
/// store first would create an empty file and hide a missing store.
pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(db_path: &str, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(db_path);
        let dest = Path::new(dest_file);

        // 1️⃣ The store must exist before anything is copied
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Store file not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Destination folder
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Never clobber an existing file without asking
        if dest.exists() && !confirm_overwrite(dest) {
            println!("❌ Backup cancelled by user.");
            return Ok(());
        }

        // 4️⃣ Raw byte copy, then optionally swap it for a zip
        fs::copy(src, dest)?;
        println!("✅ Backup created: {}", dest.display());

        let final_path = if compress {
            let zipped = compress_backup(dest)?;

            // A destination already named *.zip compresses onto itself
            if zipped != dest {
                if let Err(e) = fs::remove_file(dest) {
                    eprintln!("⚠️ Failed to remove uncompressed backup: {}", e);
                } else {
                    println!("🗑️ Removed uncompressed backup: {}", dest.display());
                }
            }

            zipped
        } else {
            dest.to_path_buf()
        };

        // 5️⃣ Record the run in the internal log
        if let Ok(conn) = Connection::open(src) {
            let _ = crate::db::log::ttlog(
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

fn confirm_overwrite(dest: &Path) -> bool {
    print!(
        "⚠️  The file '{}' already exists. Overwrite it? [y/N]: ",
        dest.display()
    );
    io::stdout().flush().ok();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "backup.sqlite".to_string());

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    let mut f = fs::File::open(path)?;
    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}
