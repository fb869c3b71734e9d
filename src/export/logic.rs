use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::markdown::export_markdown;
use crate::export::model::StanzaExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;

use chrono::NaiveDate;
use rusqlite::Row;
use rusqlite::params;
use std::io;
use std::path::Path;

/// High-level logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Export stanzas to a file.
    ///
    /// `file` must be an absolute path. `range` is `None`, `"all"`, a
    /// single period (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) or a `start:end`
    /// pair of two same-shape periods.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let day_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let stanzas = load_stanzas(pool, day_bounds)?;

        if stanzas.is_empty() {
            warning("No stanzas found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Markdown => export_markdown(&stanzas, path)?,
            ExportFormat::Json => export_json(&stanzas, path)?,
            ExportFormat::Csv => export_csv(&stanzas, path)?,
        }

        Ok(())
    }
}

/// Loads stanzas from the store, newest first, matching the day bounds.
fn load_stanzas(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<StanzaExport>> {
    let conn = &mut pool.conn;

    let mut stanzas = Vec::new();

    match bounds {
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, created, ref, thoughts, tags
                 FROM stanzas
                 ORDER BY created DESC",
            )?;

            let rows = stmt.query_map([], map_row)?;

            for r in rows {
                stanzas.push(r?);
            }
        }
        Some((start, end)) => {
            let start_str = start.format("%Y-%m-%d").to_string();
            let end_str = end.format("%Y-%m-%d").to_string();

            let mut stmt = conn.prepare(
                "SELECT id, created, ref, thoughts, tags
                 FROM stanzas
                 WHERE substr(created, 1, 10) BETWEEN ?1 AND ?2
                 ORDER BY created DESC",
            )?;

            let rows = stmt.query_map(params![start_str, end_str], map_row)?;

            for r in rows {
                stanzas.push(r?);
            }
        }
    }

    Ok(stanzas)
}

/// DB row → StanzaExport mapping, shared by both queries.
fn map_row(row: &Row<'_>) -> rusqlite::Result<StanzaExport> {
    Ok(StanzaExport {
        id: row.get(0)?,
        created: row.get(1)?,
        reference: row.get(2)?,
        thoughts: row.get(3)?,
        tags: row.get(4)?,
    })
}
