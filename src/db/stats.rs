use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Aggregate counters over the whole store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub distinct_days: i64,
    pub stanza_count: i64,
    pub thought_chars: i64,
}

/// Computes the store-wide aggregates in a single pass over `stanzas`.
pub fn store_stats(pool: &DbPool) -> AppResult<StoreStats> {
    let stats = pool.conn.query_row(
        "SELECT COUNT(DISTINCT substr(created, 1, 10)),
                COUNT(*),
                IFNULL(SUM(LENGTH(thoughts)), 0)
         FROM stanzas",
        [],
        |row| {
            Ok(StoreStats {
                distinct_days: row.get(0)?,
                stanza_count: row.get(1)?,
                thought_chars: row.get(2)?,
            })
        },
    )?;
    Ok(stats)
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL STANZAS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM stanzas", [], |row| row.get(0))?;
    println!(
        "{}• Total stanzas:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) PUBLISHABLE STANZAS
    //
    let publishable: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM stanzas WHERE thoughts <> '' AND tags <> ''",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Publishable:{} {}{}{}",
        CYAN, RESET, GREEN, publishable, RESET
    );

    //
    // 4) DATE RANGE
    //
    let first_day: Option<String> = pool
        .conn
        .query_row(
            "SELECT substr(created, 1, 10) FROM stanzas ORDER BY created ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_day: Option<String> = pool
        .conn
        .query_row(
            "SELECT substr(created, 1, 10) FROM stanzas ORDER BY created DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_day.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_day.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
