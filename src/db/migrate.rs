use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the modern `stanzas` table exists.
fn stanzas_table_exists(conn: &Connection) -> AppResult<bool> {
    table_exists(conn, "stanzas")
}

/// Check if the legacy singular `stanza` table exists (first-generation
/// capture bot schema).
fn legacy_stanza_table_exists(conn: &Connection) -> AppResult<bool> {
    table_exists(conn, "stanza")
}

/// Create the `stanzas` table with the modern schema.
fn create_stanzas_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS stanzas (
            id       TEXT PRIMARY KEY,
            created  TEXT NOT NULL,
            ref      TEXT NOT NULL,
            thoughts TEXT NOT NULL DEFAULT '',
            tags     TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_stanzas_created ON stanzas(created);
        "#,
    )?;
    Ok(())
}

/// Migrate a legacy `stanza` table into `stanzas`.
///
/// The first-generation bot inserted only (id, created, ref), so `thoughts`
/// and `tags` can be NULL there; the modern schema wants empty strings.
fn migrate_legacy_stanza_table(conn: &Connection) -> AppResult<()> {
    warning("Legacy 'stanza' table detected, upgrading to 'stanzas'...");

    conn.execute_batch(
        r#"
        BEGIN;

        CREATE TABLE IF NOT EXISTS stanzas (
            id       TEXT PRIMARY KEY,
            created  TEXT NOT NULL,
            ref      TEXT NOT NULL,
            thoughts TEXT NOT NULL DEFAULT '',
            tags     TEXT NOT NULL DEFAULT ''
        );

        INSERT INTO stanzas (id, created, ref, thoughts, tags)
        SELECT id, created, ref, IFNULL(thoughts, ''), IFNULL(tags, '')
        FROM stanza;

        DROP TABLE stanza;

        CREATE INDEX IF NOT EXISTS idx_stanzas_created ON stanzas(created);

        COMMIT;
        "#,
    )?;

    ttlog(
        conn,
        "migration_applied",
        "stanzas",
        "Upgraded legacy stanza table to stanzas",
    )?;

    success("Legacy stanza table upgraded.");
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Legacy schema upgrade comes before anything else touches stanzas
    if legacy_stanza_table_exists(conn)? && !stanzas_table_exists(conn)? {
        migrate_legacy_stanza_table(conn)?;
        return Ok(());
    }

    // 3) Fresh database, or re-run on a modern one (index is idempotent)
    create_stanzas_table(conn)?;

    Ok(())
}
