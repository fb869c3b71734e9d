use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::day_group::DayGroup;
use crate::models::stanza::Stanza;
use rusqlite::params;
use rusqlite::{Connection, OptionalExtension, Row};

pub fn map_row(row: &Row) -> rusqlite::Result<Stanza> {
    Ok(Stanza {
        id: row.get("id")?,
        created: row.get("created")?,
        reference: row.get("ref")?,
        thoughts: row.get("thoughts")?,
        tags: row.get("tags")?,
    })
}

/// Insert a freshly captured stanza and return it.
/// Storage failures are fatal and surface to the caller.
pub fn create_stanza(conn: &Connection, reference: &str) -> AppResult<Stanza> {
    let stanza = Stanza::new(reference);
    insert_stanza(conn, &stanza)?;
    Ok(stanza)
}

pub fn insert_stanza(conn: &Connection, stanza: &Stanza) -> AppResult<()> {
    conn.execute(
        "INSERT INTO stanzas (id, created, ref, thoughts, tags)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            stanza.id,
            stanza.created,
            stanza.reference,
            stanza.thoughts,
            stanza.tags,
        ],
    )?;
    Ok(())
}

pub fn get_stanza(conn: &Connection, id: &str) -> AppResult<Option<Stanza>> {
    let mut stmt = conn.prepare("SELECT * FROM stanzas WHERE id = ?1")?;
    let stanza = stmt.query_row([id], map_row).optional()?;
    Ok(stanza)
}

/// Overwrite the thoughts of a stanza.
/// An unknown id is a silent no-op: callers are expected to check existence
/// with `get_stanza` first (the store does not enforce it).
pub fn set_thoughts(conn: &Connection, id: &str, thoughts: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE stanzas SET thoughts = ?1 WHERE id = ?2",
        params![thoughts, id],
    )?;
    Ok(())
}

/// Overwrite the tags of a stanza, normalizing the comma separator used by
/// chat input into the stored pipe separator. Unknown ids are a no-op, as
/// with `set_thoughts`.
pub fn set_tags(conn: &Connection, id: &str, raw_tags: &str) -> AppResult<()> {
    let tags = normalize_tags(raw_tags);
    conn.execute(
        "UPDATE stanzas SET tags = ?1 WHERE id = ?2",
        params![tags, id],
    )?;
    Ok(())
}

pub fn normalize_tags(raw: &str) -> String {
    raw.replace(',', "|")
}

/// All stanzas, newest first. `created` is lexicographically sortable text,
/// so ORDER BY gives capture order.
pub fn load_all(pool: &mut DbPool) -> AppResult<Vec<Stanza>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM stanzas ORDER BY created DESC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Partition an already-descending stanza list into per-day groups.
///
/// One linear pass: a stanza opens a new group whenever its day prefix
/// differs from the previous stanza's. Per-group order is preserved.
pub fn group_by_day(stanzas: Vec<Stanza>) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();

    for stanza in stanzas {
        match groups.last_mut() {
            Some(group) if group.day == stanza.day() => group.stanzas.push(stanza),
            _ => groups.push(DayGroup {
                day: stanza.day().to_string(),
                stanzas: vec![stanza],
            }),
        }
    }

    groups
}

/// The whole store as day groups, newest day first.
pub fn list_grouped_by_day(pool: &mut DbPool) -> AppResult<Vec<DayGroup>> {
    Ok(group_by_day(load_all(pool)?))
}
