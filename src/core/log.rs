use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

/// ANSI color for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "save" => Colour::Green,
        "edit" => Colour::Yellow,
        "thoughts" | "tags" => Colour::Cyan,
        "publish" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

/// Cap a cell at `max` characters, ellipsized.
fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }

    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

struct LogRow {
    id: i32,
    date: String,
    operation: String,
    subject: String,
    message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i32>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            let (id, raw_date, operation, target, message) = r?;

            // Normalize the stored RFC 3339 stamp; keep it raw if unparsable.
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            // One "operation (target)" cell, capped so uuids and long
            // paths do not blow up the column.
            let subject = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            entries.push(LogRow {
                id,
                date,
                operation,
                subject: clip(&subject, 60),
                message,
            });
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(2);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let subject_w = entries.iter().map(|e| e.subject.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in entries {
            // Layout is computed on plain text; the operation word gets
            // painted only after padding so ANSI codes never skew widths.
            let padding = " ".repeat(subject_w - e.subject.len());

            let color = color_for_operation(&e.operation);
            let colored = match e.subject.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(e.subject.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id, e.date, colored, padding, e.message,
            );
        }

        Ok(())
    }
}
