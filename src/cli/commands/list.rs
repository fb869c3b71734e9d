use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::list_grouped_by_day;
use crate::errors::AppResult;
use crate::models::day_group::DayGroup;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let all_groups = list_grouped_by_day(&mut pool)?;

        //
        // 1. Resolve day bounds from --today / --period
        //
        let bounds: Option<(String, String)> = if *now {
            let today = date::today().to_string();
            Some((today.clone(), today))
        } else if let Some(p) = period {
            if p.eq_ignore_ascii_case("all") {
                None
            } else {
                let (start, end) = if let Some((a, b)) = p.split_once(':') {
                    date::range_bounds(a.trim(), b.trim())?
                } else {
                    date::period_bounds(p.trim())?
                };
                Some((start.to_string(), end.to_string()))
            }
        } else {
            None
        };

        //
        // 2. Filter groups (ISO days compare lexicographically)
        //
        let groups: Vec<&DayGroup> = filter_groups(&all_groups, &bounds);

        if groups.is_empty() {
            println!("No stanzas for the selected period.");
            return Ok(());
        }

        //
        // 3. Print one table per day, newest first
        //
        for group in groups {
            let publishable = group.publishable().len();
            println!(
                "\n{}=== {} ==={} ({} stanzas, {} publishable)",
                CYAN,
                group.day,
                RESET,
                group.stanzas.len(),
                publishable
            );

            let mut table = Table::new(vec![
                "id".to_string(),
                "time".to_string(),
                "ref".to_string(),
                "tags".to_string(),
                "state".to_string(),
            ]);

            for stanza in &group.stanzas {
                let short_id = stanza.id.get(..8).unwrap_or(&stanza.id).to_string();
                let time = stanza.created.get(11..19).unwrap_or("").to_string();
                let tags = if stanza.tags.is_empty() {
                    "--".to_string()
                } else {
                    stanza.tags.clone()
                };
                let state = if stanza.is_publishable() {
                    "ready"
                } else {
                    "draft"
                };

                table.add_row(vec![
                    short_id,
                    time,
                    stanza.reference.clone(),
                    tags,
                    state.to_string(),
                ]);
            }

            print!("{}", table.render());
        }
    }
    Ok(())
}

fn filter_groups<'a>(
    groups: &'a [DayGroup],
    bounds: &Option<(String, String)>,
) -> Vec<&'a DayGroup> {
    match bounds {
        None => groups.iter().collect(),
        Some((start, end)) => groups
            .iter()
            .filter(|g| g.day.as_str() >= start.as_str() && g.day.as_str() <= end.as_str())
            .collect(),
    }
}
