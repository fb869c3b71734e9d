use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats::store_stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, RESET};

/// Print the aggregate counters for the whole store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Stats) {
        let pool = DbPool::new(&cfg.database)?;
        let stats = store_stats(&pool)?;

        println!("{}=== Store statistics ==={}", CYAN, RESET);
        println!("Days with stanzas     : {}", stats.distinct_days);
        println!("Stanzas               : {}", stats.stanza_count);
        println!("Characters of thoughts: {}", stats.thought_chars);
    }

    Ok(())
}
