use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::publish::PublishLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Rebuild the HTML site from the store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Publish) {
        let mut pool = DbPool::new(&cfg.database)?;

        PublishLogic::publish(&mut pool, cfg)?;
    }

    Ok(())
}
