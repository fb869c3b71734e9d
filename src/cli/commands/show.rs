use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stanza::StanzaLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::reply;

/// Print one stanza in its record form.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        reply(StanzaLogic::show(&mut pool, id)?);
    }

    Ok(())
}
