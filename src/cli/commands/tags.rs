use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stanza::StanzaLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::SessionStore;
use crate::ui::messages::reply;

/// Attach tags to the stanza under edit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tags { csv } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let sessions = SessionStore::new(&cfg.session_file);

        reply(StanzaLogic::tags(&mut pool, &sessions, csv)?);
    }

    Ok(())
}
