use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stanza::StanzaLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::SessionStore;
use crate::ui::messages::reply;

/// Re-open the edit session on an existing stanza.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let sessions = SessionStore::new(&cfg.session_file);

        reply(StanzaLogic::edit(&mut pool, &sessions, id)?);
    }

    Ok(())
}
