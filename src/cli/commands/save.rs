use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stanza::StanzaLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::SessionStore;
use crate::ui::messages::reply;

/// Capture a new stanza and open an edit session on it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Save { url } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let sessions = SessionStore::new(&cfg.session_file);

        reply(StanzaLogic::save(&mut pool, &sessions, url)?);
    }

    Ok(())
}
