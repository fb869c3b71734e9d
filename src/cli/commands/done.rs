use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stanza::StanzaLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::SessionStore;
use crate::ui::messages::reply;

/// Close the active edit session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Done) {
        let mut pool = DbPool::new(&cfg.database)?;
        let sessions = SessionStore::new(&cfg.session_file);

        reply(StanzaLogic::done(&mut pool, &sessions)?);
    }

    Ok(())
}
