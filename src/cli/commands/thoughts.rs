use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stanza::StanzaLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::SessionStore;
use crate::ui::messages::reply;

/// Attach thoughts to the stanza under edit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Thoughts { text } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let sessions = SessionStore::new(&cfg.session_file);

        // The shell splits the message into words; stitch it back together.
        let text = text.join(" ");

        reply(StanzaLogic::thoughts(&mut pool, &sessions, &text)?);
    }

    Ok(())
}
