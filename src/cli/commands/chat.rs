use crate::chat::{self, ChatContext};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::SessionStore;
use crate::ui::messages::reply;

/// Route one free-form chat line through the command table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chat { line } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let sessions = SessionStore::new(&cfg.session_file);

        let mut ctx = ChatContext {
            pool: &mut pool,
            sessions: &sessions,
        };

        reply(chat::respond(&mut ctx, line)?);
    }

    Ok(())
}
