use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            println!("Nothing to do. Try `log --print`.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}
