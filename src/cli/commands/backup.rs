use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        // No pool here: the store file is copied as-is, and opening it
        // first would create an empty database when none exists yet.
        BackupLogic::backup(&cfg.database, file, *compress)?;
    }

    Ok(())
}
