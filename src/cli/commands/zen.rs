use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Print the project motto.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Zen) {
        println!("Automate myself, and gain knowledge.");
    }

    Ok(())
}
