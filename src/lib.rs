//! stanzalog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod chat;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod publish;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Save { .. } => cli::commands::save::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Done => cli::commands::done::handle(&cli.command, cfg),
        Commands::Thoughts { .. } => cli::commands::thoughts::handle(&cli.command, cfg),
        Commands::Tags { .. } => cli::commands::tags::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Chat { .. } => cli::commands::chat::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Publish => cli::commands::publish::handle(&cli.command, cfg),
        Commands::Stats => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Zen => cli::commands::zen::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE
    let mut cfg = Config::load();

    // 3️⃣ apply command-line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(custom_html) = &cli.html_dir {
        cfg.html_dir = custom_html.clone();
    }
    if let Some(custom_session) = &cli.session_file {
        cfg.session_file = custom_session.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
