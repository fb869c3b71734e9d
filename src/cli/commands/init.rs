use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - the output directory for rendered pages
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ PREPARE CONFIGURATION
    //
    // Config::init_all creates:
    //   ~/.stanzalog/
    //   ~/.stanzalog/stanzalog.conf
    //   ~/.stanzalog/html/
    // In test mode the config file on disk is left untouched.
    //

    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();
    let db_path = cli.db.clone().unwrap_or_else(|| cfg.database.clone());

    println!("⚙️  Initializing stanzalog…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2️⃣ OPEN DB
    //
    let conn = Connection::open(&db_path)?;

    //
    // 3️⃣ INITIALIZE DB (tables + migrations)
    //
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    //
    // 4️⃣ INTERNAL LOG (non-blocking)
    //
    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 stanzalog initialization completed!");
    Ok(())
}
