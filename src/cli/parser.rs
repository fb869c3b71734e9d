use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for stanzalog
/// CLI application to capture annotated links and publish them as a static site
#[derive(Parser)]
#[command(
    name = "stanzalog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal link-log CLI: capture stanzas via chat-style commands and publish them as a static site from SQLite",
    long_about = None
)]
pub struct Cli {
    /// Path of the stanza store (overrides the configured one)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the output directory for rendered pages
    #[arg(global = true, long = "html-dir")]
    pub html_dir: Option<String>,

    /// Override the edit session file
    #[arg(global = true, long = "session-file")]
    pub session_file: Option<String>,

    /// Test mode: leave the config file on disk untouched
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Show the configuration file contents")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Open the configuration file in an editor ($EDITOR, else nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or a custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Apply any pending schema migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Run an integrity check on the store")]
        check: bool,

        #[arg(long = "vacuum", help = "Reclaim unused space with VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Print store file details")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Dump the internal log, oldest first")]
        print: bool,
    },

    /// Capture a new stanza and start editing it
    Save {
        /// Source URL, optionally wrapped in angle brackets
        url: String,
    },

    /// Re-open the edit session on an existing stanza
    Edit {
        /// Stanza id
        id: String,
    },

    /// Close the active edit session and echo the final record
    Done,

    /// Set the thoughts of the stanza under edit
    Thoughts {
        /// Free text, markdown-flavored
        #[arg(num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Set the tags of the stanza under edit
    Tags {
        /// Comma-separated tags
        csv: String,
    },

    /// Show one stanza
    Show {
        /// Stanza id
        id: String,
    },

    /// Route one chat line (e.g. "save stanza <url>")
    Chat {
        /// The raw chat line
        line: String,
    },

    /// List stanzas grouped by day
    List {
        #[arg(long, short, help = "Filter by year/month/day period")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's stanzas")]
        now: bool,
    },

    /// Render all day pages and the site index
    Publish,

    /// Print store statistics
    Stats,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export stanza data
    Export {
        #[arg(long, value_enum, default_value = "markdown")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print zen of this project
    Zen,
}
