use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            let rendered =
                serde_yaml::to_string(&cfg).map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", rendered);
        }

        if *check {
            check_config_file(&path);
        }

        if *edit_config {
            let fallback = default_editor();
            let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

            if launch_editor(&chosen, &path) {
                println!(
                    "✅ Configuration file edited successfully using '{}'",
                    chosen
                );
            } else if chosen != fallback {
                eprintln!(
                    "⚠️  Editor '{}' not available, falling back to '{}'",
                    chosen, fallback
                );

                if launch_editor(&fallback, &path) {
                    println!(
                        "✅ Configuration file edited successfully using fallback '{}'",
                        fallback
                    );
                } else {
                    eprintln!(
                        "❌ Failed to edit configuration file using fallback '{}'",
                        fallback
                    );
                }
            } else {
                eprintln!("❌ Failed to edit configuration file using '{}'", chosen);
            }
        }
    }

    Ok(())
}

/// $EDITOR, then $VISUAL, then a platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn launch_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Reports missing or unparsable fields in the config file. Fields with
/// serde defaults are filled in silently at load time, so a missing key
/// is a note, not an error.
fn check_config_file(path: &Path) {
    if !path.exists() {
        println!("⚠️  No configuration file found at {}", path.display());
        println!("   Run `stanzalog init` to create one.");
        return;
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_yaml::from_str::<Config>(&content) {
            Ok(_) => println!("✅ Configuration file is valid: {}", path.display()),
            Err(e) => println!("❌ Configuration file is invalid: {}", e),
        },
        Err(e) => println!("❌ Cannot read configuration file: {}", e),
    }
}
