use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_html_dir")]
    pub html_dir: String,
    #[serde(default = "default_session_file")]
    pub session_file: String,
    #[serde(default = "default_site_title")]
    pub site_title: String,
    #[serde(default = "default_site_slogan")]
    pub site_slogan: String,
    #[serde(default = "default_site_author")]
    pub site_author: String,
    #[serde(default = "default_site_url")]
    pub site_url: String,
}

fn default_html_dir() -> String {
    Config::config_dir().join("html").to_string_lossy().to_string()
}
fn default_session_file() -> String {
    Config::config_dir()
        .join("session.json")
        .to_string_lossy()
        .to_string()
}
fn default_site_title() -> String {
    "Tech Shack".to_string()
}
fn default_site_slogan() -> String {
    "不要停止技术阅读!".to_string()
}
fn default_site_author() -> String {
    "Tech Shack".to_string()
}
fn default_site_url() -> String {
    "https://techshack.soasme.com".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            html_dir: default_html_dir(),
            session_file: default_session_file(),
            site_title: default_site_title(),
            site_slogan: default_site_slogan(),
            site_author: default_site_author(),
            site_url: default_site_url(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("stanzalog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".stanzalog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("stanzalog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("stanzalog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration, database and output directory
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("stanzalog.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        // Output directory for the rendered pages
        fs::create_dir_all(&config.html_dir)?;

        println!("✅ Database:    {:?}", db_path);
        println!("✅ HTML dir:    {:?}", config.html_dir);

        Ok(())
    }
}
