#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sl() -> Command {
    cargo_bin_cmd!("stanzalog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stanzalog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique session file path so concurrent tests never share an edit session
pub fn setup_session_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stanzalog_session.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a unique output directory for rendered pages and wipe any previous run
pub fn setup_html_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stanzalog_html", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_dir_all(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the store schema (tables + migrations) for a test DB
pub fn init_store(db_path: &str) {
    sl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Capture a stanza via the CLI and return the id parsed from the reply
pub fn save_stanza(db_path: &str, session_file: &str, url: &str) -> String {
    let output = sl()
        .args([
            "--db",
            db_path,
            "--session-file",
            session_file,
            "save",
            url,
        ])
        .output()
        .expect("run save");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .split("Start editing ")
        .nth(1)
        .expect("save reply should name the new stanza")
        .trim()
        .to_string()
}

/// Insert a stanza with a fixed capture timestamp directly via the library API,
/// so tests can build multi-day datasets deterministically
pub fn insert_stanza_at(
    db_path: &str,
    created: &str,
    reference: &str,
    thoughts: &str,
    tags: &str,
) -> String {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    stanzalog::db::initialize::init_db(&conn).expect("init db");

    let mut stanza = stanzalog::models::stanza::Stanza::new(reference);
    stanza.created = created.to_string();
    stanza.thoughts = thoughts.to_string();
    stanza.tags = tags.to_string();

    stanzalog::db::queries::insert_stanza(&conn, &stanza).expect("insert stanza");
    stanza.id
}
