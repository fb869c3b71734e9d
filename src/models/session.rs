use crate::errors::{AppError, AppResult};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// The stanza currently selected for free-text edit commands
/// (`thoughts ...`, `tags ...`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditSession {
    pub stanza_id: String,
    pub started: String,
}

/// File-backed holder for the single active edit session.
///
/// At most one session exists at a time; `save`/`edit` silently overwrite the
/// previous pointer. There is no expiry: a session lives until `done stanza`
/// clears it or another capture replaces it.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: crate::utils::path::expand_tilde(path),
        }
    }

    pub fn current(&self) -> AppResult<Option<EditSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&raw)
            .map_err(|e| AppError::Session(format!("{}: {}", self.path.display(), e)))?;
        Ok(Some(session))
    }

    pub fn start(&self, stanza_id: &str) -> AppResult<EditSession> {
        let session = EditSession {
            stanza_id: stanza_id.to_string(),
            started: Local::now().to_rfc3339(),
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(&session)
            .map_err(|e| AppError::Session(e.to_string()))?;
        fs::write(&self.path, body)?;
        Ok(session)
    }

    pub fn clear(&self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
