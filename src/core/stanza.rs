use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{create_stanza, get_stanza, set_tags, set_thoughts};
use crate::errors::AppResult;
use crate::models::session::SessionStore;

/// High-level logic behind the capture and edit commands. Every method
/// returns the textual reply shown to the operator, mirroring the
/// chat-bot surface these commands came through.
pub struct StanzaLogic;

impl StanzaLogic {
    pub fn ping() -> String {
        "pong".to_string()
    }

    /// Show one stanza by id.
    pub fn show(pool: &mut DbPool, id: &str) -> AppResult<String> {
        match get_stanza(&pool.conn, id)? {
            Some(stanza) => Ok(stanza.to_string()),
            None => Ok(format!("stanza {} not found", id)),
        }
    }

    /// Capture a new stanza and open an edit session on it. Any prior
    /// session is silently replaced.
    pub fn save(pool: &mut DbPool, sessions: &SessionStore, url: &str) -> AppResult<String> {
        let stanza = create_stanza(&pool.conn, url)?;
        sessions.start(&stanza.id)?;

        let _ = ttlog(
            &pool.conn,
            "save",
            &stanza.id,
            &format!("Captured {}", url),
        );

        Ok(format!("Start editing {}", stanza.id))
    }

    /// Re-open an edit session on an existing stanza.
    pub fn edit(pool: &mut DbPool, sessions: &SessionStore, id: &str) -> AppResult<String> {
        if get_stanza(&pool.conn, id)?.is_some() {
            sessions.start(id)?;

            let _ = ttlog(&pool.conn, "edit", id, "Session reopened");

            Ok(format!("Start editing {}", id))
        } else {
            Ok(format!("Stanza {} not found", id))
        }
    }

    /// Close the active edit session and echo the final record.
    pub fn done(pool: &mut DbPool, sessions: &SessionStore) -> AppResult<String> {
        match sessions.current()? {
            Some(session) => {
                sessions.clear()?;

                let mut reply = format!("Quit editing {}", session.stanza_id);
                if let Some(stanza) = get_stanza(&pool.conn, &session.stanza_id)? {
                    reply.push('\n');
                    reply.push_str(&stanza.to_string());
                }
                Ok(reply)
            }
            None => Ok("No session found.".to_string()),
        }
    }

    /// Overwrite the thoughts of the stanza under edit.
    pub fn thoughts(pool: &mut DbPool, sessions: &SessionStore, text: &str) -> AppResult<String> {
        match sessions.current()? {
            Some(session) => {
                if get_stanza(&pool.conn, &session.stanza_id)?.is_some() {
                    set_thoughts(&pool.conn, &session.stanza_id, text)?;

                    let _ = ttlog(&pool.conn, "thoughts", &session.stanza_id, "Thoughts updated");

                    Ok("Done".to_string())
                } else {
                    // The session points at a record that no longer exists.
                    sessions.clear()?;
                    Ok(format!("Stanza {} not found", session.stanza_id))
                }
            }
            None => Ok("No session found.".to_string()),
        }
    }

    /// Overwrite the tags of the stanza under edit. Comma separators
    /// are normalized to pipes on write.
    pub fn tags(pool: &mut DbPool, sessions: &SessionStore, raw_tags: &str) -> AppResult<String> {
        match sessions.current()? {
            Some(session) => {
                if get_stanza(&pool.conn, &session.stanza_id)?.is_some() {
                    set_tags(&pool.conn, &session.stanza_id, raw_tags)?;

                    let _ = ttlog(&pool.conn, "tags", &session.stanza_id, "Tags updated");

                    Ok("Done".to_string())
                } else {
                    sessions.clear()?;
                    Ok(format!("Stanza {} not found", session.stanza_id))
                }
            }
            None => Ok("No session found.".to_string()),
        }
    }
}
