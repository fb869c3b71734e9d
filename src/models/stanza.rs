use chrono::Utc;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Stanza {
    pub id: String, // ⇔ stanzas.id (TEXT, uuid v4)
    pub created: String, // ⇔ stanzas.created (TEXT, ISO-8601 UTC "+0000")
    #[serde(rename = "ref")]
    pub reference: String, // ⇔ stanzas.ref (TEXT, usually "<url>")
    pub thoughts: String, // ⇔ stanzas.thoughts (TEXT, markdown, default '')
    pub tags: String, // ⇔ stanzas.tags (TEXT, pipe-separated, default '')
}

impl Stanza {
    /// Fresh stanza as captured from a chat command: ref only, thoughts and
    /// tags stay empty until the edit session fills them in.
    pub fn new(reference: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created: created_timestamp(),
            reference: reference.to_string(),
            thoughts: String::new(),
            tags: String::new(),
        }
    }

    /// Calendar day of capture, the `YYYY-MM-DD` prefix of `created`.
    pub fn day(&self) -> &str {
        self.created.get(..10).unwrap_or(&self.created)
    }

    /// Target URL for rendering. Capture tools deliver refs wrapped in angle
    /// brackets; anything else is treated as "no link".
    pub fn ref_url(&self) -> &str {
        match self
            .reference
            .strip_prefix('<')
            .and_then(|inner| inner.strip_suffix('>'))
        {
            Some(inner) => inner,
            None => "#",
        }
    }

    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split('|')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// A stanza only shows up on published pages once both thoughts and tags
    /// have been filled in.
    pub fn is_publishable(&self) -> bool {
        !self.thoughts.is_empty() && !self.tags.is_empty()
    }
}

/// Chat reply rendering, one `key: value` line per field.
impl fmt::Display for Stanza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "uuid: {}\ncreated: {}\nref: {}\nthoughts: {}\ntags: {}",
            self.id, self.created, self.reference, self.thoughts, self.tags
        )
    }
}

/// Capture timestamp: ISO-8601 UTC with a literal `+0000` suffix.
/// The `created` column is ordered and sliced as text, so the format must
/// stay lexicographically sortable.
pub fn created_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f+0000").to_string()
}
