use serde::Serialize;

/// Flat row shape shared by every export format.
#[derive(Serialize, Clone, Debug)]
pub struct StanzaExport {
    pub id: String,
    pub created: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub thoughts: String,
    pub tags: String,
}

impl StanzaExport {
    /// Day prefix of `created`, `YYYY-MM-DD`.
    pub fn day(&self) -> &str {
        self.created.get(..10).unwrap_or(&self.created)
    }
}
