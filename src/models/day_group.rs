use super::stanza::Stanza;

/// One calendar day of stanzas, in capture order newest first.
/// Built at read time by `db::queries::group_by_day`; never persisted.
#[derive(Debug, Clone, Default)]
pub struct DayGroup {
    pub day: String,
    pub stanzas: Vec<Stanza>,
}

impl DayGroup {
    /// The stanzas that make it onto the published page for this day.
    pub fn publishable(&self) -> Vec<&Stanza> {
        self.stanzas.iter().filter(|s| s.is_publishable()).collect()
    }
}
