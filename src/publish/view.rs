//! View structs handed to the page template. Conversion into
//! [`gtmpl_value::Value`] keeps the template layer free of any storage
//! types.

use crate::config::Config;
use crate::db::stats::StoreStats;
use crate::models::stanza::Stanza;
use crate::publish::{html, markdown};
use gtmpl_value::Value;
use std::collections::HashMap;

/// Site-wide fields shared by every rendered page.
#[derive(Debug, Clone)]
pub struct SiteMeta {
    pub title: String,
    pub slogan: String,
    pub author: String,
    pub url: String,
}

impl SiteMeta {
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.site_title.clone(),
            slogan: config.site_slogan.clone(),
            author: config.site_author.clone(),
            url: config.site_url.clone(),
        }
    }
}

/// One publishable stanza, already rendered to HTML fragments.
pub struct EntryView {
    pub id: String,
    pub ref_url: String,
    pub thoughts: String,
    pub tags: Vec<String>,
}

impl From<&Stanza> for EntryView {
    fn from(stanza: &Stanza) -> EntryView {
        EntryView {
            id: stanza.id.clone(),
            ref_url: html::escape_attr(stanza.ref_url()),
            thoughts: markdown::to_html(&stanza.thoughts),
            tags: stanza.tag_list().into_iter().map(html::escape).collect(),
        }
    }
}

impl From<&EntryView> for Value {
    fn from(e: &EntryView) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("id".to_owned(), (&e.id).into());
        m.insert("ref_url".to_owned(), (&e.ref_url).into());
        m.insert("thoughts".to_owned(), (&e.thoughts).into());
        m.insert(
            "tags".to_owned(),
            Value::Array(e.tags.iter().map(|t| Value::String(t.clone())).collect()),
        );
        Value::Object(m)
    }
}

/// Store-wide aggregates shown in the page footer.
pub struct StatsView {
    pub days: i64,
    pub stanzas: i64,
    pub thought_chars: i64,
}

impl From<StoreStats> for StatsView {
    fn from(stats: StoreStats) -> StatsView {
        StatsView {
            days: stats.distinct_days,
            stanzas: stats.stanza_count,
            thought_chars: stats.thought_chars,
        }
    }
}

impl From<&StatsView> for Value {
    fn from(s: &StatsView) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("days".to_owned(), Value::from(s.days));
        m.insert("stanzas".to_owned(), Value::from(s.stanzas));
        m.insert("thought_chars".to_owned(), Value::from(s.thought_chars));
        Value::Object(m)
    }
}

/// Everything one day page needs.
pub struct DayPageView {
    pub title: String,
    pub slogan: String,
    pub author: String,
    pub site_url: String,
    pub day: String,
    pub description: String,
    pub entries: Vec<EntryView>,
    pub latest_day: String,
    pub stats: StatsView,
}

impl DayPageView {
    pub fn build(
        site: &SiteMeta,
        day: &str,
        stanzas: &[&Stanza],
        latest_day: &str,
        stats: StoreStats,
    ) -> Self {
        let entries: Vec<EntryView> = stanzas.iter().map(|s| EntryView::from(*s)).collect();
        let description = day_description(&entries);
        DayPageView {
            title: site.title.clone(),
            slogan: site.slogan.clone(),
            author: site.author.clone(),
            site_url: site.url.clone(),
            day: day.to_owned(),
            description,
            entries,
            latest_day: latest_day.to_owned(),
            stats: stats.into(),
        }
    }
}

impl From<&DayPageView> for Value {
    fn from(p: &DayPageView) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("title".to_owned(), (&p.title).into());
        m.insert("slogan".to_owned(), (&p.slogan).into());
        m.insert("author".to_owned(), (&p.author).into());
        m.insert("site_url".to_owned(), (&p.site_url).into());
        m.insert("day".to_owned(), (&p.day).into());
        m.insert("description".to_owned(), (&p.description).into());
        m.insert(
            "entries".to_owned(),
            Value::Array(p.entries.iter().map(Value::from).collect()),
        );
        m.insert("latest_day".to_owned(), (&p.latest_day).into());
        m.insert("stats".to_owned(), Value::from(&p.stats));
        Value::Object(m)
    }
}

/// The distinct tags of a day in first-seen order, used as the page
/// description. Order is kept stable so rebuilds stay byte-identical.
fn day_description(entries: &[EntryView]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for entry in entries {
        for tag in &entry.tags {
            if !seen.contains(&tag.as_str()) {
                seen.push(tag);
            }
        }
    }
    seen.join(", ")
}
