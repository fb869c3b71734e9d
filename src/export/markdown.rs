use crate::errors::AppResult;
use crate::export::{StanzaExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export day-batched markdown notes: one `# Stanzas <day>` heading per
/// calendar day, each stanza below it as a `---` block with uuid, url
/// and tags bullets followed by the raw thoughts.
pub(crate) fn export_markdown(stanzas: &[StanzaExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to Markdown: {}", path.display()));

    let mut out: Vec<String> = Vec::new();
    let mut prev: Option<&str> = None;

    for stanza in stanzas {
        let day = stanza.day();
        if prev != Some(day) {
            if prev.is_some() {
                out.push(String::new());
            }
            out.push(format!("# Stanzas {}", day));
            prev = Some(day);
        }

        out.push(String::new());
        out.push(String::new());
        out.push("---".to_string());
        out.push(String::new());
        out.push(format!("* uuid: {}", stanza.id));
        out.push(format!("* url: {}", stanza.reference));
        out.push(format!("* tags: {}", stanza.tags));
        out.push(String::new());
        out.extend(stanza.thoughts.lines().map(|l| l.to_string()));
    }

    let mut file = File::create(path)?;
    file.write_all(out.join("\n").as_bytes())?;
    file.write_all(b"\n")?;

    notify_export_success("Markdown", path);
    Ok(())
}
