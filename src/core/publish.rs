use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::list_grouped_by_day;
use crate::db::stats::store_stats;
use crate::errors::AppResult;
use crate::publish::template::render_page;
use crate::publish::view::{DayPageView, SiteMeta};
use crate::ui::messages::success;
use std::fs;
use std::path::Path;

/// High-level logic for the `publish` command.
pub struct PublishLogic;

impl PublishLogic {
    /// Full rebuild of the static site: one `stanza-<day>.html` per
    /// calendar day, newest first, plus `index.html` mirroring the most
    /// recent day. Re-running with an unchanged store rewrites the same
    /// bytes.
    pub fn publish(pool: &mut DbPool, cfg: &Config) -> AppResult<usize> {
        //
        // 1️⃣ COLLECT
        //
        let groups = list_grouped_by_day(pool)?;
        let stats = store_stats(pool)?;
        let site = SiteMeta::from_config(cfg);

        let out_dir = Path::new(&cfg.html_dir);
        fs::create_dir_all(out_dir)?;

        // Empty store: nothing to render, not an error.
        let Some(latest) = groups.first().map(|g| g.day.clone()) else {
            success("Nothing to publish yet.");
            return Ok(0);
        };

        //
        // 2️⃣ RENDER DAY PAGES
        //
        let mut pages = 0usize;
        for group in &groups {
            let publishable = group.publishable();
            let view = DayPageView::build(&site, &group.day, &publishable, &latest, stats);
            let html = render_page(&view)?;

            let page_path = out_dir.join(format!("stanza-{}.html", group.day));
            fs::write(&page_path, &html)?;
            pages += 1;
        }

        //
        // 3️⃣ INDEX COPY
        //
        // The page for the most recent day doubles as the site index.
        let latest_page = out_dir.join(format!("stanza-{}.html", latest));
        fs::copy(&latest_page, out_dir.join("index.html"))?;

        //
        // 4️⃣ LOG (non-blocking)
        //
        let _ = ttlog(
            &pool.conn,
            "publish",
            &cfg.html_dir,
            &format!("Rendered {} day pages", pages),
        );

        success(format!("Published {} day pages to {}", pages, cfg.html_dir));

        Ok(pages)
    }
}
