//! The day page template and its renderer.

use crate::errors::{AppError, AppResult};
use crate::publish::view::DayPageView;
use gtmpl::{Context, Template};
use gtmpl_value::Value;

/// Single page layout used for every day page and the index copy.
pub const DAY_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="author" content="{{.author}}">
<meta name="description" content="{{.description}}">
<title>{{.title}} - {{.day}}</title>
<style>
body { margin: 0; font-family: sans-serif; line-height: 1.6; }
.jumbotron { background: #2c3e50; color: #fff; padding: 2rem 1rem; text-align: center; }
.jumbotron h1 { margin: 0; }
.jumbotron h1 a { color: #fff; text-decoration: none; }
.container { max-width: 46rem; margin: 0 auto; padding: 1rem; }
.stanza { border-bottom: 1px solid #ddd; padding: 1rem 0; }
.stanza h3 { word-break: break-all; }
.badge { background: #18bc9c; color: #fff; border-radius: 4px; padding: 2px 6px; font-size: 80%; }
footer { color: #777; font-size: 90%; padding: 1rem 0; }
</style>
</head>
<body>
<header class="jumbotron">
<h1><a href="{{.site_url}}">{{.title}}</a></h1>
<p>{{.slogan}}</p>
</header>
<main class="container">
<h2>{{.day}}</h2>
<p class="day-tags">{{.description}}</p>
{{range .entries}}<article class="stanza" id="{{.id}}">
<h3><a href="{{.ref_url}}">{{.ref_url}}</a></h3>
<div class="thoughts">
{{.thoughts}}</div>
<p>{{range .tags}}<span class="badge">{{.}}</span> {{end}}</p>
</article>
{{end}}<nav><a href="stanza-{{.latest_day}}.html">Latest: {{.latest_day}}</a></nav>
<footer>
<p>{{.stats.days}} days, {{.stats.stanzas}} stanzas, {{.stats.thought_chars}} characters of thoughts.</p>
<p>{{.author}}</p>
</footer>
</main>
</body>
</html>
"#;

/// Renders one day page to a full HTML document.
pub fn render_page(view: &DayPageView) -> AppResult<String> {
    let mut template = Template::default();
    template.parse(DAY_PAGE).map_err(AppError::Template)?;

    let context = Context::from(Value::from(view)).map_err(AppError::Template)?;

    let mut out: Vec<u8> = Vec::new();
    template
        .execute(&mut out, &context)
        .map_err(AppError::Template)?;
    String::from_utf8(out).map_err(|e| AppError::Template(e.to_string()))
}
