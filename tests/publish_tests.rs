use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_store, insert_stanza_at, setup_html_dir, setup_test_db, sl};

#[test]
fn test_publish_empty_store() {
    let db_path = setup_test_db("publish_empty");
    let html_dir = setup_html_dir("publish_empty");
    init_store(&db_path);

    sl().args(["--db", &db_path, "--html-dir", &html_dir, "publish"])
        .assert()
        .success()
        .stdout(contains("Nothing to publish yet."));

    assert!(!Path::new(&html_dir).join("index.html").exists());
}

#[test]
fn test_publish_writes_day_pages_and_index() {
    let db_path = setup_test_db("publish_pages");
    let html_dir = setup_html_dir("publish_pages");
    init_store(&db_path);

    insert_stanza_at(
        &db_path,
        "2024-01-01T23:00:00.000000+0000",
        "<http://example.com/older>",
        "an older note",
        "rust",
    );
    insert_stanza_at(
        &db_path,
        "2024-01-02T09:00:00.000000+0000",
        "<http://example.com/morning>",
        "the morning read",
        "rust|cli",
    );
    insert_stanza_at(
        &db_path,
        "2024-01-02T10:00:00.000000+0000",
        "<http://example.com/late>",
        "the late read",
        "web",
    );

    sl().args(["--db", &db_path, "--html-dir", &html_dir, "publish"])
        .assert()
        .success()
        .stdout(contains("Published 2 day pages"));

    let out = Path::new(&html_dir);
    assert!(out.join("stanza-2024-01-01.html").exists());
    assert!(out.join("stanza-2024-01-02.html").exists());
    assert!(out.join("index.html").exists());

    // index.html mirrors the most recent day page byte for byte
    let latest = fs::read(out.join("stanza-2024-01-02.html")).expect("read latest page");
    let index = fs::read(out.join("index.html")).expect("read index");
    assert_eq!(latest, index);

    // the newest capture comes first on its day page
    let page = String::from_utf8(latest).expect("utf8 page");
    let late_pos = page.find("http://example.com/late").expect("late entry");
    let morning_pos = page.find("http://example.com/morning").expect("morning entry");
    assert!(late_pos < morning_pos);

    // site header and store-wide footer
    assert!(page.contains("不要停止技术阅读"));
    assert!(page.contains("2 days, 3 stanzas, 42 characters of thoughts."));

    // the navigation always points at the latest day
    let older = fs::read_to_string(out.join("stanza-2024-01-01.html")).expect("read older page");
    assert!(older.contains("stanza-2024-01-02.html"));
}

#[test]
fn test_publish_skips_unfinished_stanzas() {
    let db_path = setup_test_db("publish_drafts");
    let html_dir = setup_html_dir("publish_drafts");
    init_store(&db_path);

    insert_stanza_at(
        &db_path,
        "2024-03-05T08:00:00.000000+0000",
        "<http://example.com/finished>",
        "has thoughts",
        "rust",
    );
    // thoughts but no tags
    insert_stanza_at(
        &db_path,
        "2024-03-05T09:00:00.000000+0000",
        "<http://example.com/untagged>",
        "only thoughts",
        "",
    );
    // tags but no thoughts
    insert_stanza_at(
        &db_path,
        "2024-03-05T10:00:00.000000+0000",
        "<http://example.com/unwritten>",
        "",
        "rust",
    );

    sl().args(["--db", &db_path, "--html-dir", &html_dir, "publish"])
        .assert()
        .success();

    let page = fs::read_to_string(Path::new(&html_dir).join("stanza-2024-03-05.html"))
        .expect("read day page");

    assert!(page.contains("http://example.com/finished"));
    assert!(!page.contains("http://example.com/untagged"));
    assert!(!page.contains("http://example.com/unwritten"));
}

#[test]
fn test_publish_is_idempotent() {
    let db_path = setup_test_db("publish_idempotent");
    let html_dir = setup_html_dir("publish_idempotent");
    init_store(&db_path);

    insert_stanza_at(
        &db_path,
        "2024-02-01T12:00:00.000000+0000",
        "<http://example.com/one>",
        "note one",
        "a|b",
    );
    insert_stanza_at(
        &db_path,
        "2024-02-02T12:00:00.000000+0000",
        "<http://example.com/two>",
        "note two",
        "b",
    );

    sl().args(["--db", &db_path, "--html-dir", &html_dir, "publish"])
        .assert()
        .success();

    let out = Path::new(&html_dir);
    let first = [
        fs::read(out.join("stanza-2024-02-01.html")).expect("page 1"),
        fs::read(out.join("stanza-2024-02-02.html")).expect("page 2"),
        fs::read(out.join("index.html")).expect("index"),
    ];

    sl().args(["--db", &db_path, "--html-dir", &html_dir, "publish"])
        .assert()
        .success();

    let second = [
        fs::read(out.join("stanza-2024-02-01.html")).expect("page 1 again"),
        fs::read(out.join("stanza-2024-02-02.html")).expect("page 2 again"),
        fs::read(out.join("index.html")).expect("index again"),
    ];

    assert_eq!(first, second);
}

#[test]
fn test_publish_renders_links_and_badges() {
    let db_path = setup_test_db("publish_render");
    let html_dir = setup_html_dir("publish_render");
    init_store(&db_path);

    insert_stanza_at(
        &db_path,
        "2024-04-10T12:00:00.000000+0000",
        "<http://example.com/page>",
        "check <http://example.com/target> for details",
        "rust|cli",
    );

    sl().args(["--db", &db_path, "--html-dir", &html_dir, "publish"])
        .assert()
        .success();

    let page = fs::read_to_string(Path::new(&html_dir).join("index.html")).expect("read index");

    // ref becomes the entry heading link, brackets stripped
    assert!(page.contains(r#"<a href="http://example.com/page">"#));
    // bare <url> inside thoughts is promoted to a real anchor
    assert!(page.contains(r#"<a href="http://example.com/target">http://example.com/target</a>"#));
    // one badge per tag
    assert!(page.contains(r#"<span class="badge">rust</span>"#));
    assert!(page.contains(r#"<span class="badge">cli</span>"#));
}

#[test]
fn test_publish_day_description_lists_distinct_tags() {
    let db_path = setup_test_db("publish_description");
    let html_dir = setup_html_dir("publish_description");
    init_store(&db_path);

    insert_stanza_at(
        &db_path,
        "2024-05-20T08:00:00.000000+0000",
        "<http://example.com/early>",
        "early note",
        "rust|web",
    );
    insert_stanza_at(
        &db_path,
        "2024-05-20T18:00:00.000000+0000",
        "<http://example.com/later>",
        "later note",
        "rust|cli",
    );

    sl().args(["--db", &db_path, "--html-dir", &html_dir, "publish"])
        .assert()
        .success();

    let page = fs::read_to_string(Path::new(&html_dir).join("index.html")).expect("read index");

    // newest entry's tags come first; repeats collapse
    assert!(page.contains(r#"<p class="day-tags">rust, cli, web</p>"#));
}

#[test]
fn test_publish_escapes_markup_in_tags() {
    let db_path = setup_test_db("publish_escape");
    let html_dir = setup_html_dir("publish_escape");
    init_store(&db_path);

    insert_stanza_at(
        &db_path,
        "2024-06-01T12:00:00.000000+0000",
        "<http://example.com/x>",
        "note",
        "<script>|safe",
    );

    sl().args(["--db", &db_path, "--html-dir", &html_dir, "publish"])
        .assert()
        .success();

    let page = fs::read_to_string(Path::new(&html_dir).join("index.html")).expect("read index");

    assert!(page.contains(r#"<span class="badge">&lt;script&gt;</span>"#));
    assert!(!page.contains(r#"<span class="badge"><script></span>"#));
}

#[test]
fn test_draft_only_day_still_gets_a_page() {
    let db_path = setup_test_db("publish_draft_day");
    let html_dir = setup_html_dir("publish_draft_day");
    init_store(&db_path);

    insert_stanza_at(
        &db_path,
        "2024-07-01T12:00:00.000000+0000",
        "<http://example.com/wip>",
        "",
        "",
    );

    sl().args(["--db", &db_path, "--html-dir", &html_dir, "publish"])
        .assert()
        .success()
        .stdout(contains("Published 1 day pages"));

    let page = fs::read_to_string(Path::new(&html_dir).join("stanza-2024-07-01.html"))
        .expect("read day page");
    assert!(page.contains("2024-07-01"));
    assert!(!page.contains("http://example.com/wip"));
}

#[test]
fn test_stats_command_reports_store_totals() {
    let db_path = setup_test_db("stats_totals");
    init_store(&db_path);

    insert_stanza_at(
        &db_path,
        "2024-01-01T10:00:00.000000+0000",
        "<http://example.com/a>",
        "foo",
        "x",
    );
    insert_stanza_at(
        &db_path,
        "2024-01-01T11:00:00.000000+0000",
        "<http://example.com/b>",
        "1234567",
        "",
    );
    insert_stanza_at(
        &db_path,
        "2024-01-02T10:00:00.000000+0000",
        "<http://example.com/c>",
        "",
        "",
    );

    sl().args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Days with stanzas     : 2"))
        .stdout(contains("Stanzas               : 3"))
        .stdout(contains("Characters of thoughts: 10"));
}

#[test]
fn test_stats_on_empty_store() {
    let db_path = setup_test_db("stats_empty");
    init_store(&db_path);

    sl().args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Stanzas               : 0"))
        .stdout(contains("Characters of thoughts: 0"));
}

#[test]
fn test_zen() {
    let db_path = setup_test_db("zen");

    sl().args(["--db", &db_path, "zen"])
        .assert()
        .success()
        .stdout(contains("Automate myself, and gain knowledge."))
        .stdout(contains("Error").not());
}
