use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_store, save_stanza, setup_session_file, setup_test_db, sl};

#[test]
fn test_save_starts_edit_session() {
    let db_path = setup_test_db("save_starts_session");
    let session = setup_session_file("save_starts_session");
    init_store(&db_path);

    sl().args([
        "--db",
        &db_path,
        "--session-file",
        &session,
        "save",
        "<http://example.com/a>",
    ])
    .assert()
    .success()
    .stdout(contains("Start editing "));

    // The session file exists and points at the new stanza
    assert!(std::path::Path::new(&session).exists());
}

#[test]
fn test_thoughts_and_tags_fill_the_record() {
    let db_path = setup_test_db("thoughts_and_tags");
    let session = setup_session_file("thoughts_and_tags");
    init_store(&db_path);

    let id = save_stanza(&db_path, &session, "<http://example.com/a>");

    sl().args([
        "--db",
        &db_path,
        "--session-file",
        &session,
        "thoughts",
        "TIL:",
        "a",
        "great",
        "read",
    ])
    .assert()
    .success()
    .stdout(contains("Done"));

    sl().args([
        "--db",
        &db_path,
        "--session-file",
        &session,
        "tags",
        "rust,cli",
    ])
    .assert()
    .success()
    .stdout(contains("Done"));

    sl().args(["--db", &db_path, "show", &id])
        .assert()
        .success()
        .stdout(contains(format!("uuid: {}", id)))
        .stdout(contains("ref: <http://example.com/a>"))
        .stdout(contains("thoughts: TIL: a great read"))
        .stdout(contains("tags: rust|cli"));
}

#[test]
fn test_tags_commas_become_pipes() {
    let db_path = setup_test_db("tags_commas");
    let session = setup_session_file("tags_commas");
    init_store(&db_path);

    let id = save_stanza(&db_path, &session, "<http://example.com/t>");

    sl().args([
        "--db",
        &db_path,
        "--session-file",
        &session,
        "tags",
        "a,b,c",
    ])
    .assert()
    .success()
    .stdout(contains("Done"));

    sl().args(["--db", &db_path, "show", &id])
        .assert()
        .success()
        .stdout(contains("tags: a|b|c"));
}

#[test]
fn test_done_clears_session_and_echoes_record() {
    let db_path = setup_test_db("done_clears");
    let session = setup_session_file("done_clears");
    init_store(&db_path);

    let id = save_stanza(&db_path, &session, "<http://example.com/d>");

    sl().args(["--db", &db_path, "--session-file", &session, "done"])
        .assert()
        .success()
        .stdout(contains(format!("Quit editing {}", id)))
        .stdout(contains(format!("uuid: {}", id)));

    // A second done has no session left to close
    sl().args(["--db", &db_path, "--session-file", &session, "done"])
        .assert()
        .success()
        .stdout(contains("No session found."));
}

#[test]
fn test_thoughts_without_session() {
    let db_path = setup_test_db("thoughts_no_session");
    let session = setup_session_file("thoughts_no_session");
    init_store(&db_path);

    sl().args([
        "--db",
        &db_path,
        "--session-file",
        &session,
        "thoughts",
        "orphan",
    ])
    .assert()
    .success()
    .stdout(contains("No session found."));
}

#[test]
fn test_show_unknown_stanza() {
    let db_path = setup_test_db("show_unknown");
    init_store(&db_path);

    sl().args(["--db", &db_path, "show", "no-such-id"])
        .assert()
        .success()
        .stdout(contains("stanza no-such-id not found"));
}

#[test]
fn test_edit_unknown_stanza() {
    let db_path = setup_test_db("edit_unknown");
    let session = setup_session_file("edit_unknown");
    init_store(&db_path);

    sl().args([
        "--db",
        &db_path,
        "--session-file",
        &session,
        "edit",
        "no-such-id",
    ])
    .assert()
    .success()
    .stdout(contains("Stanza no-such-id not found"));

    // No session was opened for the unknown id
    assert!(!std::path::Path::new(&session).exists());
}

#[test]
fn test_second_save_replaces_the_session() {
    let db_path = setup_test_db("save_replaces");
    let session = setup_session_file("save_replaces");
    init_store(&db_path);

    let first = save_stanza(&db_path, &session, "<http://example.com/1>");
    let second = save_stanza(&db_path, &session, "<http://example.com/2>");

    // thoughts go to the most recently captured stanza
    sl().args([
        "--db",
        &db_path,
        "--session-file",
        &session,
        "thoughts",
        "about the second",
    ])
    .assert()
    .success()
    .stdout(contains("Done"));

    sl().args(["--db", &db_path, "show", &second])
        .assert()
        .success()
        .stdout(contains("thoughts: about the second"));

    sl().args(["--db", &db_path, "show", &first])
        .assert()
        .success()
        .stdout(contains("about the second").not());
}

#[test]
fn test_edit_reopens_a_closed_stanza() {
    let db_path = setup_test_db("edit_reopens");
    let session = setup_session_file("edit_reopens");
    init_store(&db_path);

    let id = save_stanza(&db_path, &session, "<http://example.com/r>");

    sl().args(["--db", &db_path, "--session-file", &session, "done"])
        .assert()
        .success();

    sl().args(["--db", &db_path, "--session-file", &session, "edit", &id])
        .assert()
        .success()
        .stdout(contains(format!("Start editing {}", id)));

    sl().args([
        "--db",
        &db_path,
        "--session-file",
        &session,
        "thoughts",
        "second pass",
    ])
    .assert()
    .success()
    .stdout(contains("Done"));

    sl().args(["--db", &db_path, "show", &id])
        .assert()
        .success()
        .stdout(contains("thoughts: second pass"));
}

#[test]
fn test_thoughts_overwrite_previous_value() {
    let db_path = setup_test_db("thoughts_overwrite");
    let session = setup_session_file("thoughts_overwrite");
    init_store(&db_path);

    let id = save_stanza(&db_path, &session, "<http://example.com/o>");

    sl().args([
        "--db",
        &db_path,
        "--session-file",
        &session,
        "thoughts",
        "first draft",
    ])
    .assert()
    .success();

    sl().args([
        "--db",
        &db_path,
        "--session-file",
        &session,
        "thoughts",
        "final version",
    ])
    .assert()
    .success();

    sl().args(["--db", &db_path, "show", &id])
        .assert()
        .success()
        .stdout(contains("thoughts: final version"))
        .stdout(contains("first draft").not());
}
