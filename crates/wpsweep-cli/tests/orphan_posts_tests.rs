//! Integration tests for the find-orphan-posts command

use assert_cmd::Command;
use predicates::prelude::*;
use rusqlite::Connection;
use std::path::Path;
use tempfile::TempDir;

fn wpsweep_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wpsweep").unwrap();
    cmd.env("WPSWEEP_DB", db_path);
    cmd.env_remove("WPSWEEP_TABLE_PREFIX");
    cmd
}

fn create_posts_fixture(db_path: &Path, prefix: &str) {
    let conn = Connection::open(db_path).unwrap();
    conn.execute_batch(&format!(
        "CREATE TABLE {prefix}posts (
             ID INTEGER PRIMARY KEY,
             post_parent INTEGER NOT NULL DEFAULT 0,
             post_type TEXT NOT NULL DEFAULT 'post'
         );
         INSERT INTO {prefix}posts (ID, post_parent, post_type) VALUES
             (1, 7, 'post'),
             (2, 1, 'post'),
             (3, 99, 'page');",
        prefix = prefix
    ))
    .unwrap();
}

#[test]
fn test_lists_orphans_one_per_line() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("wp.sqlite");
    create_posts_fixture(&db_path, "wp_");

    wpsweep_cmd(&db_path)
        .arg("find-orphan-posts")
        .assert()
        .success()
        .stdout("1\n3\n");
}

#[test]
fn test_object_type_filter_restricts_output() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("wp.sqlite");
    create_posts_fixture(&db_path, "wp_");

    wpsweep_cmd(&db_path)
        .arg("find-orphan-posts")
        .arg("--object-type=page")
        .assert()
        .success()
        .stdout("3\n");

    wpsweep_cmd(&db_path)
        .arg("find-orphan-posts")
        .arg("--object-type= post , page ")
        .assert()
        .success()
        .stdout("1\n3\n");
}

#[test]
fn test_no_orphans_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("wp.sqlite");
    let conn = Connection::open(&db_path).unwrap();
    conn.execute_batch(
        "CREATE TABLE wp_posts (
             ID INTEGER PRIMARY KEY,
             post_parent INTEGER NOT NULL DEFAULT 0,
             post_type TEXT NOT NULL DEFAULT 'post'
         );
         INSERT INTO wp_posts (ID, post_parent, post_type) VALUES (1, 0, 'post'), (0, 0, 'post');",
    )
    .unwrap();
    drop(conn);

    wpsweep_cmd(&db_path)
        .arg("find-orphan-posts")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_crafted_object_type_is_harmless() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("wp.sqlite");
    create_posts_fixture(&db_path, "wp_");

    wpsweep_cmd(&db_path)
        .arg("find-orphan-posts")
        .arg("--object-type=x'); DROP TABLE wp_posts;--")
        .assert()
        .success()
        .stdout("");

    // Table survived
    let conn = Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM wp_posts", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 3);
}

#[test]
fn test_table_prefix_flag() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("wp.sqlite");
    create_posts_fixture(&db_path, "site_");

    wpsweep_cmd(&db_path)
        .arg("find-orphan-posts")
        .arg("--table-prefix=site_")
        .assert()
        .success()
        .stdout("1\n3\n");
}

#[test]
fn test_missing_database_file_is_invalid_input() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("does-not-exist.sqlite");

    wpsweep_cmd(&db_path)
        .arg("find-orphan-posts")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Database file not found"));
}
