use std::fs;

use fuzzer_engine::{load_wordlist, FileKeywordSink, KeywordSink, SinkError, WordlistError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn wordlist_is_trimmed_and_blank_lines_dropped() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("words.txt");
    fs::write(&path, "  user \n\n\tposts\r\n   \nid").unwrap();

    let words = load_wordlist(&path).unwrap();
    assert_eq!(words, vec!["user", "posts", "id"]);
}

#[test]
fn missing_wordlist_is_reported() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.txt");

    let err = load_wordlist(&path).unwrap_err();
    assert!(matches!(err, WordlistError::NotFound { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn sink_truncates_and_appends_lines() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("found.txt");
    fs::write(&path, "stale\n").unwrap();

    let mut sink = FileKeywordSink::create(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");

    sink.append("user").unwrap();
    // Visible before close.
    assert_eq!(fs::read_to_string(&path).unwrap(), "user\n");

    sink.append("posts").unwrap();
    sink.close().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "user\nposts\n");
}

#[test]
fn sink_open_failure_names_the_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("no_such_dir").join("found.txt");

    let err = FileKeywordSink::create(&path).unwrap_err();
    assert!(matches!(err, SinkError::Open { .. }));
    assert!(err.to_string().contains("found.txt"));
}
