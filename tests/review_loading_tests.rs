//! Review document loading tests

use critique::review::{load_review, Review, ReviewError, ReviewSource};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("example")
        .join("review.json")
}

#[tokio::test]
async fn test_load_bundled_sample() {
    let review = load_review(&ReviewSource::File(sample_path()))
        .await
        .expect("sample review loads");

    assert_eq!(review.title, "Bounded retry queue");
    assert_eq!(review.sections.len(), 2);
    assert_eq!(review.sections[0].note, None);
    assert_eq!(review.sections[1].code_blocks.len(), 2);
    assert_eq!(
        review.sections[1].code_blocks[1].location(),
        "src/retry/worker.rs:40-41"
    );
    assert!(review.sections[1].note.is_some());
}

#[test]
fn test_load_from_dash_path_means_stdin() {
    assert_eq!(
        ReviewSource::from_arg(Some(PathBuf::from("-").as_path())),
        ReviewSource::Stdin
    );
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("review.json");
    fs::write(
        &path,
        r#"{"title": "T", "sections": [{"title": "A", "explanation": "B", "codeBlocks": []}]}"#,
    )
    .expect("write review");

    let err = load_review(&ReviewSource::File(path))
        .await
        .expect_err("summary is required");
    assert!(matches!(err, ReviewError::Parse(_)));
    assert!(err.to_string().contains("summary"));
}

#[test]
fn test_line_ranges_are_not_validated() {
    let review = Review::from_json(
        r#"{
            "title": "T",
            "summary": "S",
            "sections": [{
                "title": "Backwards",
                "explanation": "end before start",
                "codeBlocks": [{
                    "lang": "text", "path": "x", "startLine": 9, "endLine": -3, "code": ""
                }],
                "note": null
            }]
        }"#,
    )
    .expect("accepted as-is");

    assert_eq!(review.sections[0].code_blocks[0].location(), "x:9--3");
    assert_eq!(review.sections[0].note, None);
}

#[test]
fn test_outline_lists_sections() {
    let raw = fs::read_to_string(sample_path()).expect("read sample");
    let outline = Review::from_json(&raw).expect("parse").outline();

    assert!(outline.contains("Title: Bounded retry queue"));
    assert!(outline.contains("[1] Queue capacity"));
    assert!(outline.contains("[2] Backoff helper"));
    assert!(outline.contains("src/retry/queue.rs:12-20"));
}
