//! Conformance tests driven by the corpus under fixtures/corpus.
//!
//! Files named `y_*.json` must parse without error, files named `n_*.json` must fail.
use std::path::PathBuf;
use std::time::Instant;
use std::{fs, path::Path};

use bytesize::ByteSize;
use gimlet_json::Parser;

fn corpus_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/corpus")
}

fn corpus_files(prefix: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = fs::read_dir(corpus_dir())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.is_file()
                && path.extension().is_some_and(|ext| ext == "json")
                && file_name(path).starts_with(prefix)
        })
        .collect();
    paths.sort();
    paths
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|name| name.to_str()).unwrap()
}

#[test]
fn should_accept_every_y_file() {
    let paths = corpus_files("y_");
    assert!(!paths.is_empty());
    let parser = Parser::default();
    for path in &paths {
        let len = fs::metadata(path).unwrap().len();
        let start = Instant::now();
        let parsed = parser.parse_file(path);
        if let Err(err) = &parsed {
            println!("Parse of {:?} failed with: {}", path, err);
        }
        assert!(parsed.is_ok(), "{} must be accepted", file_name(path));
        println!(
            "Accepted {} ({}) in {:?}",
            file_name(path),
            ByteSize(len),
            start.elapsed()
        );
    }
}

#[test]
fn should_reject_every_n_file() {
    let paths = corpus_files("n_");
    assert!(!paths.is_empty());
    let parser = Parser::default();
    for path in &paths {
        let parsed = parser.parse_file(path);
        if let Ok(value) = &parsed {
            println!("Parse of {:?} unexpectedly produced: {}", path, value);
        }
        assert!(parsed.is_err(), "{} must be rejected", file_name(path));
        println!(
            "Rejected {} with: {}",
            file_name(path),
            parsed.err().unwrap()
        );
    }
}
