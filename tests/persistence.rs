//! Integration tests for multi-run behaviour over persisted stores.
//!
//! Each "run" loads the three JSON files, processes one phrase and saves,
//! the same way the binary does.

use std::fs;
use std::path::Path;
use tempfile::tempdir;
use tokenid::{EngineConfig, PhraseReport, StorePaths, TokenEngine, load_stores, save_stores};

fn run_once(dir: &Path, text: &str) -> (PhraseReport, usize) {
    let paths = StorePaths::in_dir(dir);
    let (stores, warnings) = load_stores(&paths).unwrap();

    let mut engine = TokenEngine::from_stores(stores, EngineConfig::default());
    let report = engine.process(text).unwrap();
    save_stores(&paths, &engine.into_stores()).unwrap();

    (report, warnings.len())
}

#[test]
fn test_counter_survives_between_runs() {
    let dir = tempdir().unwrap();

    let (first, _) = run_once(dir.path(), "cat");
    assert_eq!(first.token_id, 4687);

    let (second, _) = run_once(dir.path(), "dog");
    let res = second.words[0].resolution.as_ref().unwrap();
    assert_eq!(res.part_ids, vec![150_002]);

    let paths = StorePaths::in_dir(dir.path());
    let (stores, _) = load_stores(&paths).unwrap();
    let keys: Vec<&str> = stores.vocab.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["cat", "dog"]);
}

#[test]
fn test_cached_words_across_runs() {
    let dir = tempdir().unwrap();
    let paths = StorePaths::in_dir(dir.path());

    let (first, _) = run_once(dir.path(), "the quick fox");
    let vocab_after_first = fs::read_to_string(&paths.vocab).unwrap();

    let (second, _) = run_once(dir.path(), "The QUICK fox!");
    assert!(second.words.iter().all(|w| w.cached));
    assert_eq!(second.token_id, first.token_id);
    assert_eq!(second.minted, 0);
    assert_eq!(fs::read_to_string(&paths.vocab).unwrap(), vocab_after_first);

    let (stores, _) = load_stores(&paths).unwrap();
    assert_eq!(stores.phrases.len(), 2);
    assert_eq!(stores.phrases.get("the quick fox!"), Some(&second.token_id));
}

#[test]
fn test_corrupted_vocab_recovers() {
    let dir = tempdir().unwrap();
    let paths = StorePaths::in_dir(dir.path());
    fs::write(&paths.vocab, "not json at all").unwrap();

    let (report, warnings) = run_once(dir.path(), "cat");
    assert_eq!(warnings, 1);
    assert_eq!(report.token_id, 4687);

    // The broken file is replaced by a valid one
    let (stores, warnings) = load_stores(&paths).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(stores.vocab.get("cat"), Some(&150_001));
}

#[test]
fn test_counter_never_below_stored_ids() {
    let dir = tempdir().unwrap();
    let paths = StorePaths::in_dir(dir.path());

    for text in ["alpha beta", "gamma", "delta alpha", "epsilon zeta eta"] {
        run_once(dir.path(), text);
    }

    let (stores, _) = load_stores(&paths).unwrap();
    let engine = TokenEngine::from_stores(stores.clone(), EngineConfig::default());
    let counter = engine.vocab().max_token_id();

    assert!(stores.vocab.values().all(|&id| id <= counter));
    assert_eq!(counter, 150_014);

    // "ta" was minted for beta, delta and zeta; only the latest id is kept
    assert_eq!(stores.vocab.len(), 12);
    assert_eq!(stores.vocab.get("ta"), Some(&150_013));
}
