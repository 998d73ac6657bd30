use super::*;
use crate::vocab::{TokenId, Vocabulary};
use proptest::prelude::*;

fn vocab_of(pairs: &[(&str, TokenId)]) -> Vocabulary {
    Vocabulary::from_entries(
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        150_000,
        9999,
    )
}

#[test]
fn test_unknown_word_prefers_long_chunks() {
    let vocab = Vocabulary::new();

    // "cat" alone costs 10/3, every shorter combination costs more
    assert_eq!(segment("cat", &vocab), vec!["cat"]);
    assert_eq!(segment("abcd", &vocab), vec!["ab", "cd"]);
    assert_eq!(segment("hello", &vocab), vec!["hel", "lo"]);
    assert_eq!(segment("abcdefg", &vocab), vec!["abc", "de", "fg"]);
    assert_eq!(segment("tokenizer", &vocab), vec!["tok", "eni", "zer"]);
}

#[test]
fn test_known_fragments_are_preferred() {
    let vocab = vocab_of(&[("c", 1), ("a", 2), ("t", 3), ("ca", 10)]);
    assert_eq!(segment("cat", &vocab), vec!["ca", "t"]);

    let vocab = vocab_of(&[("he", 100), ("ll", 200), ("o", 5)]);
    assert_eq!(segment("hello", &vocab), vec!["he", "ll", "o"]);
}

#[test]
fn test_expensive_fragments_score_as_unknown() {
    // "ab" exists but above the cap, so two cheap letters win
    let vocab = vocab_of(&[("a", 5), ("b", 7), ("ab", 20_000)]);
    assert_eq!(segment("ab", &vocab), vec!["a", "b"]);
}

#[test]
fn test_equal_cost_keeps_first_candidate() {
    // "abb"+"a" and "a"+"bba" both cost 10/3 + 1; the length-1 tail is seen first
    let vocab = vocab_of(&[("a", 1)]);
    assert_eq!(segment("abba", &vocab), vec!["abb", "a"]);

    let vocab = vocab_of(&[("b", 1)]);
    assert_eq!(segment("baab", &vocab), vec!["baa", "b"]);
}

#[test]
fn test_non_alphabetic_runs_pass_through() {
    let vocab = Vocabulary::new();
    assert_eq!(segment("ab-cd", &vocab), vec!["ab", "-", "cd"]);
    assert_eq!(segment("42", &vocab), vec!["42"]);
    assert_eq!(segment("don't", &vocab), vec!["don", "'", "t"]);
}

#[test]
fn test_empty_word() {
    let vocab = Vocabulary::new();
    assert!(segment("", &vocab).is_empty());
}

#[test]
fn test_segment_does_not_mutate_vocab() {
    let vocab = vocab_of(&[("a", 1)]);
    let before = vocab.entries().clone();
    let _ = segment("abracadabra", &vocab);
    assert_eq!(vocab.entries(), &before);
}

proptest! {
    #[test]
    fn prop_lowercase_words_reconstruct(word in "[a-z]{1,40}") {
        let vocab = vocab_of(&[("a", 1), ("th", 2), ("ing", 3), ("e", 4)]);
        let fragments = segment(&word, &vocab);

        prop_assert_eq!(fragments.concat(), word.clone());
        for fragment in &fragments {
            prop_assert!((1..=MAX_CHUNK_LEN).contains(&fragment.len()));
        }
    }

    #[test]
    fn prop_any_text_reconstructs(word in "\\PC{0,30}") {
        let vocab = Vocabulary::new();
        let fragments = segment(&word, &vocab);
        prop_assert_eq!(fragments.concat(), word.clone());
    }
}
