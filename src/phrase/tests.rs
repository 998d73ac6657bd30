use super::*;

#[test]
fn test_aggregate_mean() {
    assert_eq!(aggregate(&[150_001, 150_002]), 150_001);
    assert_eq!(aggregate(&[13, 6, 6]), 8);
    assert_eq!(aggregate(&[42]), 42);
}

#[test]
fn test_aggregate_empty() {
    assert_eq!(aggregate(&[]), 0);
}

#[test]
fn test_normalize() {
    assert_eq!(normalize("  The Cat SAT!  "), "the cat sat!");
    assert_eq!(normalize("\tok\n"), "ok");
}

#[test]
fn test_extract_words() {
    assert_eq!(
        extract_words("the cat sat on the mat!"),
        vec!["the", "cat", "sat", "on", "the", "mat"]
    );
    assert_eq!(
        extract_words("hello, world! 42 times"),
        vec!["hello", "world", "times"]
    );
    assert_eq!(extract_words("don't"), vec!["don", "t"]);
}

#[test]
fn test_extract_words_none() {
    assert!(extract_words("").is_empty());
    assert!(extract_words("123 -- !!").is_empty());
}

#[test]
fn test_extract_words_skips_non_ascii_letters() {
    assert_eq!(extract_words("café au lait"), vec!["caf", "au", "lait"]);
}
