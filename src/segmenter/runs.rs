/// A maximal run of a word, split at alphabetic/non-alphabetic boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run<'a> {
    /// Lowercase ASCII letters only; segmented further
    Alphabetic(&'a str),
    /// Anything else; passed through untouched
    Other(&'a str),
}

/// True for a non-empty fragment made only of `a`-`z`
pub fn is_alphabetic(fragment: &str) -> bool {
    !fragment.is_empty() && fragment.bytes().all(|b| b.is_ascii_lowercase())
}

/// Split a word into alternating alphabetic and non-alphabetic runs
pub fn split_runs(word: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (idx, ch) in word.char_indices() {
        let alpha = ch.is_ascii_lowercase();
        match current {
            Some(prev) if prev != alpha => {
                runs.push(make_run(&word[start..idx], prev));
                start = idx;
            }
            _ => {}
        }
        current = Some(alpha);
    }

    if let Some(alpha) = current {
        runs.push(make_run(&word[start..], alpha));
    }

    runs
}

fn make_run(text: &str, alpha: bool) -> Run<'_> {
    if alpha {
        Run::Alphabetic(text)
    } else {
        Run::Other(text)
    }
}
