use super::runs::{Run, split_runs};
use super::{KNOWN_CHUNK_WEIGHT, MAX_CHUNK_LEN, UNKNOWN_CHUNK_WEIGHT};
use crate::vocab::Vocabulary;

/// Best way found so far to reach a position in an alphabetic run
#[derive(Debug, Clone, Copy)]
struct Step {
    /// Total cost from position 0
    cost: f64,
    /// Length of the last chunk on the best path
    len: usize,
}

/// Split a word into fragments, reading chunk costs from `vocab`
///
/// Alphabetic runs are cut into 1-3 letter chunks along the cheapest path;
/// other runs come back as a single fragment each. The fragments always
/// concatenate back to `word`.
pub fn segment<'a>(word: &'a str, vocab: &Vocabulary) -> Vec<&'a str> {
    let mut fragments = Vec::new();

    for run in split_runs(word) {
        match run {
            Run::Other(text) => fragments.push(text),
            Run::Alphabetic(text) => fragments.extend(split_alphabetic(text, vocab)),
        }
    }

    fragments
}

/// Cheapest partition of an alphabetic run
///
/// Shortest path over positions `0..=n` where each edge is a chunk of
/// length 1..=MAX_CHUNK_LEN. Within one end position shorter chunks are
/// tried first and only a strictly lower total replaces the current best.
fn split_alphabetic<'a>(part: &'a str, vocab: &Vocabulary) -> Vec<&'a str> {
    let n = part.len();
    if n == 0 {
        return vec![];
    }

    let mut best: Vec<Option<Step>> = vec![None; n + 1];
    best[0] = Some(Step { cost: 0.0, len: 0 });

    for end in 1..=n {
        let mut chosen: Option<Step> = None;

        for len in 1..=MAX_CHUNK_LEN.min(end) {
            let start = end - len;
            let Some(prev) = best[start] else {
                continue;
            };

            let total = prev.cost + chunk_cost(&part[start..end], vocab);
            if chosen.map_or(true, |c| total < c.cost) {
                chosen = Some(Step { cost: total, len });
            }
        }

        best[end] = chosen;
    }

    if best[n].is_none() {
        debug_assert!(false, "no segmentation path for {part:?}");
        tracing::error!(part, "segmentation exhausted, run dropped");
        return vec![];
    }

    // Walk the back-pointers from the end
    let mut chunks = Vec::new();
    let mut end = n;
    while end > 0 {
        let Some(step) = best[end] else {
            break;
        };
        chunks.push(&part[end - step.len..end]);
        end -= step.len;
    }
    chunks.reverse();
    chunks
}

/// Incremental cost of using `chunk` as one fragment
fn chunk_cost(chunk: &str, vocab: &Vocabulary) -> f64 {
    let weight = if vocab.is_known_and_cheap(chunk) {
        KNOWN_CHUNK_WEIGHT
    } else {
        UNKNOWN_CHUNK_WEIGHT
    };
    weight / chunk.len() as f64
}
