use super::reduce::{DivisionTier, reduce_sum};
use crate::segmenter::{is_alphabetic, segment};
use crate::vocab::{TokenId, VocabError, Vocabulary};
use serde::Serialize;

/// Full breakdown of one word's token id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordResolution {
    pub word: String,
    /// Alphabetic fragments that contributed an id, in order
    pub parts: Vec<String>,
    /// Id of each entry in `parts`
    pub part_ids: Vec<TokenId>,
    pub sum: TokenId,
    pub tier: DivisionTier,
    pub token_id: TokenId,
}

/// Resolve a word to its token id, minting fragment ids as needed
///
/// Fragments are resolved in order against the live vocabulary, so an id
/// minted for an early fragment is already reusable for a later one.
/// Non-alphabetic fragments are skipped. An alphabetic fragment that is not
/// known and cheap is segmented again on its own and each sub-fragment is
/// reused or minted. Only fails when the id counter is exhausted.
pub fn resolve_word(word: &str, vocab: &mut Vocabulary) -> Result<WordResolution, VocabError> {
    let mut parts = Vec::new();
    let mut part_ids = Vec::new();

    for fragment in segment(word, vocab) {
        if !is_alphabetic(fragment) {
            continue;
        }

        if let Some(id) = vocab.cheap_id(fragment) {
            parts.push(fragment.to_string());
            part_ids.push(id);
        } else if fragment.len() > 1 {
            for sub in segment(fragment, vocab) {
                let id = match vocab.cheap_id(sub) {
                    Some(id) => id,
                    None => vocab.mint(sub)?,
                };
                parts.push(sub.to_string());
                part_ids.push(id);
            }
        } else {
            parts.push(fragment.to_string());
            part_ids.push(vocab.mint(fragment)?);
        }
    }

    let sum: TokenId = part_ids.iter().sum();
    let (token_id, tier) = reduce_sum(sum);

    tracing::debug!(word, sum, token_id, %tier, "resolved word");

    Ok(WordResolution {
        word: word.to_string(),
        parts,
        part_ids,
        sum,
        tier,
        token_id,
    })
}
