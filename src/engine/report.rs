use crate::resolver::WordResolution;
use crate::vocab::TokenId;
use serde::Serialize;

/// Outcome for one word occurrence in a phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordReport {
    pub word: String,
    pub token_id: TokenId,
    /// Answered from the word record without touching the vocabulary
    pub cached: bool,
    /// Fragment breakdown, present only for freshly resolved words
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<WordResolution>,
}

/// Outcome of processing one phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseReport {
    /// Normalized phrase text, also the phrase record key
    pub text: String,
    pub words: Vec<WordReport>,
    pub token_sequence: Vec<TokenId>,
    pub token_id: TokenId,
    /// Characters in `text`, delimiters included
    pub char_count: usize,
    /// Fragment ids minted while processing this phrase
    pub minted: u64,
}

impl PhraseReport {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}
