//! Single-run orchestration over the vocabulary and the two record maps
//!
//! A [`TokenEngine`] owns all mutable state for one run. Words are resolved
//! strictly in input order against the live vocabulary, so the same words
//! submitted in a different order may receive different ids.

mod report;


pub use report::{PhraseReport, WordReport};

use crate::config::EngineConfig;
use crate::phrase::{aggregate, extract_words, normalize};
use crate::resolver::resolve_word;
use crate::store::{IdMap, Stores};
use crate::vocab::{TokenId, VocabError, Vocabulary};

pub struct TokenEngine {
    vocab: Vocabulary,
    /// Word -> token id, never recomputed once present
    words: IdMap,
    /// Normalized phrase -> token id, overwritten on resubmission
    phrases: IdMap,
}

impl TokenEngine {
    /// Start from empty maps
    pub fn new(config: EngineConfig) -> Self {
        Self::from_stores(Stores::default(), config)
    }

    /// Start from previously loaded maps
    pub fn from_stores(stores: Stores, config: EngineConfig) -> Self {
        let vocab =
            Vocabulary::from_entries(stores.vocab, config.counter_floor, config.max_allowed_id);

        Self {
            vocab,
            words: stores.words,
            phrases: stores.phrases,
        }
    }

    /// Process one free-form phrase end to end
    ///
    /// The phrase record is set even when no words are found (id 0). On
    /// error the phrase record is left untouched.
    pub fn process(&mut self, raw: &str) -> Result<PhraseReport, VocabError> {
        let text = normalize(raw);
        let counter_before = self.vocab.max_token_id();

        let words: Vec<WordReport> = extract_words(&text)
            .into_iter()
            .map(|word| self.word_token(word))
            .collect::<Result<_, _>>()?;

        let token_sequence: Vec<TokenId> = words.iter().map(|w| w.token_id).collect();
        let token_id = aggregate(&token_sequence);
        self.phrases.insert(text.clone(), token_id);

        let minted = self.vocab.max_token_id() - counter_before;
        tracing::info!(
            words = words.len(),
            token_id,
            minted,
            vocab_size = self.vocab.len(),
            "processed phrase"
        );

        Ok(PhraseReport {
            char_count: text.chars().count(),
            text,
            words,
            token_sequence,
            token_id,
            minted,
        })
    }

    /// Token id for a single word, resolving and caching it on first sight
    pub fn word_token(&mut self, word: &str) -> Result<WordReport, VocabError> {
        if let Some(&token_id) = self.words.get(word) {
            return Ok(WordReport {
                word: word.to_string(),
                token_id,
                cached: true,
                resolution: None,
            });
        }

        let resolution = resolve_word(word, &mut self.vocab)?;
        self.words.insert(word.to_string(), resolution.token_id);

        Ok(WordReport {
            word: word.to_string(),
            token_id: resolution.token_id,
            cached: false,
            resolution: Some(resolution),
        })
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn words(&self) -> &IdMap {
        &self.words
    }

    pub fn phrases(&self) -> &IdMap {
        &self.phrases
    }

    /// Hand the (possibly mutated) maps back for saving
    pub fn into_stores(self) -> Stores {
        Stores {
            vocab: self.vocab.into_entries(),
            words: self.words,
            phrases: self.phrases,
        }
    }
}

impl Default for TokenEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
