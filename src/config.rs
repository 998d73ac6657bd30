use crate::vocab::{DEFAULT_COUNTER_FLOOR, MAX_ALLOWED_ID, TokenId};
use std::path::{Path, PathBuf};

/// Vocabulary file name inside a data directory
pub const VOCAB_FILE: &str = "new_mainvocab.json";

/// Word token record file name
pub const WORDS_FILE: &str = "individual_words.json";

/// Phrase token record file name
pub const PHRASES_FILE: &str = "unique_ids.json";

/// Tunables for a token engine run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fragments with an id above this are scored and treated as unknown
    pub max_allowed_id: TokenId,
    /// Counter start when the vocabulary is empty
    pub counter_floor: TokenId,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            max_allowed_id: MAX_ALLOWED_ID,
            counter_floor: DEFAULT_COUNTER_FLOOR,
        }
    }

    /// Set the reuse cap
    pub fn max_allowed_id(mut self, id: TokenId) -> Self {
        self.max_allowed_id = id;
        self
    }

    /// Set the counter floor
    pub fn counter_floor(mut self, floor: TokenId) -> Self {
        self.counter_floor = floor;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Locations of the three persisted maps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub vocab: PathBuf,
    pub words: PathBuf,
    pub phrases: PathBuf,
}

impl StorePaths {
    /// Default file names under `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            vocab: dir.join(VOCAB_FILE),
            words: dir.join(WORDS_FILE),
            phrases: dir.join(PHRASES_FILE),
        }
    }

    pub fn vocab(mut self, path: impl Into<PathBuf>) -> Self {
        self.vocab = path.into();
        self
    }

    pub fn words(mut self, path: impl Into<PathBuf>) -> Self {
        self.words = path.into();
        self
    }

    pub fn phrases(mut self, path: impl Into<PathBuf>) -> Self {
        self.phrases = path.into();
        self
    }
}
