// Public API exports
pub mod config;
pub mod engine;
pub mod phrase;
pub mod resolver;
pub mod segmenter;
pub mod store;
pub mod vocab;

// Re-export main types for convenience
pub use config::{EngineConfig, StorePaths};
pub use engine::{PhraseReport, TokenEngine, WordReport};
pub use vocab::{DEFAULT_COUNTER_FLOOR, MAX_ALLOWED_ID, TokenId, VocabError, Vocabulary};

pub use segmenter::{Run, segment, split_runs};

pub use resolver::{DivisionTier, WordResolution, reduce_sum, resolve_word};

pub use phrase::{aggregate, extract_words, normalize};

pub use store::{IdMap, LoadWarning, StoreError, Stores, load_stores, save_stores};
