mod error;
mod table;


pub use error::VocabError;
pub use table::Vocabulary;

/// Numeric identifier for a fragment, word or phrase
pub type TokenId = u64;

/// Highest fragment id that is still treated as known and reusable
pub const MAX_ALLOWED_ID: TokenId = 9999;

/// Counter start when the vocabulary is empty
pub const DEFAULT_COUNTER_FLOOR: TokenId = 150_000;
