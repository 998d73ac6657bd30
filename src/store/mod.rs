//! JSON persistence for the vocabulary, word and phrase maps
//!
//! Each map is its own file. A missing or blank file loads as an empty map;
//! a file that fails to parse also loads as empty but is reported back as a
//! [`LoadWarning`] so the run can continue.

mod error;
mod json;


pub use error::StoreError;
pub use json::{load_stores, save_stores};

use crate::vocab::TokenId;
use indexmap::IndexMap;
use std::fmt;
use std::path::PathBuf;

/// Insertion-ordered `text -> id` map, as persisted
pub type IdMap = IndexMap<String, TokenId>;

/// The three maps a run loads before and saves after processing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stores {
    /// Fragment -> id
    pub vocab: IdMap,
    /// Word -> word token id
    pub words: IdMap,
    /// Normalized phrase -> phrase token id
    pub phrases: IdMap,
}

/// A store that could not be parsed and was replaced by an empty map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is corrupted, starting from an empty store ({})",
            self.path.display(),
            self.reason
        )
    }
}
