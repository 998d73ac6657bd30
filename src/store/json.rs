use super::{IdMap, LoadWarning, StoreError, Stores};
use crate::config::StorePaths;
use crate::vocab::TokenId;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Word record value: a bare id, or the older per-word object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WordEntry {
    Id(TokenId),
    Legacy { final_token_id: TokenId },
}

impl WordEntry {
    fn token_id(&self) -> TokenId {
        match self {
            WordEntry::Id(id) => *id,
            WordEntry::Legacy { final_token_id } => *final_token_id,
        }
    }
}

/// Load all three maps
///
/// Only I/O failures other than a missing file are errors. Unparseable
/// content yields an empty map plus a warning.
pub fn load_stores(paths: &StorePaths) -> Result<(Stores, Vec<LoadWarning>), StoreError> {
    let mut warnings = Vec::new();

    let vocab = load_map(&paths.vocab, &mut warnings, parse_id_map)?;
    let words = load_map(&paths.words, &mut warnings, parse_word_map)?;
    let phrases = load_map(&paths.phrases, &mut warnings, parse_id_map)?;

    Ok((
        Stores {
            vocab,
            words,
            phrases,
        },
        warnings,
    ))
}

/// Save all three maps as pretty JSON, vocabulary first
pub fn save_stores(paths: &StorePaths, stores: &Stores) -> Result<(), StoreError> {
    save_map(&paths.vocab, &stores.vocab)?;
    save_map(&paths.words, &stores.words)?;
    save_map(&paths.phrases, &stores.phrases)?;
    Ok(())
}

fn load_map(
    path: &Path,
    warnings: &mut Vec<LoadWarning>,
    parse: fn(&str) -> Result<IdMap, serde_json::Error>,
) -> Result<IdMap, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(IdMap::new()),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            // Not UTF-8
            push_warning(path, e.to_string(), warnings);
            return Ok(IdMap::new());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let content = content.trim();
    if content.is_empty() {
        return Ok(IdMap::new());
    }

    match parse(content) {
        Ok(map) => {
            tracing::debug!(path = %path.display(), entries = map.len(), "loaded store");
            Ok(map)
        }
        Err(e) => {
            push_warning(path, e.to_string(), warnings);
            Ok(IdMap::new())
        }
    }
}

fn push_warning(path: &Path, reason: String, warnings: &mut Vec<LoadWarning>) {
    let warning = LoadWarning {
        path: path.to_path_buf(),
        reason,
    };
    tracing::warn!("{}", warning);
    warnings.push(warning);
}

fn parse_id_map(content: &str) -> Result<IdMap, serde_json::Error> {
    serde_json::from_str(content)
}

fn parse_word_map(content: &str) -> Result<IdMap, serde_json::Error> {
    let entries: IndexMap<String, WordEntry> = serde_json::from_str(content)?;
    Ok(entries
        .into_iter()
        .map(|(word, entry)| (word, entry.token_id()))
        .collect())
}

fn save_map(path: &Path, map: &IdMap) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StoreError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(map).map_err(|source| StoreError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}
