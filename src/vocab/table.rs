use super::{DEFAULT_COUNTER_FLOOR, MAX_ALLOWED_ID, TokenId, VocabError};
use indexmap::IndexMap;

/// Mutable fragment table with a monotonically increasing id counter
///
/// Entries keep insertion order so that a persisted table round-trips
/// byte-for-byte. Ids above `max_allowed_id` stay in the table but are
/// treated as absent when scoring and reusing fragments.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Fragment text -> id
    entries: IndexMap<String, TokenId>,
    /// Highest id ever minted (or seeded from the loaded table)
    max_token_id: TokenId,
    /// Reuse threshold
    max_allowed_id: TokenId,
}

impl Vocabulary {
    /// Create an empty vocabulary with the default floor and cap
    pub fn new() -> Self {
        Self::from_entries(IndexMap::new(), DEFAULT_COUNTER_FLOOR, MAX_ALLOWED_ID)
    }

    /// Seed a vocabulary from previously persisted entries
    ///
    /// The counter starts at the largest existing id. `counter_floor` is only
    /// used when `entries` is empty, so a table holding only small ids keeps
    /// minting right above them.
    pub fn from_entries(
        entries: IndexMap<String, TokenId>,
        counter_floor: TokenId,
        max_allowed_id: TokenId,
    ) -> Self {
        let max_token_id = entries.values().copied().max().unwrap_or(counter_floor);

        Self {
            entries,
            max_token_id,
            max_allowed_id,
        }
    }

    /// Raw lookup, ignoring the reuse cap
    pub fn lookup(&self, fragment: &str) -> Option<TokenId> {
        self.entries.get(fragment).copied()
    }

    /// Id of `fragment` if it exists and is within the reuse cap
    pub fn cheap_id(&self, fragment: &str) -> Option<TokenId> {
        self.lookup(fragment).filter(|&id| id <= self.max_allowed_id)
    }

    pub fn is_known_and_cheap(&self, fragment: &str) -> bool {
        self.cheap_id(fragment).is_some()
    }

    /// Assign the next counter value to `fragment` and return it
    ///
    /// An existing entry (necessarily above the cap, otherwise it would have
    /// been reused) is overwritten in place. Fails without touching the table
    /// once the counter has reached `TokenId::MAX`.
    pub fn mint(&mut self, fragment: &str) -> Result<TokenId, VocabError> {
        let id = self
            .max_token_id
            .checked_add(1)
            .ok_or_else(|| VocabError::CounterExhausted {
                fragment: fragment.to_string(),
                counter: self.max_token_id,
            })?;
        self.max_token_id = id;

        match self.entries.get_mut(fragment) {
            Some(slot) => *slot = id,
            None => {
                self.entries.insert(fragment.to_string(), id);
            }
        }

        tracing::debug!(fragment, id, "minted fragment id");
        Ok(id)
    }

    /// Current value of the running counter
    pub fn max_token_id(&self) -> TokenId {
        self.max_token_id
    }

    pub fn max_allowed_id(&self) -> TokenId {
        self.max_allowed_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &IndexMap<String, TokenId> {
        &self.entries
    }

    pub fn into_entries(self) -> IndexMap<String, TokenId> {
        self.entries
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}
