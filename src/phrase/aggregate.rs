use crate::vocab::TokenId;

/// Phrase id: integer mean of the word ids, or 0 for no words
pub fn aggregate(word_ids: &[TokenId]) -> TokenId {
    if word_ids.is_empty() {
        return 0;
    }

    let total: TokenId = word_ids.iter().sum();
    total / word_ids.len() as TokenId
}
