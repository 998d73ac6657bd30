use super::TokenId;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VocabError {
    #[error("Token id counter exhausted at {counter}, cannot mint an id for {fragment:?}")]
    CounterExhausted { fragment: String, counter: TokenId },
}
