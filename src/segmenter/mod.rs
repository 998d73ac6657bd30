mod runs;
mod splitter;

#[cfg(test)]
mod tests;

pub use runs::{Run, is_alphabetic, split_runs};
pub use splitter::segment;

/// Longest chunk the splitter will consider
pub const MAX_CHUNK_LEN: usize = 3;

/// Cost numerator for a chunk that is already known and cheap
pub const KNOWN_CHUNK_WEIGHT: f64 = 1.0;

/// Cost numerator for a chunk that would need a fresh id
pub const UNKNOWN_CHUNK_WEIGHT: f64 = 10.0;
