mod aggregate;

#[cfg(test)]
mod tests;

pub use aggregate::aggregate;

/// Trim and lowercase raw input; the result is the phrase record key
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Lowercase ASCII letter runs of `text`, in order
///
/// Every other character is a delimiter and dropped.
pub fn extract_words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_ascii_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
