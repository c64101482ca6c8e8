/// True when `text` has no visible characters.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Split a comma-separated list into trimmed, lowercased, non-empty terms.
pub fn split_terms(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
