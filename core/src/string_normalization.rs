use unidecode::unidecode;

/// ASCII-folded, lowercased, whitespace-collapsed form used for term matching.
pub fn clean_str(input: &str) -> String {
    unidecode(input) // Convert Unicode to ASCII
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Canonical page title as typed by a user: underscores from URLs become
/// spaces and runs of whitespace collapse. Case is preserved since titles are
/// case sensitive past the first letter.
pub fn normalize_title(input: &str) -> String {
    input
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
