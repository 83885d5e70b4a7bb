use unicode_normalization::UnicodeNormalization;

/// Canonical form used for case-insensitive matching (NFC, then lowercase)
pub fn fold(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Whether `query` occurs in `haystack`, ignoring case and Unicode composition
///
/// An empty query matches everything.
pub fn matches(haystack: &str, query: &str) -> bool {
    fold(haystack).contains(&fold(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_lowercases() {
        assert_eq!(fold("Håfa Adai"), "håfa adai");
    }

    #[test]
    fn test_decomposed_matches_composed() {
        // "a" + combining ring above
        assert!(matches("Håfa Adai", "ha\u{30A}fa"));
        assert!(matches("ha\u{30A}fa adai", "HÅFA"));
    }

    #[test]
    fn test_empty_query_matches() {
        assert!(matches("anything", ""));
        assert!(matches("", ""));
    }

    #[test]
    fn test_no_match() {
        assert!(!matches("Hafa tatatmanu hao?", "håfa"));
    }
}
