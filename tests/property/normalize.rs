//! Normalization invariants.

use proptest::prelude::*;
use sift::normalize;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Text drawn from Turkish and ASCII letters, digits and punctuation.
fn turkish_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-ZçÇğĞıİöÖşŞüÜ0-9 .,'!?-]{0,24}").unwrap()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn normalize_is_idempotent(text in turkish_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_turkish_text_is_ascii(text in turkish_text()) {
        let key = normalize(&text);
        prop_assert!(key.is_ascii(), "{:?} → {:?}", text, key);
        prop_assert!(!key.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn normalize_keeps_char_count(text in turkish_text()) {
        prop_assert_eq!(normalize(&text).chars().count(), text.chars().count());
    }

    #[test]
    fn prefix_of_text_normalizes_to_prefix_of_key(text in turkish_text(), cut in 0usize..24) {
        let prefix: String = text.chars().take(cut).collect();
        prop_assert!(normalize(&text).starts_with(&normalize(&prefix)));
    }
}
