//! Turkish-aware folding.

use sift::{normalize, normalize_field, NormalizedKey};

#[test]
fn turkish_capitals_fold_to_ascii_lowercase() {
    assert_eq!(normalize("İstanbul"), "istanbul");
    assert_eq!(normalize("ÜÇGEN"), "ucgen");
    assert_eq!(normalize("Şşçç"), "sscc");
    assert_eq!(normalize("ĞÖÜŞİÇI"), "gousici");
    assert_eq!(normalize("ığüşöç"), "igusoc");
}

#[test]
fn precomposed_and_decomposed_forms_agree() {
    assert_eq!(normalize("I\u{0307}stanbul"), normalize("İstanbul"));
    assert_eq!(normalize("u\u{0308}zu\u{0308}m"), "uzum");
    assert_eq!(normalize("c\u{0327}ay"), "cay");
}

#[test]
fn other_characters_pass_through() {
    assert_eq!(normalize("Rust 2024: Async!"), "rust 2024: async!");
    assert_eq!(normalize("  iki  boşluk "), "  iki  bosluk ");
    assert_eq!(normalize("café"), "café");
    assert_eq!(normalize("東京"), "東京");
    assert_eq!(normalize(""), "");
}

#[test]
fn normalizing_twice_changes_nothing() {
    for text in ["İstanbul", "ÜÇGEN", "Işıklı Çarşı", "mixed ÇaSe 42", "ǖ"] {
        let once = normalize(text);
        assert_eq!(normalize(&once), once, "input {text:?}");
    }
}

#[test]
fn missing_field_becomes_empty_key() {
    assert_eq!(normalize_field(None), "");
    assert_eq!(normalize_field(Some("Çağla")), "cagla");
    assert!(NormalizedKey::from_text("").is_blank());
}
