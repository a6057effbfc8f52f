// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.
//!
//! `normalize` is the one place a search key is derived from human text. The
//! write path (see `build`) and the read path (see `query`) both call it, so
//! a stored title and a typed query can only ever disagree if the text does.

use unicode_normalization::UnicodeNormalization;

/// Letters folded to a base Latin letter after lowercasing.
const FOLDS: [(char, char); 6] = [
    ('ı', 'i'),
    ('ü', 'u'),
    ('ö', 'o'),
    ('ş', 's'),
    ('ç', 'c'),
    ('ğ', 'g'),
];

/// Normalize a string into a search key.
///
/// - "İstanbul" → "istanbul"
/// - "ÜÇGEN" → "ucgen"
/// - "Şşçç" → "sscc"
///
/// # Algorithm
///
/// 1. NFC compose (so a decomposed "I" + U+0307 becomes "İ")
/// 2. Fold "İ" and "I" to "i" (before lowercasing: a plain lowercase turns
///    "İ" into "i" + U+0307)
/// 3. Lowercase
/// 4. Fold "ı", "ü", "ö", "ş", "ç", "ğ" to their base letters
/// 5. NFC compose again, repeating from 1 until nothing changes
///
/// Nothing else is removed or collapsed: punctuation, digits and whitespace
/// survive as typed. The result is idempotent.
pub fn normalize(value: &str) -> String {
    let mut key = fold_pass(value);
    // A folded letter can compose with a stray mark that followed it
    // ("ü" + U+0308 → "u" + U+0308 → "ü"). Every such pass is shorter.
    loop {
        let next = fold_pass(&key);
        if next == key {
            return key;
        }
        key = next;
    }
}

fn fold_pass(value: &str) -> String {
    let composed: String = value
        .nfc()
        .map(|c| match c {
            'İ' | 'I' => 'i',
            other => other,
        })
        .collect();

    composed
        .to_lowercase()
        .chars()
        .map(fold_letter)
        .nfc()
        .collect()
}

/// Normalize an optional field, failing soft to an empty key.
///
/// Records coming from the document store may lack a username or title; a
/// missing field must not stop indexing the rest of the record.
pub fn normalize_field(value: Option<&str>) -> String {
    value.map(normalize).unwrap_or_default()
}

#[inline]
fn fold_letter(c: char) -> char {
    FOLDS
        .iter()
        .find_map(|&(from, to)| (from == c).then_some(to))
        .unwrap_or(c)
}
