//! Name normalizer - maps a company name to its canonical comparison key
//!
//! # Pipeline
//!
//! `name → lowercase → strip URL indicators → mask punctuation → tokenize → drop removal words → join`
//!
//! The URL pass must run before the punctuation pass: masking first would
//! turn `acme.com` into `acme com` and the `com` token would survive.
//!
//! # Guarantees
//!
//! - **Idempotent**: `normalize(normalize(x)) == normalize(x)`
//! - **Deterministic**: output depends only on the name and the removal words
//! - **Total**: never panics; punctuation-only input normalizes to `""`

use unicode_normalization::char::is_combining_mark;

use crate::removal_words::RemovalWords;

/// Literal substrings deleted by the URL pass, tried in this order
const URL_INDICATORS: [&str; 4] = ["www.", ".com", ".org", ".net"];

// ── Public API ─────────────────────────────────────────────

/// Normalize a company name to its canonical key
///
/// A name made only of punctuation or removal words yields the empty key,
/// and all such names compare equal.
pub fn normalize(name: &str, removal_words: &RemovalWords) -> String {
    let lowered = name.to_lowercase();
    let stripped = strip_url_indicators(&lowered);
    let masked = mask_punctuation(&stripped);

    masked
        .split_whitespace()
        .filter(|token| !removal_words.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Passes ─────────────────────────────────────────────────

/// Delete every `www.` and every `.com` / `.org` / `.net`
///
/// Single left-to-right scan; text joined by a deletion is not rescanned,
/// so `w.comww.` becomes `www.`.
pub fn strip_url_indicators(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        match URL_INDICATORS.iter().find(|pat| rest.starts_with(*pat)) {
            Some(pat) => rest = &rest[pat.len()..],
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

/// Replace each character that is neither a word character nor whitespace
/// with a single space
pub fn mask_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| {
            if is_word_char(c) || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Letters, digits and underscore
///
/// Combining marks are not word characters even where Unicode counts them
/// as alphabetic, so `हिंदी` splits at its vowel signs.
fn is_word_char(c: char) -> bool {
    (c.is_alphanumeric() && !is_combining_mark(c)) || c == '_'
}
