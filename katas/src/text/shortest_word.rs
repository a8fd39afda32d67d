use std::sync::LazyLock;

use regex::Regex;

static PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("valid punctuation regex"));

/// First word of minimal length, ignoring punctuation.
///
/// Characters other than ASCII word characters and whitespace are removed,
/// then the text is split on single spaces. Ties keep the earlier word.
/// Returns the empty string for empty input.
pub fn shortest_word(text: &str) -> String {
    let cleaned = PUNCTUATION_RE.replace_all(text, "");
    let mut words = cleaned.split(' ');
    let Some(first) = words.next() else {
        return String::new();
    };
    words
        .fold(first, |shortest, word| {
            if word.chars().count() < shortest.chars().count() {
                word
            } else {
                shortest
            }
        })
        .to_string()
}
