//! Count the strings a long-pressed key could have produced.
//!
//! At most one key was held too long, so the typed word is either the
//! original or the original with one run of identical characters stretched.
//! Each run of length `k > 1` could have started as any length `1..k`,
//! giving `k - 1` alternatives on top of the word itself.

/// Split `word` into maximal runs of identical characters.
pub fn char_runs(word: &str) -> Vec<(char, usize)> {
    let mut runs: Vec<(char, usize)> = Vec::new();
    for ch in word.chars() {
        match runs.last_mut() {
            Some((last, len)) if *last == ch => *len += 1,
            _ => runs.push((ch, 1)),
        }
    }
    runs
}

/// Number of possible original strings, `1 + sum(run_len - 1)`.
///
/// Always at least 1. Equal to 1 exactly when no run is longer than one.
pub fn possible_string_count(word: &str) -> usize {
    1 + char_runs(word)
        .iter()
        .map(|&(_, len)| len - 1)
        .sum::<usize>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_runs() {
        assert_eq!(possible_string_count("abbcccc"), 5);
        assert_eq!(possible_string_count("abcd"), 1);
        assert_eq!(possible_string_count("aaaa"), 4);
    }

    #[test]
    fn single_and_empty_words_have_one_origin() {
        assert_eq!(possible_string_count("a"), 1);
        assert_eq!(possible_string_count(""), 1);
    }

    #[test]
    fn runs_are_maximal_and_ordered() {
        assert_eq!(char_runs("abbcccc"), vec![('a', 1), ('b', 2), ('c', 4)]);
        assert_eq!(char_runs("aabaa"), vec![('a', 2), ('b', 1), ('a', 2)]);
        assert!(char_runs("").is_empty());
    }

    #[test]
    fn counts_multibyte_characters_once() {
        assert_eq!(possible_string_count("ééé"), 3);
    }
}
