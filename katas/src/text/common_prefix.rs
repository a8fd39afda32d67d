/// Longest prefix shared by every word, compared character by character.
///
/// An empty slice has no common prefix.
pub fn longest_common_prefix(words: &[&str]) -> String {
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };

    let mut prefix_len = first.len();
    for word in rest {
        prefix_len = first
            .char_indices()
            .zip(word.chars())
            .take_while(|((_, left), right)| left == right)
            .map(|((index, ch), _)| index + ch.len_utf8())
            .last()
            .unwrap_or(0)
            .min(prefix_len);
    }
    first[..prefix_len].to_string()
}
