use std::collections::HashMap;

/// Occurrences of every character, in order of first appearance.
///
/// Case-sensitive: `'H'` and `'h'` are counted separately.
pub fn char_frequency(text: &str) -> Vec<(char, usize)> {
    let mut slots: HashMap<char, usize> = HashMap::new();
    let mut counts: Vec<(char, usize)> = Vec::new();
    for ch in text.chars() {
        match slots.get(&ch) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(ch, counts.len());
                counts.push((ch, 1));
            }
        }
    }
    counts
}
