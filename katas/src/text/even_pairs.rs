/// Count adjacent pairs of a lowercase ASCII letter followed by an even digit.
pub fn count_even_digit_pairs(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(2)
        .filter(|pair| {
            pair[0].is_ascii_lowercase()
                && pair[1]
                    .to_digit(10)
                    .is_some_and(|digit| digit % 2 == 0)
        })
        .count()
}
