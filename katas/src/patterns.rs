//! Line-oriented text patterns.
//!
//! Both generators yield lines lazily instead of printing them, so a caller
//! can stream any row count. A non-positive row count produces no lines.

/// Row `r` (1-based) is `r` asterisks.
pub fn asterisk_triangle(rows: i64) -> impl Iterator<Item = String> {
    (1..=rows).map(|row| "*".repeat(row as usize))
}

/// Row `r` counts up from `r` for `r` digits, then mirrors back down.
///
/// Digits wrap modulo 10, so row 5 is `567898765` and row 7 is
/// `7890123210987`.
pub fn palindromic_triangle(rows: i64) -> impl Iterator<Item = String> {
    (1..=rows).map(palindromic_row)
}

fn palindromic_row(row: i64) -> String {
    let ascending = (0..row).map(|offset| wrapped_digit(row, offset));
    let descending = (0..row - 1).rev().map(|offset| wrapped_digit(row, offset));
    ascending.chain(descending).collect()
}

/// Last digit of `row + offset`, for non-negative operands of any size.
fn wrapped_digit(row: i64, offset: i64) -> char {
    let digit = ((row % 10) + (offset % 10)) % 10;
    char::from(b'0' + digit as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asterisk_rows_grow_by_one() {
        assert_eq!(
            asterisk_triangle(3).collect::<Vec<_>>(),
            vec!["*", "**", "***"]
        );
        assert_eq!(asterisk_triangle(5).last().as_deref(), Some("*****"));
    }

    #[test]
    fn palindromic_rows_mirror_around_peak() {
        assert_eq!(
            palindromic_triangle(5).collect::<Vec<_>>(),
            vec!["1", "232", "34543", "4567654", "567898765"]
        );
        assert_eq!(
            palindromic_triangle(7).last().as_deref(),
            Some("7890123210987")
        );
    }

    #[test]
    fn every_palindromic_row_reads_the_same_backwards() {
        for line in palindromic_triangle(12) {
            let reversed: String = line.chars().rev().collect();
            assert_eq!(line, reversed);
        }
    }

    #[test]
    fn huge_row_counts_stream_leading_rows() {
        let asterisks: Vec<String> = asterisk_triangle(i64::MAX).take(3).collect();
        assert_eq!(asterisks, vec!["*", "**", "***"]);

        let digits: Vec<String> = palindromic_triangle(i64::MAX).take(3).collect();
        assert_eq!(digits, vec!["1", "232", "34543"]);
    }

    #[test]
    fn digits_wrap_without_overflow_near_the_top_row() {
        // i64::MAX ends in 7.
        assert_eq!(wrapped_digit(i64::MAX, 0), '7');
        assert_eq!(wrapped_digit(i64::MAX, 3), '0');
        assert_eq!(wrapped_digit(i64::MAX, i64::MAX - 1), '3');
    }

    #[test]
    fn non_positive_rows_are_empty() {
        assert_eq!(asterisk_triangle(0).count(), 0);
        assert_eq!(asterisk_triangle(-4).count(), 0);
        assert_eq!(palindromic_triangle(0).count(), 0);
        assert_eq!(palindromic_triangle(-1).count(), 0);
    }
}
