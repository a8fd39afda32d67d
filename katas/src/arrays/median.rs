/// Median of a sequence. `None` for empty input.
///
/// Odd lengths return the central sorted element, even lengths the mean of
/// the two central ones. The input is not reordered.
pub fn median(nums: &[i64]) -> Option<f64> {
    if nums.is_empty() {
        return None;
    }

    let mut sorted = nums.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        return Some(sorted[mid] as f64);
    }
    Some((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_length_returns_middle() {
        assert_eq!(median(&[5, 2, 8, 1, 9]), Some(5.0));
        assert_eq!(median(&[1]), Some(1.0));
        assert_eq!(median(&[10, 20, 30]), Some(20.0));
    }

    #[test]
    fn even_length_averages_central_pair() {
        assert_eq!(median(&[4, 2, 7, 1, 9, 10]), Some(5.5));
        assert_eq!(median(&[3, 3, 3, 3]), Some(3.0));
    }

    #[test]
    fn empty_is_none() {
        assert_eq!(median(&[]), None);
    }
}
