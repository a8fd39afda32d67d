/// Find the value missing from `1..=nums.len() + 1`.
///
/// Expects every other value of the range exactly once, in any order. The
/// empty slice is the range `1..=1` with `1` missing.
pub fn find_missing_number(nums: &[i64]) -> i64 {
    let n = nums.len() as i128 + 1;
    let expected = n * (n + 1) / 2;
    let actual: i128 = nums.iter().map(|&value| i128::from(value)).sum();
    (expected - actual) as i64
}
