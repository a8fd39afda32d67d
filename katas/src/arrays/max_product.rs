/// Largest product of two values at distinct positions.
///
/// Tracks the two largest and two smallest values in one pass, since two
/// large negatives can beat two large positives. `None` for fewer than two
/// elements. Products saturate at the `i64` bounds.
pub fn max_product(nums: &[i64]) -> Option<i64> {
    if nums.len() < 2 {
        return None;
    }

    let (mut max1, mut max2) = (i64::MIN, i64::MIN);
    let (mut min1, mut min2) = (i64::MAX, i64::MAX);
    for &value in nums {
        if value > max1 {
            max2 = max1;
            max1 = value;
        } else if value > max2 {
            max2 = value;
        }

        if value < min1 {
            min2 = min1;
            min1 = value;
        } else if value < min2 {
            min2 = value;
        }
    }

    Some(max1.saturating_mul(max2).max(min1.saturating_mul(min2)))
}
