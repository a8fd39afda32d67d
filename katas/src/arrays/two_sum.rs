//! Index-pair lookup: two positions whose values sum to a target.

use std::collections::HashMap;

/// Single pass with a value -> index map.
///
/// Returns `(i, j)` with `i < j` for the smallest `j` that completes a pair.
/// A repeated value remembers its latest index. `None` when no pair exists.
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (index, &value) in nums.iter().enumerate() {
        if let Some(complement) = target.checked_sub(value)
            && let Some(&earlier) = seen.get(&complement)
        {
            return Some((earlier, index));
        }
        seen.insert(value, index);
    }
    None
}

/// Nested scan returning the lexicographically first `(i, j)`.
pub fn two_sum_brute_force(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    for (i, &left) in nums.iter().enumerate() {
        for (offset, &right) in nums[i + 1..].iter().enumerate() {
            if left.checked_add(right) == Some(target) {
                return Some((i, i + 1 + offset));
            }
        }
    }
    None
}
