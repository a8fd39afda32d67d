/// First `count` Fibonacci numbers, starting `0, 1`.
///
/// Stops early once the next term would overflow `u64` (after 94 terms).
pub fn fibonacci_sequence(count: usize) -> Vec<u64> {
    let mut sequence = Vec::with_capacity(count.min(94));
    let (mut current, mut next) = (0u64, 1u64);
    for _ in 0..count {
        sequence.push(current);
        let Some(following) = current.checked_add(next) else {
            if sequence.len() < count {
                sequence.push(next);
            }
            break;
        };
        current = next;
        next = following;
    }
    sequence
}

/// Walk the sequence until it reaches or passes `n`.
pub fn is_fibonacci(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let target = n as u64;
    let (mut previous, mut current) = (0u64, 1u64);
    if target <= 1 {
        return true;
    }
    while current < target {
        let next = previous + current;
        previous = current;
        current = next;
    }
    current == target
}

/// `n` is Fibonacci iff `5n^2 + 4` or `5n^2 - 4` is a perfect square.
pub fn is_fibonacci_closed_form(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let wide = n as u128;
    // 5n^2 + 4 only overflows between F(92) and F(93), where nothing is Fibonacci.
    let Some(scaled) = wide
        .checked_mul(wide)
        .and_then(|square| square.checked_mul(5))
        .filter(|scaled| scaled.checked_add(4).is_some())
    else {
        return false;
    };
    is_perfect_square(scaled + 4) || (scaled >= 4 && is_perfect_square(scaled - 4))
}

fn is_perfect_square(value: u128) -> bool {
    let root = value.isqrt();
    root * root == value
}
