//! Four ways to ask whether `n` is a power of two.
//!
//! All variants agree on every `i32`: true iff `n > 0` and exactly one bit is
//! set. Zero and negatives are never powers of two.

/// Largest power of two representable in `i32`.
const MAX_POWER: i32 = 1 << 30;

/// `n & (n - 1)` clears the lowest set bit; a power of two has only one.
pub fn is_power_of_two(n: i32) -> bool {
    n > 0 && n & (n - 1) == 0
}

/// Halve while even; a power of two ends at exactly one.
pub fn is_power_of_two_division(n: i32) -> bool {
    if n <= 0 {
        return false;
    }
    let mut rest = n;
    while rest % 2 == 0 {
        rest /= 2;
    }
    rest == 1
}

/// `log2(n)` is integral. Exact for every `i32`, which fits an `f64` mantissa.
pub fn is_power_of_two_log(n: i32) -> bool {
    if n <= 0 {
        return false;
    }
    f64::from(n).log2().fract() == 0.0
}

/// Every positive power of two in range divides `2^30`, and nothing else does.
pub fn is_power_of_two_divides_max(n: i32) -> bool {
    n > 0 && MAX_POWER % n == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [(&str, fn(i32) -> bool); 4] = [
        ("bitwise", is_power_of_two),
        ("division", is_power_of_two_division),
        ("log", is_power_of_two_log),
        ("divides_max", is_power_of_two_divides_max),
    ];

    #[test]
    fn sample_inputs() {
        let cases = [
            (1, true),
            (16, true),
            (3, false),
            (4, true),
            (5, false),
            (8, true),
            (0, false),
            (-1, false),
            (1024, true),
            (1_073_741_824, true),
        ];
        for (name, check) in VARIANTS {
            for (n, expected) in cases {
                assert_eq!(check(n), expected, "{name}({n})");
            }
        }
    }

    #[test]
    fn boundaries_are_false() {
        for (name, check) in VARIANTS {
            assert!(!check(0), "{name}(0)");
            assert!(!check(i32::MIN), "{name}(i32::MIN)");
            assert!(!check(i32::MAX), "{name}(i32::MAX)");
        }
    }
}
