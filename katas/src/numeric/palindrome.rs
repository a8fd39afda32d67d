/// Whether the decimal digits of `x` read the same in both directions.
///
/// Only the lower half of the digits is reversed, so nothing overflows.
/// Negatives are never palindromes, and neither is a non-zero multiple of
/// ten (no number starts with `0`).
pub fn is_palindrome_number(x: i64) -> bool {
    if x < 0 || (x % 10 == 0 && x != 0) {
        return false;
    }
    if x < 10 {
        return true;
    }

    let mut front = x;
    let mut reversed = 0;
    while front > reversed {
        reversed = reversed * 10 + front % 10;
        front /= 10;
    }
    front == reversed || front == reversed / 10
}
