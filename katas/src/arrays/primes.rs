/// Trial division by 2 and odd divisors up to the square root.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor: i64 = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Keep the primes of `nums`, in input order.
pub fn filter_primes(nums: &[i64]) -> Vec<i64> {
    nums.iter().copied().filter(|&n| is_prime(n)).collect()
}
