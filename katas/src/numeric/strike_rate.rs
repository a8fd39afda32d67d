/// Runs per hundred balls, rounded to two decimals.
///
/// `0.0` when no balls were faced.
pub fn strike_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        return 0.0;
    }
    let rate = f64::from(runs) / f64::from(balls) * 100.0;
    (rate * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(strike_rate(45, 30), 150.0);
        assert_eq!(strike_rate(100, 60), 166.67);
        assert_eq!(strike_rate(0, 10), 0.0);
        assert_eq!(strike_rate(75, 50), 150.0);
    }

    #[test]
    fn no_balls_is_zero() {
        assert_eq!(strike_rate(12, 0), 0.0);
    }
}
