//! Exercises over integer sequences.

pub mod dedup;
pub mod max_product;
pub mod median;
pub mod missing_number;
pub mod primes;
pub mod two_sum;

pub use dedup::remove_duplicates;
pub use max_product::max_product;
pub use median::median;
pub use missing_number::find_missing_number;
pub use primes::{filter_primes, is_prime};
pub use two_sum::{two_sum, two_sum_brute_force};
