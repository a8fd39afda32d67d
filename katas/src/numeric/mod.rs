//! Exercises over single numbers.

pub mod fibonacci;
pub mod palindrome;
pub mod power_of_two;
pub mod roman;
pub mod strike_rate;

pub use fibonacci::{fibonacci_sequence, is_fibonacci, is_fibonacci_closed_form};
pub use palindrome::is_palindrome_number;
pub use power_of_two::{
    is_power_of_two, is_power_of_two_divides_max, is_power_of_two_division, is_power_of_two_log,
};
pub use roman::{int_to_roman, roman_to_int};
pub use strike_rate::strike_rate;
