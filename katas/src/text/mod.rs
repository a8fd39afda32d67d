//! Exercises over strings.

pub mod char_frequency;
pub mod common_prefix;
pub mod even_pairs;
pub mod shortest_word;
pub mod smart_parse;
pub mod typed_string;

pub use char_frequency::char_frequency;
pub use common_prefix::longest_common_prefix;
pub use even_pairs::count_even_digit_pairs;
pub use shortest_word::shortest_word;
pub use smart_parse::{Combined, combine_tokens};
pub use typed_string::{char_runs, possible_string_count};
