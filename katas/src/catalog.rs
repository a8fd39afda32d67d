//! Registry of every exercise, addressable by id.
//!
//! Inputs and outputs cross this boundary as JSON values so a driver can feed
//! literal cases without knowing each function's signature. Sentinel results
//! (`None`) encode as `null`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::KataError;
use crate::{arrays, inventory, numeric, patterns, text};

/// A literal input and the output it must produce.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub input: Value,
    pub expected: Value,
}

type Solver = fn(&'static str, &Value) -> Result<Value, KataError>;

pub struct Exercise {
    pub id: &'static str,
    pub summary: &'static str,
    solver: Solver,
    samples: fn() -> Vec<Sample>,
}

impl Exercise {
    /// Decode `input`, run the exercise, encode its result.
    pub fn solve(&self, input: &Value) -> Result<Value, KataError> {
        debug!(exercise = self.id, %input, "solving");
        (self.solver)(self.id, input)
    }

    /// Literal cases the exercise is known to satisfy.
    pub fn samples(&self) -> Vec<Sample> {
        (self.samples)()
    }
}

impl std::fmt::Debug for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exercise")
            .field("id", &self.id)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

/// Every registered exercise, sorted by id.
pub fn catalog() -> &'static [Exercise] {
    &CATALOG
}

pub fn find(id: &str) -> Option<&'static Exercise> {
    CATALOG.iter().find(|exercise| exercise.id == id)
}

/// Like [`find`], but an unknown id is an error.
pub fn lookup(id: &str) -> Result<&'static Exercise, KataError> {
    find(id).ok_or_else(|| KataError::UnknownExercise(id.to_string()))
}

/// Structural equality where numbers within `tolerance` are equal.
///
/// Integers compare exactly; only values that need a float are compared
/// with the tolerance.
pub fn values_match(actual: &Value, expected: &Value, tolerance: f64) -> bool {
    match (actual, expected) {
        (Value::Number(left), Value::Number(right)) => {
            if let (Some(left), Some(right)) = (left.as_i64(), right.as_i64()) {
                return left == right;
            }
            if let (Some(left), Some(right)) = (left.as_u64(), right.as_u64()) {
                return left == right;
            }
            match (left.as_f64(), right.as_f64()) {
                (Some(left), Some(right)) => (left - right).abs() <= tolerance,
                _ => false,
            }
        }
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(left, right)| values_match(left, right, tolerance))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, value)| {
                    right
                        .get(key)
                        .is_some_and(|other| values_match(value, other, tolerance))
                })
        }
        _ => actual == expected,
    }
}

fn decode<T: DeserializeOwned>(exercise: &'static str, input: &Value) -> Result<T, KataError> {
    <T as Deserialize>::deserialize(input)
        .map_err(|source| KataError::InvalidInput { exercise, source })
}

fn encode<T: Serialize>(exercise: &'static str, output: T) -> Result<Value, KataError> {
    serde_json::to_value(output).map_err(|source| KataError::Encode { exercise, source })
}

fn sample(input: Value, expected: Value) -> Sample {
    Sample { input, expected }
}

#[derive(Deserialize)]
struct PairSumInput {
    nums: Vec<i64>,
    target: i64,
}

#[derive(Deserialize)]
struct StrikeRateInput {
    runs: u32,
    balls: u32,
}

fn solve_two_sum(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let PairSumInput { nums, target } = decode(id, input)?;
    encode(id, arrays::two_sum(&nums, target))
}

fn solve_two_sum_brute_force(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let PairSumInput { nums, target } = decode(id, input)?;
    encode(id, arrays::two_sum_brute_force(&nums, target))
}

fn two_sum_samples() -> Vec<Sample> {
    vec![
        sample(json!({"nums": [2, 7, 11, 15], "target": 9}), json!([0, 1])),
        sample(json!({"nums": [3, 2, 4], "target": 6}), json!([1, 2])),
        sample(json!({"nums": [3, 3], "target": 6}), json!([0, 1])),
        sample(json!({"nums": [1, 2], "target": 7}), Value::Null),
    ]
}

fn solve_missing_number(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let nums: Vec<i64> = decode(id, input)?;
    encode(id, arrays::find_missing_number(&nums))
}

fn missing_number_samples() -> Vec<Sample> {
    vec![
        sample(json!([1, 2, 3, 5, 6, 7, 8]), json!(4)),
        sample(json!([1, 2, 4, 5, 6]), json!(3)),
        sample(json!([2, 3, 4, 5, 6]), json!(1)),
        sample(json!([1, 2, 3, 4, 5, 6, 7, 8, 9]), json!(10)),
    ]
}

fn solve_max_product(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let nums: Vec<i64> = decode(id, input)?;
    encode(id, arrays::max_product(&nums))
}

fn max_product_samples() -> Vec<Sample> {
    vec![
        sample(json!([2, 3, 5, 6, 7]), json!(42)),
        sample(json!([1, 10, 2, 6, 5, 3]), json!(60)),
        sample(json!([-10, -3, 5, 6, -20]), json!(200)),
        sample(json!([-8, -7, -2]), json!(56)),
        sample(json!([0, -1, 3, 100]), json!(300)),
        sample(json!([5]), Value::Null),
    ]
}

fn solve_median(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let nums: Vec<i64> = decode(id, input)?;
    encode(id, arrays::median(&nums))
}

fn median_samples() -> Vec<Sample> {
    vec![
        sample(json!([5, 2, 8, 1, 9]), json!(5.0)),
        sample(json!([4, 2, 7, 1, 9, 10]), json!(5.5)),
        sample(json!([1]), json!(1.0)),
        sample(json!([3, 3, 3, 3]), json!(3.0)),
        sample(json!([10, 20, 30]), json!(20.0)),
        sample(json!([]), Value::Null),
    ]
}

fn solve_remove_duplicates(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let names: Vec<String> = decode(id, input)?;
    encode(id, arrays::remove_duplicates(&names))
}

fn remove_duplicates_samples() -> Vec<Sample> {
    vec![sample(
        json!(["Zara", "Sadia", "Mahin", "Adnan", "Mahin", "Maisha", "Adnan", "Faiyaz"]),
        json!(["Zara", "Sadia", "Mahin", "Adnan", "Maisha", "Faiyaz"]),
    )]
}

fn solve_filter_primes(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let nums: Vec<i64> = decode(id, input)?;
    encode(id, arrays::filter_primes(&nums))
}

fn filter_primes_samples() -> Vec<Sample> {
    vec![
        sample(json!([2, 3, 4, 5, 6, 7, 8, 9, 10]), json!([2, 3, 5, 7])),
        sample(
            json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13]),
            json!([2, 3, 5, 7, 11, 13]),
        ),
        sample(json!([15, 16, 17, 18, 19, 20]), json!([17, 19])),
        sample(json!([1, 4, 6, 8, 9, 10]), json!([])),
        sample(json!([97, 98, 99, 100, 101]), json!([97, 101])),
    ]
}

fn solve_shortest_word(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let sentence: String = decode(id, input)?;
    encode(id, text::shortest_word(&sentence))
}

fn shortest_word_samples() -> Vec<Sample> {
    vec![
        sample(
            json!("The quick brown fox jumps over the lazy dog"),
            json!("The"),
        ),
        sample(json!("Hello world"), json!("Hello")),
        sample(json!("Today is Monday"), json!("is")),
    ]
}

fn solve_char_frequency(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let word: String = decode(id, input)?;
    encode(id, text::char_frequency(&word))
}

fn char_frequency_samples() -> Vec<Sample> {
    vec![
        sample(
            json!("Hello"),
            json!([["H", 1], ["e", 1], ["l", 2], ["o", 1]]),
        ),
        sample(
            json!("JavaScript"),
            json!([
                ["J", 1],
                ["a", 2],
                ["v", 1],
                ["S", 1],
                ["c", 1],
                ["r", 1],
                ["i", 1],
                ["p", 1],
                ["t", 1]
            ]),
        ),
    ]
}

fn solve_even_digit_pairs(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let line: String = decode(id, input)?;
    encode(id, text::count_even_digit_pairs(&line))
}

fn even_digit_pairs_samples() -> Vec<Sample> {
    vec![sample(json!("a1b2c3d4e5f6"), json!(3))]
}

fn solve_common_prefix(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let words: Vec<String> = decode(id, input)?;
    let words: Vec<&str> = words.iter().map(String::as_str).collect();
    encode(id, text::longest_common_prefix(&words))
}

fn common_prefix_samples() -> Vec<Sample> {
    vec![
        sample(json!(["flower", "flow", "flight"]), json!("fl")),
        sample(json!(["dog", "racecar", "car"]), json!("")),
        sample(json!([]), json!("")),
    ]
}

fn solve_possible_string_count(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let word: String = decode(id, input)?;
    encode(id, text::possible_string_count(&word))
}

fn possible_string_count_samples() -> Vec<Sample> {
    vec![
        sample(json!("abbcccc"), json!(5)),
        sample(json!("abcd"), json!(1)),
        sample(json!("aaaa"), json!(4)),
    ]
}

fn solve_combine_tokens(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let tokens: Vec<String> = decode(id, input)?;
    let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();
    match text::combine_tokens(&tokens) {
        text::Combined::Sum(sum) => encode(id, sum),
        text::Combined::Joined(joined) => encode(id, joined),
    }
}

fn combine_tokens_samples() -> Vec<Sample> {
    vec![
        sample(json!(["21", "24", "40"]), json!(85)),
        sample(json!(["Hello", "Alpha"]), json!("Hello Alpha")),
        sample(json!(["Summer", "2022"]), json!("Summer 2022")),
    ]
}

fn solve_roman_to_int(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let numeral: String = decode(id, input)?;
    encode(id, numeric::roman_to_int(&numeral))
}

fn roman_to_int_samples() -> Vec<Sample> {
    vec![
        sample(json!("III"), json!(3)),
        sample(json!("LVIII"), json!(58)),
        sample(json!("MCMXC"), json!(1990)),
        sample(json!("ABC"), Value::Null),
    ]
}

fn solve_int_to_roman(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let value: u32 = decode(id, input)?;
    encode(id, numeric::int_to_roman(value))
}

fn int_to_roman_samples() -> Vec<Sample> {
    vec![
        sample(json!(3), json!("III")),
        sample(json!(58), json!("LVIII")),
        sample(json!(1990), json!("MCMXC")),
        sample(json!(0), Value::Null),
    ]
}

fn power_of_two_samples() -> Vec<Sample> {
    [
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
    ]
    .into_iter()
    .map(|(n, expected)| sample(json!(n), json!(expected)))
    .collect()
}

fn solve_power_of_two(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let n: i32 = decode(id, input)?;
    encode(id, numeric::is_power_of_two(n))
}

fn solve_power_of_two_division(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let n: i32 = decode(id, input)?;
    encode(id, numeric::is_power_of_two_division(n))
}

fn solve_power_of_two_log(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let n: i32 = decode(id, input)?;
    encode(id, numeric::is_power_of_two_log(n))
}

fn solve_power_of_two_divides_max(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let n: i32 = decode(id, input)?;
    encode(id, numeric::is_power_of_two_divides_max(n))
}

fn solve_palindrome_number(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let x: i64 = decode(id, input)?;
    encode(id, numeric::is_palindrome_number(x))
}

fn palindrome_number_samples() -> Vec<Sample> {
    vec![
        sample(json!(121), json!(true)),
        sample(json!(-121), json!(false)),
        sample(json!(10), json!(false)),
    ]
}

fn solve_fibonacci_sequence(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let count: usize = decode(id, input)?;
    encode(id, numeric::fibonacci_sequence(count))
}

fn fibonacci_sequence_samples() -> Vec<Sample> {
    vec![
        sample(json!(8), json!([0, 1, 1, 2, 3, 5, 8, 13])),
        sample(json!(1), json!([0])),
        sample(json!(10), json!([0, 1, 1, 2, 3, 5, 8, 13, 21, 34])),
        sample(
            json!(15),
            json!([0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377]),
        ),
    ]
}

fn fibonacci_check_samples() -> Vec<Sample> {
    [
        (0, true),
        (5, true),
        (8, true),
        (21, true),
        (4, false),
        (10, false),
        (100, false),
    ]
    .into_iter()
    .map(|(n, expected)| sample(json!(n), json!(expected)))
    .collect()
}

fn solve_is_fibonacci(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let n: i64 = decode(id, input)?;
    encode(id, numeric::is_fibonacci(n))
}

fn solve_is_fibonacci_closed_form(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let n: i64 = decode(id, input)?;
    encode(id, numeric::is_fibonacci_closed_form(n))
}

fn solve_strike_rate(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let StrikeRateInput { runs, balls } = decode(id, input)?;
    encode(id, numeric::strike_rate(runs, balls))
}

fn strike_rate_samples() -> Vec<Sample> {
    vec![
        sample(json!({"runs": 45, "balls": 30}), json!(150.0)),
        sample(json!({"runs": 100, "balls": 60}), json!(166.67)),
        sample(json!({"runs": 0, "balls": 10}), json!(0.0)),
        sample(json!({"runs": 75, "balls": 50}), json!(150.0)),
    ]
}

/// Patterns are collected into one JSON array here, so the row count is capped.
pub const MAX_PATTERN_ROWS: i64 = 1_000;

fn decode_rows(exercise: &'static str, input: &Value) -> Result<i64, KataError> {
    let rows: i64 = decode(exercise, input)?;
    if rows > MAX_PATTERN_ROWS {
        return Err(KataError::TooManyRows {
            exercise,
            rows,
            limit: MAX_PATTERN_ROWS,
        });
    }
    Ok(rows)
}

fn solve_asterisk_triangle(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let rows = decode_rows(id, input)?;
    encode(id, patterns::asterisk_triangle(rows).collect::<Vec<_>>())
}

fn asterisk_triangle_samples() -> Vec<Sample> {
    vec![
        sample(json!(3), json!(["*", "**", "***"])),
        sample(json!(0), json!([])),
    ]
}

fn solve_palindromic_triangle(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let rows = decode_rows(id, input)?;
    encode(id, patterns::palindromic_triangle(rows).collect::<Vec<_>>())
}

fn palindromic_triangle_samples() -> Vec<Sample> {
    vec![
        sample(json!(3), json!(["1", "232", "34543"])),
        sample(
            json!(5),
            json!(["1", "232", "34543", "4567654", "567898765"]),
        ),
    ]
}

fn solve_book_stall(id: &'static str, input: &Value) -> Result<Value, KataError> {
    let operations: Vec<inventory::Operation> = decode(id, input)?;
    encode(id, inventory::replay(&operations))
}

fn book_stall_samples() -> Vec<Sample> {
    vec![
        sample(
            json!([
                {"op": "create", "title": "Bohubrihi", "author": "Humayun Ahmed", "copies": 10},
                {"op": "add", "title": "Bohubrihi", "copies": 5},
                {"op": "sell", "title": "Bohubrihi", "copies": 3}
            ]),
            json!({
                "details": ["\"Bohubrihi\" by Humayun Ahmed - Copies Available: 12"],
                "rejections": []
            }),
        ),
        sample(
            json!([
                {"op": "create", "title": "Bohubrihi", "author": "Humayun Ahmed", "copies": 2},
                {"op": "sell", "title": "Bohubrihi", "copies": 3}
            ]),
            json!({
                "details": ["\"Bohubrihi\" by Humayun Ahmed - Copies Available: 2"],
                "rejections": ["not enough copies to sell: \"Bohubrihi\" has 2, requested 3"]
            }),
        ),
    ]
}

static CATALOG: [Exercise; 27] = [
    Exercise {
        id: "asterisk-triangle",
        summary: "rows of 1..=n asterisks",
        solver: solve_asterisk_triangle,
        samples: asterisk_triangle_samples,
    },
    Exercise {
        id: "book-stall",
        summary: "replay create/add/sell operations on a book stall",
        solver: solve_book_stall,
        samples: book_stall_samples,
    },
    Exercise {
        id: "char-frequency",
        summary: "character counts in first-seen order",
        solver: solve_char_frequency,
        samples: char_frequency_samples,
    },
    Exercise {
        id: "combine-tokens",
        summary: "sum numeric tokens, otherwise join them",
        solver: solve_combine_tokens,
        samples: combine_tokens_samples,
    },
    Exercise {
        id: "even-digit-pairs",
        summary: "lowercase letters followed by an even digit",
        solver: solve_even_digit_pairs,
        samples: even_digit_pairs_samples,
    },
    Exercise {
        id: "fibonacci-sequence",
        summary: "first n Fibonacci numbers",
        solver: solve_fibonacci_sequence,
        samples: fibonacci_sequence_samples,
    },
    Exercise {
        id: "filter-primes",
        summary: "keep the primes of a sequence",
        solver: solve_filter_primes,
        samples: filter_primes_samples,
    },
    Exercise {
        id: "int-to-roman",
        summary: "canonical Roman numeral for 1..=3999",
        solver: solve_int_to_roman,
        samples: int_to_roman_samples,
    },
    Exercise {
        id: "is-fibonacci",
        summary: "Fibonacci membership by walking the sequence",
        solver: solve_is_fibonacci,
        samples: fibonacci_check_samples,
    },
    Exercise {
        id: "is-fibonacci-closed-form",
        summary: "Fibonacci membership by the perfect-square test",
        solver: solve_is_fibonacci_closed_form,
        samples: fibonacci_check_samples,
    },
    Exercise {
        id: "longest-common-prefix",
        summary: "prefix shared by every word",
        solver: solve_common_prefix,
        samples: common_prefix_samples,
    },
    Exercise {
        id: "max-product",
        summary: "largest product of two elements",
        solver: solve_max_product,
        samples: max_product_samples,
    },
    Exercise {
        id: "median",
        summary: "median of an integer sequence",
        solver: solve_median,
        samples: median_samples,
    },
    Exercise {
        id: "missing-number",
        summary: "value missing from 1..=n+1",
        solver: solve_missing_number,
        samples: missing_number_samples,
    },
    Exercise {
        id: "palindrome-number",
        summary: "integer reads the same reversed",
        solver: solve_palindrome_number,
        samples: palindrome_number_samples,
    },
    Exercise {
        id: "palindromic-triangle",
        summary: "rows of mirrored digit runs",
        solver: solve_palindromic_triangle,
        samples: palindromic_triangle_samples,
    },
    Exercise {
        id: "possible-string-count",
        summary: "originals of a word typed with one long press",
        solver: solve_possible_string_count,
        samples: possible_string_count_samples,
    },
    Exercise {
        id: "power-of-two",
        summary: "power of two by clearing the lowest bit",
        solver: solve_power_of_two,
        samples: power_of_two_samples,
    },
    Exercise {
        id: "power-of-two-divides-max",
        summary: "power of two by dividing 2^30",
        solver: solve_power_of_two_divides_max,
        samples: power_of_two_samples,
    },
    Exercise {
        id: "power-of-two-division",
        summary: "power of two by repeated halving",
        solver: solve_power_of_two_division,
        samples: power_of_two_samples,
    },
    Exercise {
        id: "power-of-two-log",
        summary: "power of two by integral log2",
        solver: solve_power_of_two_log,
        samples: power_of_two_samples,
    },
    Exercise {
        id: "remove-duplicates",
        summary: "first occurrence of every name",
        solver: solve_remove_duplicates,
        samples: remove_duplicates_samples,
    },
    Exercise {
        id: "roman-to-int",
        summary: "value of a Roman numeral",
        solver: solve_roman_to_int,
        samples: roman_to_int_samples,
    },
    Exercise {
        id: "shortest-word",
        summary: "first shortest word, punctuation ignored",
        solver: solve_shortest_word,
        samples: shortest_word_samples,
    },
    Exercise {
        id: "strike-rate",
        summary: "runs per hundred balls",
        solver: solve_strike_rate,
        samples: strike_rate_samples,
    },
    Exercise {
        id: "two-sum",
        summary: "indices of two values summing to a target",
        solver: solve_two_sum,
        samples: two_sum_samples,
    },
    Exercise {
        id: "two-sum-brute-force",
        summary: "indices of two values summing to a target, nested scan",
        solver: solve_two_sum_brute_force,
        samples: two_sum_samples,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn ids_are_sorted_and_unique() {
        let ids: Vec<&str> = catalog().iter().map(|exercise| exercise.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn every_exercise_satisfies_its_samples() {
        for exercise in catalog() {
            let samples = exercise.samples();
            assert!(!samples.is_empty(), "{} has no samples", exercise.id);
            for Sample { input, expected } in samples {
                let actual = test_support::solve(exercise, &input);
                assert!(
                    values_match(&actual, &expected, 1e-9),
                    "{}({input}) = {actual}, expected {expected}",
                    exercise.id
                );
            }
        }
    }

    #[test]
    fn variants_share_samples() {
        let bitwise = lookup("power-of-two").expect("power-of-two").samples();
        for id in ["power-of-two-division", "power-of-two-log", "power-of-two-divides-max"] {
            assert_eq!(lookup(id).expect(id).samples(), bitwise, "{id}");
        }
    }

    #[test]
    fn unknown_id_is_an_error() {
        let err = lookup("no-such-kata").expect_err("unknown");
        assert!(matches!(err, KataError::UnknownExercise(id) if id == "no-such-kata"));
    }

    #[test]
    fn malformed_input_is_rejected() {
        let exercise = lookup("median").expect("median");
        let err = exercise.solve(&json!("not a list")).expect_err("bad input");
        assert!(matches!(err, KataError::InvalidInput { exercise: "median", .. }));
    }

    #[test]
    fn pattern_rows_are_capped() {
        let exercise = lookup("asterisk-triangle").expect("asterisk-triangle");
        let err = exercise.solve(&json!(i64::MAX)).expect_err("too many rows");
        assert!(matches!(
            err,
            KataError::TooManyRows { exercise: "asterisk-triangle", limit: MAX_PATTERN_ROWS, .. }
        ));

        let palindromic = lookup("palindromic-triangle").expect("palindromic-triangle");
        let lines = test_support::solve(palindromic, &json!(MAX_PATTERN_ROWS));
        assert_eq!(lines.as_array().map(Vec::len), Some(MAX_PATTERN_ROWS as usize));
    }

    #[test]
    fn numbers_match_within_tolerance_only_when_fractional() {
        assert!(values_match(&json!(85.0), &json!(85), 1e-9));
        assert!(values_match(&json!(166.670_000_000_1), &json!(166.67), 1e-9));
        assert!(!values_match(&json!(5), &json!(6), 10.0));
        assert!(!values_match(&json!([1, 2]), &json!([1, 2, 3]), 1e-9));
        assert!(values_match(
            &json!({"a": [1.0, "x"]}),
            &json!({"a": [1, "x"]}),
            1e-9
        ));
    }
}
