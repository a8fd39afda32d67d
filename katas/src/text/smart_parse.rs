use std::fmt;

/// Result of [`combine_tokens`].
#[derive(Debug, Clone, PartialEq)]
pub enum Combined {
    /// Every token was numeric; their sum.
    Sum(f64),
    /// At least one token was not numeric; tokens joined by single spaces.
    Joined(String),
}

impl fmt::Display for Combined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combined::Sum(sum) => write!(f, "{sum}"),
            Combined::Joined(text) => f.write_str(text),
        }
    }
}

/// Sum the tokens if all of them are numeric, otherwise join them.
///
/// A token is numeric when, trimmed, it parses as a finite decimal. Blank
/// tokens, hex literals and infinities are text, never an implicit `0` or
/// `inf`. An empty token list sums to zero.
pub fn combine_tokens(tokens: &[&str]) -> Combined {
    let numbers: Option<Vec<f64>> = tokens.iter().map(|token| parse_number(token)).collect();
    match numbers {
        Some(values) => Combined::Sum(values.iter().sum()),
        None => Combined::Joined(tokens.join(" ")),
    }
}

fn parse_number(token: &str) -> Option<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_numeric_tokens() {
        assert_eq!(combine_tokens(&["21", "24", "40"]), Combined::Sum(85.0));
        assert_eq!(combine_tokens(&[" 1.5", "2.5 "]), Combined::Sum(4.0));
    }

    #[test]
    fn joins_when_any_token_is_text() {
        assert_eq!(
            combine_tokens(&["Hello", "Alpha"]),
            Combined::Joined("Hello Alpha".to_string())
        );
        assert_eq!(
            combine_tokens(&["Summer", "2022"]),
            Combined::Joined("Summer 2022".to_string())
        );
    }

    #[test]
    fn empty_and_non_finite_tokens_are_text() {
        assert_eq!(combine_tokens(&["", "1"]), Combined::Joined(" 1".to_string()));
        assert_eq!(combine_tokens(&[" ", "1"]), Combined::Joined("  1".to_string()));
        assert_eq!(
            combine_tokens(&["0x1A", "1"]),
            Combined::Joined("0x1A 1".to_string())
        );
        assert_eq!(
            combine_tokens(&["inf", "1"]),
            Combined::Joined("inf 1".to_string())
        );
    }

    #[test]
    fn no_tokens_sum_to_zero() {
        assert_eq!(combine_tokens(&[]), Combined::Sum(0.0));
    }

    #[test]
    fn display_prints_value() {
        assert_eq!(Combined::Sum(85.0).to_string(), "85");
        assert_eq!(Combined::Joined("a b".to_string()).to_string(), "a b");
    }
}
