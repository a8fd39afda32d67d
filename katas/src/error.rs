//! Error types surfaced by the catalog and the book stall.

use thiserror::Error;

/// Failure to dispatch an input to a catalog exercise.
#[derive(Debug, Error)]
pub enum KataError {
    #[error("unknown exercise `{0}`")]
    UnknownExercise(String),

    #[error("invalid input for `{exercise}`: {source}")]
    InvalidInput {
        exercise: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("`{exercise}` accepts at most {limit} rows, got {rows}")]
    TooManyRows {
        exercise: &'static str,
        rows: i64,
        limit: i64,
    },

    #[error("encode result of `{exercise}`: {source}")]
    Encode {
        exercise: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejected book-stall operation. The stall is left untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("book not found: \"{0}\"")]
    BookNotFound(String),

    #[error("not enough copies to sell: \"{title}\" has {available}, requested {requested}")]
    NotEnoughCopies {
        title: String,
        available: u32,
        requested: u32,
    },

    #[error("copy count overflow for \"{0}\"")]
    Overflow(String),
}
