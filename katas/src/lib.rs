//! Small, self-contained algorithm exercises.
//!
//! Every exercise is a pure function over a finite input. Out-of-domain input
//! yields a sentinel (`None`, `0`, an empty container) instead of a fault, so
//! callers must treat the sentinel as "no result" rather than a real value.
//!
//! - **[`arrays`]**, **[`text`]**, **[`numeric`]**, **[`patterns`]**: the
//!   exercises themselves. No I/O, fully testable in isolation.
//! - **[`inventory`]**: the one exercise with state across calls (a book stall).
//! - **[`catalog`]**: registry of every exercise with JSON adapters and the
//!   literal samples each one is checked against.

pub mod arrays;
pub mod catalog;
pub mod error;
pub mod inventory;
pub mod numeric;
pub mod patterns;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod text;
