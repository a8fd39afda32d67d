//! Test-only fixtures shared by unit and integration tests.

use serde_json::Value;

use crate::catalog::Exercise;
use crate::inventory::BookStall;

/// The stall after the classic demo: 10 copies created, 5 added, 3 sold.
pub fn demo_stall() -> BookStall {
    let mut stall = BookStall::new();
    stall.create_book("Bohubrihi", "Humayun Ahmed", 10);
    stall
        .add_copies("Bohubrihi", 5)
        .expect("demo title exists");
    stall
        .sell_book("Bohubrihi", 3)
        .expect("demo stall has enough copies");
    stall
}

/// Solve a sample input, panicking with context on dispatch errors.
pub fn solve(exercise: &Exercise, input: &Value) -> Value {
    exercise
        .solve(input)
        .unwrap_or_else(|err| panic!("{} failed on {input}: {err}", exercise.id))
}
