/// Built-in function implementations.
///
/// Contains the integer helpers `abs` and `pow`.
pub mod builtin;
/// `min` and `max` function implementations.
///
/// Returns the smaller or larger of two integers.
pub mod min_max;
/// Function call dispatch.
///
/// Holds the builtin table and the evaluation of user-defined calls.
pub mod core;
