/// Binary operator evaluation logic.
///
/// Checked 64-bit arithmetic for `+`, `-`, `*` and `/`.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements checked arithmetic negation.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the expression and statement entry points and the result type
/// shared by the whole evaluator.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides per-variant helpers used by the core dispatcher and small shared
/// checks such as arity validation.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
