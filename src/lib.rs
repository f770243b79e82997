//! # labka
//!
//! labka is a line-oriented interpreter for a small integer expression
//! language. Every input line is one statement: an arithmetic expression whose
//! value is printed, a `var` declaration, or a `def` function declaration.
//! Bindings persist across lines for the lifetime of a session.
//!
//! ```text
//! 5 + 3 * 2                                   -> 11
//! var a = max(min(3 * 2, 2), 2)
//! a + 3                                       -> 5
//! def myfunc(a, b) { min(a, b) + max(a, b) }
//! myfunc(3, 4)                                -> 7
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::Error, interpreter::session::Session};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of one input line as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
pub mod ast;
/// Provides error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while a line is being
/// processed, one enum per phase plus a unifying `Error`. Every error carries
/// the line number it was raised on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the environment and
/// the session loop that feeds lines through them.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment, evaluator.
/// - Provides the session API used by the command line front end.
pub mod interpreter;

/// Evaluates every line of `source` in a fresh session.
///
/// Lines are processed in order, so declarations on earlier lines are visible
/// to later ones. Evaluation stops at the first failing line.
///
/// # Returns
/// The values of all expression lines, in order.
///
/// # Errors
/// The first lex, parse or runtime error encountered.
///
/// # Examples
/// ```
/// use labka::evaluate_script;
///
/// let source = "var a = 2\ndef twice(x) { x * 2 }\ntwice(a) + 1\n";
/// assert_eq!(evaluate_script(source).unwrap(), vec![5]);
///
/// // `b` was never declared.
/// assert!(evaluate_script("b + 1").is_err());
/// ```
pub fn evaluate_script(source: &str) -> Result<Vec<i64>, Error> {
    let mut session = Session::default();
    let mut results = Vec::new();

    for line in source.lines() {
        if let Some(value) = session.run_line(line)? {
            results.push(value);
        }
    }

    Ok(results)
}
