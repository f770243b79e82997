/// Parser entry points.
///
/// Holds the result alias, the expression entry point and the line-level
/// driver that turns a whole token line into one statement.
pub mod core;

/// Unary expressions and primaries.
///
/// Parses prefix negation, literals, variable references, function calls and
/// parenthesized groupings.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence levels for `+`/`-` and `*`/`/`, both
/// left-associative.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides comma-separated list parsing and identifier expectations shared
/// by calls and declarations.
pub mod utils;

/// Statement parsing.
///
/// Implements `var` declarations, `def` declarations and expression
/// statements.
pub mod statement;
