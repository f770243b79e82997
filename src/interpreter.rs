/// The environment module holds the session's bindings.
///
/// Variables and user-defined functions live here for the whole session.
/// The evaluator borrows the environment mutably to resolve names and record
/// declarations.
///
/// # Responsibilities
/// - Stores variable and function bindings in separate namespaces.
/// - Reports undefined names.
/// - Carries the nested call limit.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs checked integer arithmetic, calls builtins and user functions,
/// and records declarations in the environment.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Binds function parameters in a per-call scope.
/// - Reports runtime errors such as overflow or an unknown function.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads one line of raw source text and produces a sequence of
/// tokens, each corresponding to a number, identifier, keyword, operator or
/// delimiter. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens tagged with their line.
/// - Distinguishes the `var` and `def` keywords from identifiers.
/// - Reports lexical errors for invalid characters or oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the tokens of one line and constructs exactly one
/// statement.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Applies operator precedence and associativity.
/// - Validates grammar, reporting errors with line info.
pub mod parser;
/// The session module drives the line-by-line read-eval-print loop.
///
/// # Responsibilities
/// - Numbers input lines and runs each through lexer, parser and evaluator.
/// - Writes results and diagnostics to separate sinks.
/// - Keeps going after a failing line unless asked to stop.
pub mod session;
