use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply expressions may nest within one statement.
///
/// Every grouping, unary operator, call and chained binary operator adds a
/// level. Parsing and evaluation both recurse once per level, so the limit
/// keeps a single line from exhausting the native stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `depth`: Nesting levels already open around this expression; `0` for a
///   whole statement.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, depth)
}

/// Parses the tokens of one input line into exactly one statement.
///
/// The whole line must be consumed: anything left after the statement is
/// reported as `ParseError::UnexpectedTrailingTokens`. Errors raised at the end
/// of input have no token to take a line number from, so they are stamped with
/// `line` here.
///
/// # Parameters
/// - `tokens`: All tokens of the line, as produced by the lexer.
/// - `line`: The session line number the tokens came from.
///
/// # Example
/// ```
/// use labka::{
///     ast::Statement,
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse_line},
/// };
///
/// let tokens = tokenize("var a = 1 + 2", 3).unwrap();
/// let statement = parse_line(&tokens, 3).unwrap();
/// assert!(matches!(statement, Statement::VariableDeclaration { line: 3, .. }));
///
/// let tokens = tokenize("(1 + 2", 4).unwrap();
/// assert_eq!(parse_line(&tokens, 4),
///            Err(ParseError::ExpectedClosingParen { line: 4 }));
/// ```
pub fn parse_line(tokens: &[(Token, usize)], line: usize) -> ParseResult<Statement> {
    let mut iter = tokens.iter().peekable();

    let statement = parse_statement(&mut iter).map_err(|e| e.or_line(line))?;

    if let Some((token, token_line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                          line:  *token_line, });
    }

    Ok(statement)
}
