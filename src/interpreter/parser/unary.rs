use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{check_nesting, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// The only prefix operator is `-` (numeric negation). It is
/// right-associative, so `--x` is parsed as `-(-x)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Nesting levels already open around this expression.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
///
/// # Errors
/// `ParseError::NestingTooDeep` once the operand would sit deeper than
/// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH).
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    check_nesting(depth + 1, tokens.peek().map_or(0, |(_, l)| *l))?;

    if let Some((Token::Minus, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens, depth + 1)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line: *line, })
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - integer literals
/// - variable references
/// - function calls
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := INTEGER
///              | identifier_or_call
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Nesting levels already open around this expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Integer(value), line) => {
            let expr = Expr::Literal { value: *value,
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::LParen, _) => parse_grouping(tokens, depth),
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens, depth),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("'{tok}'"),
                                                         line:  *line, }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// The group adds no node of its own but still counts as a nesting level.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.next().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens, depth + 1)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// Parses an identifier that is either a variable reference or a call.
///
/// One token of lookahead decides: an identifier directly followed by `(` is
/// a call whose arguments are parsed as a comma-separated expression list.
///
/// Grammar:
/// ```text
///     identifier_or_call := IDENTIFIER
///                         | IDENTIFIER "(" (expression ("," expression)*)? ")"
/// ```
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(n), line)) => (n.clone(), *line),
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("'{tok}'"),
                                                     line:  *line, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { line: 0 });
        },
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments =
                parse_comma_separated(tokens, |t| parse_expression(t, depth + 1), &Token::RParen)
                    .map_err(|e| e.or_line(line))?;
            Ok(Expr::FunctionCall { name, arguments, line })
        },
        _ => Ok(Expr::Variable { name, line }),
    }
}
