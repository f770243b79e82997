use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Fails once `depth` exceeds [`MAX_NESTING_DEPTH`].
pub(in crate::interpreter::parser) fn check_nesting(depth: usize,
                                                    line: usize)
                                                    -> ParseResult<()> {
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                line });
    }
    Ok(())
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call argument lists and `def` parameter lists.
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token. For a `)` list this is
///   reported as `ExpectedClosingParen`.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("expected ',' or '{closing}', found '{tok}'"),
                                                         line:  *line, });
            },
            None if *closing == Token::RParen => {
                return Err(ParseError::ExpectedClosingParen { line: 0 });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`. Keywords are separate tokens,
/// so `var` and `def` are never accepted here.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected identifier, found '{tok}'"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Errors
/// `UnexpectedToken` for any other token, `UnexpectedEndOfInput` when the
/// line ends first.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected '{expected}', found '{tok}'"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
