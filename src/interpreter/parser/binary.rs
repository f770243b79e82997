use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary, utils::check_nesting},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// Each operator in the chain adds one level to the tree, so a long chain
/// counts against the nesting limit just like parentheses do.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `depth`: Nesting levels already open around this expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    let mut height = left.height();
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            height = 1 + height.max(right.height());
            check_nesting(depth + height, *line)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: *line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, which bind tighter than
/// `+` and `-`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `depth`: Nesting levels already open around this expression.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, depth)?;
    let mut height = left.height();
    while let Some((token, line)) = tokens.peek() {
        if let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_unary(tokens, depth)?;
            height = 1 + height.max(right.height());
            check_nesting(depth + height, *line)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: *line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not `+`, `-`, `*` or `/`.
///
/// # Example
/// ```
/// use labka::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
