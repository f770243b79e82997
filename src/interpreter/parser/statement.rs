use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - a variable declaration (`var`).
/// - a function definition (`def`).
/// - an expression used as a statement.
///
/// The leading keyword decides; anything else is parsed as an expression
/// statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_variable_declaration(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_function_definition(tokens)? {
        return Ok(statement);
    }

    let current_line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens, 0)?;

    Ok(Statement::Expression { expr,
                               line: current_line })
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `var <identifier> = <expression>`.
///
/// If the next token is not `var`, this function returns `Ok(None)` and does
/// not consume any input.
///
/// # Returns
/// - `Ok(Some(Statement::VariableDeclaration))` if a declaration is parsed,
/// - `Ok(None)` if no declaration is present.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is missing or not an identifier,
/// - `=` is missing,
/// - the expression is malformed,
/// - input ends unexpectedly.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Var, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let name = parse_identifier(tokens).map_err(|e| e.or_line(line))?;
        expect_token(tokens, &Token::Equals).map_err(|e| e.or_line(line))?;

        let value = parse_expression(tokens, 0)?;
        return Ok(Some(Statement::VariableDeclaration { name, value, line }));
    }

    Ok(None)
}

/// Parses a function definition of the form
/// `def <name>(param1, param2, ...) { <expression> }`.
///
/// The parameter list may be empty. Each parameter must be a distinct
/// identifier. The body is a single expression and is stored unevaluated.
///
/// If the next token is not `def`, the function returns `Ok(None)` without
/// consuming tokens.
///
/// # Returns
/// - `Ok(Some(Statement::Function))` if a definition is parsed,
/// - `Ok(None)` if no definition is present.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name, `(` or `{` is missing,
/// - a parameter is not an identifier or appears twice,
/// - the body expression fails to parse,
/// - the closing `}` is missing.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Def, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    let name = parse_identifier(tokens).map_err(|e| e.or_line(line))?;
    expect_token(tokens, &Token::LParen).map_err(|e| e.or_line(line))?;

    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)
        .map_err(|e| e.or_line(line))?;
    for (i, param) in params.iter().enumerate() {
        if params[..i].contains(param) {
            return Err(ParseError::DuplicateParameter { name: param.clone(),
                                                        line });
        }
    }

    expect_token(tokens, &Token::LBrace).map_err(|e| e.or_line(line))?;
    let body = parse_expression(tokens, 0)?;

    match tokens.next() {
        Some((Token::RBrace, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("expected '}}', found '{tok}'"),
                                                     line:  *l, });
        },
        None => return Err(ParseError::ExpectedClosingBrace { line }),
    }

    Ok(Some(Statement::Function(FunctionDef { name,
                                              params,
                                              body,
                                              line })))
}
