use logos::Logos;

use crate::error::{LexError, lex_error::LexResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `var`
    #[token("var")]
    Var,
    /// `def`
    #[token("def")]
    Def,
    /// Identifier tokens; variable or function names such as `a` or `myfunc`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// Spaces, tabs, feeds and stray carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Var => write!(f, "var"),
            Self::Def => write!(f, "def"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
            Self::Equals => write!(f, "="),
            Self::Ignored => Ok(()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Holds the session line number of the text being tokenized so every token
/// can be tagged with it for diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The session line number of the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the literal overflows `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Splits one line of source text into line-tagged tokens.
///
/// Whitespace is dropped. An empty or blank line produces an empty vector.
///
/// # Errors
/// - `LexError::LiteralTooLarge` when a digit run does not fit in `i64`.
/// - `LexError::UnexpectedCharacter` for any character outside the language.
///
/// # Example
/// ```
/// use labka::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("var x = 4", 1).unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Var, 1),
///                 (Token::Identifier("x".to_string()), 1),
///                 (Token::Equals, 1),
///                 (Token::Integer(4), 1)]);
///
/// assert!(tokenize("4 % 2", 1).is_err());
/// assert!(tokenize("   ", 1).unwrap().is_empty());
/// ```
pub fn tokenize(source: &str, line: usize) -> LexResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            if slice.starts_with(|c: char| c.is_ascii_digit()) {
                return Err(LexError::LiteralTooLarge { literal: slice.to_string(),
                                                       line });
            }
            return Err(LexError::UnexpectedCharacter { token: slice.to_string(),
                                                       line });
        }
    }

    log::trace!("line {line}: {} token(s)", tokens.len());
    Ok(tokens)
}
