/// Lexing errors.
///
/// Defines the errors raised while splitting a line into tokens: characters
/// outside the language, integer literals that do not fit in 64 bits and
/// input that is not UTF-8.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building a statement from a
/// line's tokens. Parse errors include unexpected tokens, a line ending too
/// early, unbalanced delimiters and leftover tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// names, wrong argument counts, integer overflow, division by zero and
/// runaway recursion.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure a single session line can produce.
///
/// Every phase of the line pipeline has its own error enum; this type unifies
/// them so the session can use `?` across lexing, parsing and evaluation and
/// still tell the phases apart afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line could not be tokenized.
    Lex(LexError),
    /// The tokens did not form a statement.
    Parse(ParseError),
    /// The statement failed while being evaluated.
    Runtime(RuntimeError),
}

impl Error {
    /// Gets the session line number the error was raised on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Lex(e) => e.line_number(),
            Self::Parse(e) => e.line_number(),
            Self::Runtime(e) => e.line_number(),
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
