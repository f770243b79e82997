/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending source text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit in a signed 64-bit integer.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The raw input line is not valid UTF-8.
    InvalidUtf8 {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl LexError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::LiteralTooLarge { line, .. }
            | Self::InvalidUtf8 { line } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { token, line } => {
                write!(f, "Error on line {line}: Unexpected character '{token}'.")
            },
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
            Self::InvalidUtf8 { line } => write!(f, "Error on line {line}: Line is not valid UTF-8."),
        }
    }
}

impl std::error::Error for LexError {}
