#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A description of what was found and, where known, what was
        /// expected instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing brace `}` was expected but not found.
    ExpectedClosingBrace {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A function definition lists the same parameter more than once.
    DuplicateParameter {
        /// The repeated parameter name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression nests deeper than the parser accepts.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedClosingParen { line }
            | Self::ExpectedClosingBrace { line }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::DuplicateParameter { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }

    /// Replaces a missing (zero) line number with `fallback`.
    #[must_use]
    pub fn or_line(mut self, fallback: usize) -> Self {
        match &mut self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedClosingParen { line }
            | Self::ExpectedClosingBrace { line }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::DuplicateParameter { line, .. }
            | Self::NestingTooDeep { line, .. } => {
                if *line == 0 {
                    *line = fallback;
                }
            },
        }
        self
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedClosingBrace { line } => write!(f,
                                                          "Error on line {line}: Expected closing brace '}}' but none found."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after statement. Check your input: {token}"),

            Self::DuplicateParameter { name, line } => write!(f,
                                                              "Error on line {line}: Parameter '{name}' is declared more than once."),

            Self::NestingTooDeep { limit, line } => write!(f,
                                                           "Error on line {line}: Expression is nested more than {limit} levels deep."),
        }
    }
}

impl std::error::Error for ParseError {}
