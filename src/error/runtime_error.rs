#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArityMismatch {
        /// The name of the function being called.
        name:     String,
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An argument was outside the domain of a builtin.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Nested user-function calls went deeper than the configured limit.
    CallDepthExceeded {
        /// The configured call depth limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An error raised while evaluating the body of a user-defined function.
    InFunction {
        /// The function whose body failed.
        name:       String,
        /// The line the function was declared on.
        defined_on: usize,
        /// The line of the outermost call that led to the failure.
        line:       usize,
        /// The error raised inside the body.
        error:      Box<Self>,
    },
}

impl RuntimeError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::UndefinedFunction { line, .. }
            | Self::ArityMismatch { line, .. }
            | Self::Overflow { line }
            | Self::DivisionByZero { line }
            | Self::InvalidArgument { line, .. }
            | Self::CallDepthExceeded { line, .. }
            | Self::InFunction { line, .. } => *line,
        }
    }

    /// Attributes an error raised in the body of `name` to the call on `line`.
    ///
    /// The innermost failing function is kept; calls further out only move
    /// the reported line outwards, ending at the session line.
    ///
    /// # Example
    /// ```
    /// use labka::error::RuntimeError;
    ///
    /// let err = RuntimeError::DivisionByZero { line: 1 }.in_function("half", 1, 2)
    ///                                                   .in_function("outer", 2, 3);
    ///
    /// assert_eq!(err.line_number(), 3);
    /// assert_eq!(err.to_string(),
    ///            "Error on line 3: In function 'half' (defined on line 1): Division by zero.");
    /// ```
    #[must_use]
    pub fn in_function(self, name: &str, defined_on: usize, line: usize) -> Self {
        match self {
            Self::InFunction { name, defined_on, error, .. } => Self::InFunction { name,
                                                                                   defined_on,
                                                                                   line,
                                                                                   error },
            error => Self::InFunction { name: name.to_string(),
                                        defined_on,
                                        line,
                                        error: Box::new(error) },
        }
    }

    fn describe(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, .. } => write!(f, "Unknown variable '{name}'."),
            Self::UndefinedFunction { name, .. } => write!(f, "Unknown function '{name}'."),
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  .. } => {
                write!(f, "Function '{name}' expects {expected} argument(s) but got {found}.")
            },
            Self::Overflow { .. } => write!(f, "Integer overflow while trying to compute result."),
            Self::DivisionByZero { .. } => write!(f, "Division by zero."),
            Self::InvalidArgument { details, .. } => write!(f, "Invalid argument: {details}."),
            Self::CallDepthExceeded { limit, .. } => {
                write!(f, "Call depth exceeded the limit of {limit}.")
            },
            Self::InFunction { name,
                               defined_on,
                               error,
                               .. } => {
                write!(f, "In function '{name}' (defined on line {defined_on}): ")?;
                error.describe(f)
            },
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error on line {}: ", self.line_number())?;
        self.describe(f)
    }
}

impl std::error::Error for RuntimeError {}
