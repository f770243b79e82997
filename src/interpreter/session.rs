use std::io::{self, BufRead, Write};

use crate::{
    error::{Error, LexError},
    interpreter::{environment::Environment, lexer::tokenize, parser::core::parse_line},
};

/// Options controlling how a [`Session`] reacts to failing lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Stop reading input after the first line that fails.
    pub fail_fast: bool,
}

/// Counters describing a finished [`Session::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of input lines read, blank lines included.
    pub lines:         usize,
    /// Number of values written to the output.
    pub results:       usize,
    /// Number of lines that failed.
    pub errors:        usize,
    /// Whether `fail_fast` ended the run before end of input.
    pub stopped_early: bool,
}

/// One interpreter session.
///
/// A session owns the [`Environment`] and numbers every line it sees, so
/// bindings made on one line are visible on all later lines and diagnostics
/// can point at the offending line.
#[derive(Debug, Clone, Default)]
pub struct Session {
    environment: Environment,
    options:     SessionOptions,
    line:        usize,
}

impl Session {
    #[must_use]
    pub fn new(environment: Environment, options: SessionOptions) -> Self {
        Self { environment,
               options,
               line: 0 }
    }

    /// The bindings accumulated so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The number of lines this session has processed.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Runs one line of source through lexer, parser and evaluator.
    ///
    /// Blank lines are counted but otherwise ignored. A line that fails leaves
    /// the environment unchanged.
    ///
    /// # Returns
    /// `Some(value)` when the line is an expression, `None` for declarations
    /// and blank lines.
    ///
    /// # Errors
    /// Any lex, parse or runtime error raised by the line.
    ///
    /// # Example
    /// ```
    /// use labka::interpreter::session::Session;
    ///
    /// let mut session = Session::default();
    ///
    /// assert_eq!(session.run_line("5 + 3 * 2").unwrap(), Some(11));
    /// assert_eq!(session.run_line("var a = 2").unwrap(), None);
    /// assert_eq!(session.run_line("a + 3").unwrap(), Some(5));
    /// assert!(session.run_line("b").is_err());
    /// assert_eq!(session.line(), 4);
    /// ```
    pub fn run_line(&mut self, source: &str) -> Result<Option<i64>, Error> {
        self.line += 1;
        let line = self.line;

        let tokens = tokenize(source, line)?;
        if tokens.is_empty() {
            return Ok(None);
        }

        let statement = parse_line(&tokens, line)?;
        log::debug!("line {line}: {}", statement.kind());

        Ok(self.environment.execute(&statement)?)
    }

    /// Reads `input` line by line until end of input.
    ///
    /// Each value is written to `out` in decimal followed by a newline. Each
    /// failing line writes one diagnostic line to `err` and, unless
    /// `fail_fast` is set, the loop moves on to the next line.
    ///
    /// A line that is not valid UTF-8 is a failing line like any other: it is
    /// counted and reported, and the loop continues.
    ///
    /// # Errors
    /// Only I/O failures on `input`, `out` or `err` end the run with an error.
    ///
    /// # Example
    /// ```
    /// use labka::interpreter::session::Session;
    ///
    /// let input = "max(5, 2)\nvar a = 1\nnope\na + 1\n";
    /// let (mut out, mut err) = (Vec::new(), Vec::new());
    ///
    /// let summary = Session::default().run(input.as_bytes(), &mut out, &mut err)
    ///                                 .unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "5\n2\n");
    /// assert!(!err.is_empty());
    /// assert_eq!((summary.lines, summary.results, summary.errors), (4, 2, 1));
    /// ```
    pub fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> io::Result<Summary>
        where R: BufRead,
              W: Write,
              E: Write
    {
        let mut summary = Summary::default();
        let mut buf = Vec::new();
        log::info!("session started");

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            summary.lines += 1;

            let outcome = match std::str::from_utf8(strip_line_ending(&buf)) {
                Ok(source) => self.run_line(source),
                Err(_) => {
                    self.line += 1;
                    Err(LexError::InvalidUtf8 { line: self.line }.into())
                },
            };

            match outcome {
                Ok(Some(value)) => {
                    summary.results += 1;
                    writeln!(out, "{value}")?;
                    out.flush()?;
                },
                Ok(None) => {},
                Err(e) => {
                    summary.errors += 1;
                    log::debug!("line {}: failed: {e:?}", e.line_number());
                    writeln!(err, "{e}")?;
                    if self.options.fail_fast {
                        summary.stopped_early = true;
                        break;
                    }
                },
            }
        }

        out.flush()?;
        log::info!("session finished: {} line(s), {} result(s), {} error(s), {} variable(s), {} function(s)",
                   summary.lines,
                   summary.results,
                   summary.errors,
                   self.environment.variable_count(),
                   self.environment.function_count());
        Ok(summary)
    }
}

/// Drops the `\n` or `\r\n` that ends a line read with `read_until`.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
