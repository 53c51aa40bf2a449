//! Error and diagnostic types for the mjc toolchain.
//!
//! Two kinds of failure exist:
//!
//! - **Diagnostics** ([`Diagnostic`]) describe problems in the *checked
//!   source*. The lexer and parser never stop on them; they collect every
//!   diagnostic in detection order and hand the list back as data.
//! - **Errors** ([`Error`]) describe misuse of the library itself, such as
//!   building a [`TokenStream`](crate::TokenStream) without an end-marker.
//!   These travel through the usual [`Result`] alias.
//!
//! # Examples
//!
//! ```rust
//! use mjc_syntax::error::{Diagnostic, ErrorKind, Found, Phase};
//!
//! let diag = Diagnostic::at(
//!     ErrorKind::UnexpectedToken { expected: "'('".into(), found: Found::lexeme("x") },
//!     3,
//!     11,
//! );
//! assert_eq!(diag.kind.phase(), Phase::Syntax);
//! assert_eq!(diag.to_string(), "expected '(', found 'x' at 3:11");
//!
//! let eof = Diagnostic::at_end(ErrorKind::InvalidFactor);
//! assert!(eof.to_string().ends_with("(end of input)"));
//! ```

use std::fmt;

use serde::Serialize;
use thiserror::Error as ThisError;

/// The analysis phase a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Lexical,
    Syntax,
}

/// What the parser actually saw where it expected something else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Found {
    Lexeme(String),
    EndOfInput,
}

impl Found {
    pub fn lexeme(text: impl Into<String>) -> Self {
        Found::Lexeme(text.into())
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Lexeme(s) => write!(f, "'{}'", s),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Every problem the lexer or parser can report.
///
/// Lexical and syntax variants form disjoint sets, see [`ErrorKind::phase`].
#[derive(Debug, Clone, PartialEq, Eq, ThisError, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ErrorKind {
    // === Lexical ===
    #[error("unterminated string")]
    UnterminatedString,

    #[error("unterminated comment (started on line {start_line})")]
    UnterminatedComment { start_line: usize },

    #[error("invalid character '{0}'")]
    InvalidCharacter(char),

    #[error("invalid operator '{0}'")]
    InvalidOperator(char),

    #[error("invalid separator '{0}'")]
    InvalidSeparator(char),

    // === Syntax ===
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: Found },

    #[error("expected class name")]
    MissingClassName,

    #[error("expected identifier")]
    MissingIdentifier,

    #[error("expected variable name")]
    MissingVariableName,

    #[error("expected parameter name")]
    MissingParameterName,

    #[error("invalid type keyword")]
    InvalidTypeKeyword,

    #[error("invalid statement '{0}'")]
    InvalidStatement(String),

    #[error("invalid factor: expected number, identifier or (expression)")]
    InvalidFactor,

    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl ErrorKind {
    pub fn phase(&self) -> Phase {
        match self {
            ErrorKind::UnterminatedString
            | ErrorKind::UnterminatedComment { .. }
            | ErrorKind::InvalidCharacter(_)
            | ErrorKind::InvalidOperator(_)
            | ErrorKind::InvalidSeparator(_) => Phase::Lexical,
            _ => Phase::Syntax,
        }
    }
}

/// A located problem in the checked source.
///
/// `line`/`col` are 1-based. Both are `None` when the parser ran past the
/// last token, in which case the diagnostic refers to the end of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    #[serde(flatten)]
    pub kind: ErrorKind,

    pub line: Option<usize>,

    pub col: Option<usize>,
}

impl Diagnostic {
    pub fn at(kind: ErrorKind, line: usize, col: usize) -> Self {
        Self {
            kind,
            line: Some(line),
            col: Some(col),
        }
    }

    pub fn at_end(kind: ErrorKind) -> Self {
        Self {
            kind,
            line: None,
            col: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.kind.phase()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(l), Some(c)) = (self.line, self.col) {
            write!(f, "{} at {}:{}", self.kind, l, c)
        } else {
            write!(f, "{} (end of input)", self.kind)
        }
    }
}

/// An error raised by misuse of the mjc library itself.
///
/// # Examples
///
/// ```rust
/// use mjc_syntax::Error;
///
/// let plain = Error::new("token stream is empty");
/// let located = Error::with_span("unexpected end-marker", 4, 2);
///
/// assert_eq!(plain.to_string(), "token stream is empty");
/// assert_eq!(located.to_string(), "unexpected end-marker at 4:2");
/// ```
#[derive(Debug, Clone)]
pub struct Error {
    /// Human-readable error message
    pub msg: String,

    /// Optional line number in source file (1-based)
    pub line: Option<usize>,

    /// Optional column number in source file (1-based)
    pub col: Option<usize>,
}

impl Error {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            line: None,
            col: None,
        }
    }

    pub fn with_span(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            msg: msg.into(),
            line: Some(line),
            col: Some(col),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(l), Some(c)) = (self.line, self.col) {
            write!(f, "{} at {}:{}", self.msg, l, c)
        } else {
            write!(f, "{}", self.msg)
        }
    }
}

impl std::error::Error for Error {}


/// A specialized `Result` type for mjc library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Shorthand for `Err(Error::new(msg))`.
pub fn error<T>(msg: impl Into<String>) -> Result<T> {
    Err(Error::new(msg))
}

