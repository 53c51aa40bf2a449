//! Token definitions for the mjc teaching subset of Java.
//!
//! This module defines every token kind the mjc lexer can produce, the
//! [`Token`] record that pairs a kind with its source text and position, and
//! the [`TokenStream`] container handed from the lexer to the parser.
//!
//! # Token Categories
//!
//! - **Words**: reserved words (`while`, `public`, `int`) and identifiers
//! - **Literals**: integers (`42`), decimals (`3.14`), strings (`"hi"`, `'c'`)
//! - **Operators**: arithmetic, comparison, logical and assignment operators
//! - **Separators**: `( ) { } [ ] ; , .`
//! - **Special**: the end-of-input marker
//!
//! # Examples
//!
//! ```rust
//! use mjc_syntax::{Token, TokenKind};
//!
//! let keyword = Token::new(TokenKind::Keyword, "while", 1, 1);
//! let open = Token::new(TokenKind::LParen, "(", 1, 7);
//!
//! assert_eq!(keyword.kind.label(), "KEYWORD");
//! assert_eq!(open.lexeme, "(");
//! ```

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::error::{error, Error, Result};

/// Token types that can be produced by the mjc lexer.
///
/// Kinds carry no payload: the source text of every token lives in
/// [`Token::lexeme`], so the kind is a cheap `Copy` tag that the parser can
/// match on directly.
///
/// # Variant Categories
///
/// ## Words and literals
/// [`Keyword`](TokenKind::Keyword) and [`Ident`](TokenKind::Ident) share the
/// same recognizer; the lexeme decides which one is produced.
///
/// ## Operators
/// Two-character operators are recognized before their one-character
/// prefixes (maximal munch).
///
/// ## Separators
/// One kind per separator character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // === Words ===
    /// A reserved word, see [`crate::keywords::RESERVED_WORDS`]
    Keyword,

    /// Any other letter- or underscore-initiated word
    ///
    /// Examples: `x`, `counter_2`, `_tmp`
    Ident,

    // === Literals ===
    /// A run of digits, e.g. `123`
    IntLiteral,

    /// Digits, a point, and at least one more digit, e.g. `123.45`
    DecimalLiteral,

    /// Text between matching `"` or `'` quotes, escapes kept verbatim
    StringLiteral,

    // === Operators ===
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<=`
    LessEq,
    /// `>=`
    GreaterEq,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// Assignment `=`
    Equal,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// Logical not `!`
    Bang,

    // === Separators ===
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `.`
    Dot,

    /// End-of-input marker, always the last token of a [`TokenStream`]
    Eof,
}

impl TokenKind {
    /// Stable upper-case name used in token tables and JSON reports.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::DecimalLiteral => "DECIMAL_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::EqEq => "EQ_EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::LessEq => "LESS_EQ",
            TokenKind::GreaterEq => "GREATER_EQ",
            TokenKind::PlusPlus => "INCREMENT",
            TokenKind::MinusMinus => "DECREMENT",
            TokenKind::AndAnd => "AND_AND",
            TokenKind::OrOr => "OR_OR",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::Equal => "ASSIGN",
            TokenKind::Less => "LESS",
            TokenKind::Greater => "GREATER",
            TokenKind::Bang => "BANG",
            TokenKind::LParen => "L_PAREN",
            TokenKind::RParen => "R_PAREN",
            TokenKind::LBrace => "L_BRACE",
            TokenKind::RBrace => "R_BRACE",
            TokenKind::LBracket => "L_BRACKET",
            TokenKind::RBracket => "R_BRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Eof => "EOF",
        }
    }

    /// True for the operators allowed between the two sides of a condition.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Less
                | TokenKind::Greater
                | TokenKind::LessEq
                | TokenKind::GreaterEq
                | TokenKind::AndAnd
                | TokenKind::OrOr
        )
    }

    /// True for tokens that may stand in a name position.
    ///
    /// The grammar accepts reserved words where a name is expected (class
    /// names, assignment targets, factors), so both word kinds qualify.
    pub fn is_word(self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::Keyword)
    }

    /// True for integer and decimal literals.
    pub fn is_number(self) -> bool {
        matches!(self, TokenKind::IntLiteral | TokenKind::DecimalLiteral)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A token with its source text and location.
///
/// # Fields
///
/// - `kind`: the syntactic category
/// - `lexeme`: the exact source text (the end-marker uses `EOF`)
/// - `line`: 1-based line of the token's first character
/// - `col`: 1-based column of the token's first character
///
/// # Usage in Error Reporting
///
/// ```text
/// Expected '(' found 'x' at 3:11
///   while x > 0 )
///         ^
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The syntactic category of this token
    pub kind: TokenKind,

    /// Source text of the token
    pub lexeme: String,

    /// Line number in the source file (1-based)
    pub line: usize,

    /// Column number in the source file (1-based)
    pub col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            col,
        }
    }

    /// Builds the end-of-input marker at the given position.
    pub fn eof(line: usize, col: usize) -> Self {
        Self::new(TokenKind::Eof, "EOF", line, col)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// True when the token is a keyword or identifier spelled exactly `text`.
    ///
    /// String literals never match, even when their contents equal `text`.
    pub fn is_word(&self, text: &str) -> bool {
        self.kind.is_word() && self.lexeme == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} | {:<15} | L:{:<3} | C:{:<3}",
            self.kind.label(),
            self.lexeme,
            self.line,
            self.col
        )
    }
}

/// The ordered output of one lexer run.
///
/// A stream always holds exactly one [`TokenKind::Eof`] token and it is the
/// last element. The only constructor checks this, so every `TokenStream`
/// value upholds it.
///
/// ```rust
/// use mjc_syntax::{Token, TokenKind, TokenStream};
///
/// let stream = TokenStream::new(vec![
///     Token::new(TokenKind::Ident, "x", 1, 1),
///     Token::eof(1, 2),
/// ]).unwrap();
/// assert_eq!(stream.len(), 2);
/// assert_eq!(stream.eof().col, 2);
///
/// assert!(TokenStream::new(Vec::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Result<Self> {
        let last = tokens.len().saturating_sub(1);
        if let Some(early) = tokens[..last].iter().find(|t| t.is(TokenKind::Eof)) {
            return Err(Error::with_span(
                "end-marker before the last token",
                early.line,
                early.col,
            ));
        }
        match tokens.last() {
            Some(t) if t.is(TokenKind::Eof) => Ok(Self { tokens }),
            _ => error("token stream must end with an end-marker"),
        }
    }

    /// Appends the end-marker at `line`/`col` to `tokens`.
    ///
    /// Any end-marker already present in `tokens` is dropped, so the result
    /// always holds exactly one, in last position.
    pub fn terminated(mut tokens: Vec<Token>, line: usize, col: usize) -> Self {
        tokens.retain(|t| !t.is(TokenKind::Eof));
        tokens.push(Token::eof(line, col));
        Self { tokens }
    }

    /// The end-of-input marker.
    pub fn eof(&self) -> &Token {
        // The constructor guarantees a non-empty vector.
        &self.tokens[self.tokens.len() - 1]
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Deref for TokenStream {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
