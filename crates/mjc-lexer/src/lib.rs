//! mjc lexer: converts source text into tokens and lexical diagnostics.
//!
//! The lexer never gives up. Malformed input produces a [`Diagnostic`] and
//! scanning resumes right after the offending text, so every run returns a
//! [`TokenStream`] ending in exactly one end-marker.
pub mod automaton;

use mjc_syntax::error::{Diagnostic, ErrorKind};
use mjc_syntax::keywords::is_reserved;
use mjc_syntax::token::{Token, TokenKind, TokenStream};
use mjc_syntax::trace::{Component, TraceEvent, TraceSink};

use automaton::{CharClass, State, START};

const SEPARATORS: &str = "(){}[];,.";
const OPERATORS: &str = "+-*/%=<>!&|";

/// Result of one lexer run.
#[derive(Debug, Clone)]
pub struct LexOutput {
    pub tokens: TokenStream,
    /// Lexical diagnostics in detection order.
    pub diagnostics: Vec<Diagnostic>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Tokenize `src` without tracing.
pub fn tokenize(src: &str) -> LexOutput {
    Lexer::new(src).tokenize()
}

/// Character scanner that produces tokens with positions.
pub struct Lexer<'a> {
    src: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
    trace: Option<&'a mut dyn TraceSink>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            src: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            trace: None,
        }
    }

    /// Create a lexer that reports every token and diagnostic to `sink`.
    pub fn with_trace(input: &str, sink: &'a mut dyn TraceSink) -> Self {
        let mut lexer = Self::new(input);
        lexer.trace = Some(sink);
        lexer
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }
    fn peek_next(&self) -> Option<char> {
        self.src.get(self.pos + 1).copied()
    }
    fn advance(&mut self) -> Option<char> {
        let ch = self.src.get(self.pos).copied();
        if let Some(c) = ch {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        ch
    }

    fn emit(&mut self, kind: TokenKind, lexeme: String, line: usize, col: usize) {
        let token = Token::new(kind, lexeme, line, col);
        if let Some(sink) = self.trace.as_deref_mut() {
            sink.event(Component::Lexer, &TraceEvent::TokenProduced(token.clone()));
        }
        self.tokens.push(token);
    }

    fn report(&mut self, kind: ErrorKind, line: usize, col: usize) {
        let diag = Diagnostic::at(kind, line, col);
        if let Some(sink) = self.trace.as_deref_mut() {
            sink.event(Component::Lexer, &TraceEvent::Diagnostic(diag.clone()));
        }
        self.diagnostics.push(diag);
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek() {
            self.advance();
        }
    }

    /// Consumes `//...` up to, not including, the newline.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) {
        let start_line = self.line;
        let start_col = self.col;
        self.advance();
        self.advance();
        while let Some(c) = self.peek() {
            if c == '*' && self.peek_next() == Some('/') {
                self.advance();
                self.advance();
                return;
            }
            self.advance();
        }
        self.report(
            ErrorKind::UnterminatedComment { start_line },
            start_line,
            start_col,
        );
    }

    /// Runs the identifier automaton from the current position.
    fn read_word(&mut self) {
        let start_line = self.line;
        let start_col = self.col;
        let mut state: State = START;
        let mut s = String::new();
        while let Some(c) = self.peek() {
            match automaton::step(state, CharClass::of(c)) {
                Some(next) => {
                    state = next;
                    s.push(c);
                    self.advance();
                }
                None => break,
            }
        }
        debug_assert!(automaton::is_accepting(state));
        let kind = if is_reserved(&s) {
            TokenKind::Keyword
        } else {
            TokenKind::Ident
        };
        self.emit(kind, s, start_line, start_col);
    }

    fn read_number(&mut self) {
        let start_line = self.line;
        let start_col = self.col;
        let mut s = String::new();
        let mut kind = TokenKind::IntLiteral;
        self.take_digits(&mut s);
        // A point only belongs to the literal when a digit follows it.
        if self.peek() == Some('.') && self.peek_next().map_or(false, |c| c.is_ascii_digit()) {
            kind = TokenKind::DecimalLiteral;
            s.push('.');
            self.advance();
            self.take_digits(&mut s);
        }
        self.emit(kind, s, start_line, start_col);
    }

    fn take_digits(&mut self, s: &mut String) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                s.push(c);
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Scans a `"..."` or `'...'` literal. The lexeme is the raw text between
    /// the quotes; a backslash always swallows the character after it.
    fn read_string(&mut self) {
        let start_line = self.line;
        let start_col = self.col;
        let quote = match self.advance() {
            Some(q) => q,
            None => return,
        };
        let mut s = String::new();
        while let Some(c) = self.peek() {
            if c == quote {
                break;
            }
            s.push(c);
            self.advance();
            if c == '\\' {
                if let Some(escaped) = self.advance() {
                    s.push(escaped);
                }
            }
        }
        if self.peek().is_none() {
            self.report(ErrorKind::UnterminatedString, start_line, start_col);
            return;
        }
        self.advance();
        self.emit(TokenKind::StringLiteral, s, start_line, start_col);
    }

    fn read_operator(&mut self) {
        let line = self.line;
        let col = self.col;
        let Some(c) = self.advance() else { return };
        let double = match (c, self.peek()) {
            ('=', Some('=')) => Some(TokenKind::EqEq),
            ('!', Some('=')) => Some(TokenKind::NotEq),
            ('<', Some('=')) => Some(TokenKind::LessEq),
            ('>', Some('=')) => Some(TokenKind::GreaterEq),
            ('+', Some('+')) => Some(TokenKind::PlusPlus),
            ('-', Some('-')) => Some(TokenKind::MinusMinus),
            ('&', Some('&')) => Some(TokenKind::AndAnd),
            ('|', Some('|')) => Some(TokenKind::OrOr),
            _ => None,
        };
        if let Some(kind) = double {
            let Some(second) = self.advance() else { return };
            self.emit(kind, format!("{}{}", c, second), line, col);
            return;
        }
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '=' => TokenKind::Equal,
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            '!' => TokenKind::Bang,
            other => {
                self.report(ErrorKind::InvalidOperator(other), line, col);
                return;
            }
        };
        self.emit(kind, c.to_string(), line, col);
    }

    fn read_separator(&mut self) {
        let line = self.line;
        let col = self.col;
        let Some(c) = self.advance() else { return };
        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            other => {
                self.report(ErrorKind::InvalidSeparator(other), line, col);
                return;
            }
        };
        self.emit(kind, c.to_string(), line, col);
    }

    /// Tokenize the entire input into a stream ending with the end-marker.
    pub fn tokenize(mut self) -> LexOutput {
        loop {
            self.skip_whitespace();
            let Some(c) = self.peek() else { break };
            match c {
                '/' if self.peek_next() == Some('/') => self.skip_line_comment(),
                '/' if self.peek_next() == Some('*') => self.skip_block_comment(),
                c if automaton::starts_word(c) => self.read_word(),
                c if c.is_ascii_digit() => self.read_number(),
                '"' | '\'' => self.read_string(),
                c if SEPARATORS.contains(c) => self.read_separator(),
                c if OPERATORS.contains(c) => self.read_operator(),
                other => {
                    let (line, col) = (self.line, self.col);
                    self.report(ErrorKind::InvalidCharacter(other), line, col);
                    self.advance();
                }
            }
        }
        let eof = Token::eof(self.line, self.col);
        if let Some(sink) = self.trace.as_deref_mut() {
            sink.event(Component::Lexer, &TraceEvent::TokenProduced(eof.clone()));
        }
        LexOutput {
            tokens: TokenStream::terminated(self.tokens, eof.line, eof.col),
            diagnostics: self.diagnostics,
        }
    }
}
