//! Parser state, token cursor helpers and the top-level grammar rules.
//!
//! ```text
//! Program → Class
//! Class   → 'public' 'class' NAME '{' Method '}'
//! Method  → 'public' 'static' 'void' 'main' '(' 'String' '[' ']' NAME ')' Block
//! Block   → '{' StatementList '}'
//! ```

use mjc_syntax::error::{Diagnostic, ErrorKind, Found};
use mjc_syntax::token::{Token, TokenKind};
use mjc_syntax::trace::{Component, Rule, TraceEvent, TraceSink};

/// Deepest nesting of blocks and parenthesized expressions that is parsed.
/// Anything nested further is reported once and stepped over.
pub const MAX_DEPTH: usize = 256;

/// Verdict and diagnostics of one parser run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// True iff the cursor ended on the end-marker and nothing was reported.
    pub accepted: bool,
    /// Syntax diagnostics in detection order.
    pub diagnostics: Vec<Diagnostic>,
    /// Final cursor position.
    pub cursor: usize,
}

/// Run the `Program` rule over `tokens` from a fresh state.
pub fn parse(tokens: &[Token]) -> ParseOutcome {
    let mut parser = Parser::new(tokens);
    parser.parse_program();
    parser.finish()
}

/// Recursive-descent parser with one token of lookahead.
///
/// The cursor only moves forward. Rules never abort the run: a mismatch is
/// recorded as a [`Diagnostic`] and the rule carries on from wherever the
/// cursor stands.
pub struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) pos: usize,
    pub(crate) diagnostics: Vec<Diagnostic>,
    /// Blocks and parentheses currently open.
    pub(crate) depth: usize,
    pub(crate) trace: Option<&'a mut dyn TraceSink>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            diagnostics: Vec::new(),
            depth: 0,
            trace: None,
        }
    }

    /// Create a parser that reports rule entries, consumed tokens and
    /// diagnostics to `sink`.
    pub fn with_trace(tokens: &'a [Token], sink: &'a mut dyn TraceSink) -> Self {
        let mut parser = Self::new(tokens);
        parser.trace = Some(sink);
        parser
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// True when the cursor sits on the end-marker token.
    pub fn at_end_marker(&self) -> bool {
        matches!(self.current(), Some(t) if t.is(TokenKind::Eof))
    }

    pub fn finish(self) -> ParseOutcome {
        ParseOutcome {
            accepted: self.at_end_marker() && self.diagnostics.is_empty(),
            cursor: self.pos,
            diagnostics: self.diagnostics,
        }
    }

    // === Cursor helpers ===

    pub(crate) fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        matches!(self.current(), Some(t) if t.is(kind))
    }

    pub(crate) fn check_word(&self, text: &str) -> bool {
        matches!(self.current(), Some(t) if t.is_word(text))
    }

    /// True for any keyword or identifier, the tokens accepted as a name.
    pub(crate) fn check_name(&self) -> bool {
        matches!(self.current(), Some(t) if t.kind.is_word())
    }

    pub(crate) fn found(&self) -> Found {
        match self.current() {
            Some(t) if !t.is(TokenKind::Eof) => Found::lexeme(t.lexeme.as_str()),
            _ => Found::EndOfInput,
        }
    }

    /// Moves past the current token, if any.
    pub(crate) fn bump(&mut self, rule: Rule) {
        if let Some(token) = self.current() {
            self.emit(|| TraceEvent::TokenConsumed {
                rule,
                token: token.clone(),
            });
            self.pos += 1;
        }
    }

    pub(crate) fn enter(&mut self, rule: Rule) {
        self.emit(|| TraceEvent::RuleEntered(rule));
    }

    pub(crate) fn emit(&mut self, event: impl FnOnce() -> TraceEvent) {
        if let Some(sink) = self.trace.as_deref_mut() {
            sink.event(Component::Parser, &event());
        }
    }

    /// Records `kind` at the current token, or at end of input when the
    /// cursor has run past the last token.
    pub(crate) fn report(&mut self, kind: ErrorKind) {
        let diag = match self.current() {
            Some(t) => Diagnostic::at(kind, t.line, t.col),
            None => Diagnostic::at_end(kind),
        };
        self.emit(|| TraceEvent::Diagnostic(diag.clone()));
        self.diagnostics.push(diag);
    }

    pub(crate) fn report_expected(&mut self, expected: impl Into<String>) {
        let found = self.found();
        self.report(ErrorKind::UnexpectedToken {
            expected: expected.into(),
            found,
        });
    }

    /// Consumes a token of `kind` or records what was found instead.
    pub(crate) fn expect(&mut self, kind: TokenKind, rule: Rule) {
        if self.check(kind) {
            self.bump(rule);
        } else {
            self.report_expected(describe(kind));
        }
    }

    /// Consumes the word `text` or records what was found instead.
    pub(crate) fn expect_word(&mut self, text: &str, rule: Rule) {
        if self.check_word(text) {
            self.bump(rule);
        } else {
            self.report_expected(format!("'{}'", text));
        }
    }

    // === Top-level rules ===

    /// Program → Class
    ///
    /// Starts from cursor 0 with an empty diagnostic list and returns the
    /// verdict. Tokens left over after a clean `Class` are reported once, so
    /// an empty diagnostic list always means the input was fully consumed.
    pub fn parse_program(&mut self) -> bool {
        self.pos = 0;
        self.depth = 0;
        self.diagnostics.clear();

        self.enter(Rule::Program);
        self.parse_class();

        if self.diagnostics.is_empty() && !self.at_end_marker() {
            self.report_expected("end of input");
        }
        self.at_end_marker() && self.diagnostics.is_empty()
    }

    fn parse_class(&mut self) {
        self.enter(Rule::Class);
        self.expect_word("public", Rule::Class);
        self.expect_word("class", Rule::Class);

        if self.check_name() {
            self.bump(Rule::Class);
        } else {
            self.report(ErrorKind::MissingClassName);
        }

        self.expect(TokenKind::LBrace, Rule::Class);
        self.parse_method();
        self.expect(TokenKind::RBrace, Rule::Class);
    }

    fn parse_method(&mut self) {
        self.enter(Rule::Method);
        self.expect_word("public", Rule::Method);
        self.expect_word("static", Rule::Method);
        self.expect_word("void", Rule::Method);
        self.expect_word("main", Rule::Method);
        self.expect(TokenKind::LParen, Rule::Method);
        self.expect_word("String", Rule::Method);
        self.expect(TokenKind::LBracket, Rule::Method);
        self.expect(TokenKind::RBracket, Rule::Method);

        if self.check(TokenKind::Ident) {
            self.bump(Rule::Method);
        } else {
            self.report(ErrorKind::MissingParameterName);
        }

        self.expect(TokenKind::RParen, Rule::Method);
        self.parse_block();
    }

    pub(crate) fn parse_block(&mut self) {
        self.enter(Rule::Block);
        let opened = self.check(TokenKind::LBrace);
        if opened && !self.descend(Rule::Block, TokenKind::LBrace, TokenKind::RBrace) {
            return;
        }
        self.expect(TokenKind::LBrace, Rule::Block);
        self.parse_statement_list();
        self.expect(TokenKind::RBrace, Rule::Block);
        if opened {
            self.depth -= 1;
        }
    }

    /// Opens one nesting level at the current `open` token.
    ///
    /// Past [`MAX_DEPTH`] the level is not opened: the limit is reported,
    /// the bracketed region is skipped whole and `false` is returned.
    pub(crate) fn descend(&mut self, rule: Rule, open: TokenKind, close: TokenKind) -> bool {
        if self.depth < MAX_DEPTH {
            self.depth += 1;
            return true;
        }
        self.report(ErrorKind::NestingTooDeep { limit: MAX_DEPTH });
        let count = self.skip_balanced(open, close);
        self.emit(|| TraceEvent::TokensSkipped { rule, count });
        false
    }
}

/// Quoted source form of a punctuation kind, used in "expected" messages.
pub(crate) fn describe(kind: TokenKind) -> String {
    let text = match kind {
        TokenKind::LParen => "(",
        TokenKind::RParen => ")",
        TokenKind::LBrace => "{",
        TokenKind::RBrace => "}",
        TokenKind::LBracket => "[",
        TokenKind::RBracket => "]",
        TokenKind::Semicolon => ";",
        TokenKind::Comma => ",",
        TokenKind::Dot => ".",
        TokenKind::Equal => "=",
        TokenKind::PlusPlus => "++",
        TokenKind::MinusMinus => "--",
        TokenKind::Eof => return "end of input".to_string(),
        other => return other.label().to_lowercase(),
    };
    format!("'{}'", text)
}
