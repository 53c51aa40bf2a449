//! Statement rules.
//!
//! ```text
//! StatementList → Statement*            (stops at '}' or the end-marker)
//! Statement     → While | IfSkip | ForSkip | Declaration | Assignment
//! Declaration   → Type NAME '=' Expression ';'
//! Type          → 'int' | 'double' | 'float' | 'boolean' | 'String'
//! Assignment    → NAME AssignOp ';'
//! AssignOp      → '=' Expression | '++' | '--'
//! While         → 'while' '(' Condition ')' Block
//! ```
//!
//! `if` and `for` are recognized but not validated: their bracketed parts are
//! stepped over by depth counting.

use mjc_syntax::error::ErrorKind;
use mjc_syntax::keywords::is_type_keyword;
use mjc_syntax::token::TokenKind;
use mjc_syntax::trace::{Rule, TraceEvent};

use crate::parser::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_statement_list(&mut self) {
        self.enter(Rule::StatementList);
        while let Some(token) = self.current() {
            if token.is(TokenKind::RBrace) || token.is(TokenKind::Eof) {
                break;
            }
            self.parse_statement();
        }
    }

    /// Parses one statement chosen by the current token.
    ///
    /// `while`, `if`, `for` and the type keywords only dispatch on word
    /// tokens. A string literal whose text is `"while"` is not a keyword and
    /// falls through to the invalid-statement branch, unlike a check on the
    /// lexeme alone.
    ///
    /// Every branch consumes at least one token, so a caller looping on this
    /// rule always makes progress.
    pub fn parse_statement(&mut self) {
        self.enter(Rule::Statement);
        let Some(token) = self.current() else {
            return;
        };

        if token.is_word("while") {
            self.parse_while();
        } else if token.is_word("if") {
            self.skip_construct(Rule::IfSkip);
        } else if token.is_word("for") {
            self.skip_construct(Rule::ForSkip);
        } else if token.is(TokenKind::Keyword) && is_type_keyword(&token.lexeme) {
            self.parse_declaration();
        } else if token.kind.is_word() {
            self.parse_assignment();
        } else {
            self.report(ErrorKind::InvalidStatement(token.lexeme.clone()));
            self.pos += 1;
            self.emit(|| TraceEvent::TokensSkipped {
                rule: Rule::Statement,
                count: 1,
            });
        }
    }

    fn parse_declaration(&mut self) {
        self.enter(Rule::Declaration);
        self.parse_type();

        if self.check_name() {
            self.bump(Rule::Declaration);
        } else {
            self.report(ErrorKind::MissingVariableName);
        }

        self.expect(TokenKind::Equal, Rule::Declaration);
        self.parse_expression();
        self.expect(TokenKind::Semicolon, Rule::Declaration);
    }

    fn parse_type(&mut self) {
        self.enter(Rule::Type);
        match self.current() {
            Some(t) if t.is(TokenKind::Keyword) && is_type_keyword(&t.lexeme) => {
                self.bump(Rule::Type)
            }
            _ => self.report(ErrorKind::InvalidTypeKeyword),
        }
    }

    fn parse_assignment(&mut self) {
        self.enter(Rule::Assignment);
        if self.check_name() {
            self.bump(Rule::Assignment);
        } else {
            self.report(ErrorKind::MissingIdentifier);
            return;
        }

        self.parse_assign_op();
        self.expect(TokenKind::Semicolon, Rule::Assignment);
    }

    fn parse_assign_op(&mut self) {
        self.enter(Rule::AssignOp);
        if self.check(TokenKind::Equal) {
            self.bump(Rule::AssignOp);
            self.parse_expression();
        } else if self.check(TokenKind::PlusPlus) || self.check(TokenKind::MinusMinus) {
            self.bump(Rule::AssignOp);
        } else {
            self.report_expected("'=', '++' or '--'");
        }
    }

    /// While → 'while' '(' Condition ')' Block
    ///
    /// A missing `while`, `(` or `)` records one diagnostic and ends the rule
    /// on the spot, leaving the cursor on the offending token.
    pub fn parse_while(&mut self) {
        self.enter(Rule::While);

        if !self.check_word("while") {
            self.report_expected("'while'");
            return;
        }
        self.bump(Rule::While);

        if !self.check(TokenKind::LParen) {
            self.report_expected("'('");
            return;
        }
        self.bump(Rule::While);

        self.parse_condition();

        if !self.check(TokenKind::RParen) {
            self.report_expected("')'");
            return;
        }
        self.bump(Rule::While);

        self.parse_block();
    }

    /// Steps over an `if`/`for` without validating it.
    ///
    /// After the keyword, a `(` group and then a `{` group are skipped when
    /// present, each by balancing its own bracket pair. The depth loops stop
    /// when tokens run out, which may include stepping over the end-marker.
    fn skip_construct(&mut self, rule: Rule) {
        self.enter(rule);
        self.bump(rule);

        let mut skipped = 0;
        if self.check(TokenKind::LParen) {
            skipped += self.skip_balanced(TokenKind::LParen, TokenKind::RParen);
        }
        if self.check(TokenKind::LBrace) {
            skipped += self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace);
        }
        if skipped > 0 {
            self.emit(|| TraceEvent::TokensSkipped {
                rule,
                count: skipped,
            });
        }
    }

    /// Consumes an opening bracket and everything up to its matching closer.
    /// Returns the number of tokens consumed.
    pub(crate) fn skip_balanced(&mut self, open: TokenKind, close: TokenKind) -> usize {
        let start = self.pos;
        self.pos += 1;
        let mut depth = 1usize;
        while let Some(token) = self.current() {
            if depth == 0 {
                break;
            }
            if token.is(open) {
                depth += 1;
            } else if token.is(close) {
                depth -= 1;
            }
            self.pos += 1;
        }
        self.pos - start
    }
}
