//! Condition and arithmetic expression rules.
//!
//! ```text
//! Condition  → Expression [CompOp Expression]
//! Expression → Term (('+' | '-') Term)*
//! Term       → Factor (('*' | '/' | '%') Factor)*
//! Factor     → NUMBER | NAME ['++' | '--'] | '(' Expression ')'
//! ```
//!
//! The repetitions are loops, so operators group to the left and `* / %`
//! bind tighter than `+ -`.

use mjc_syntax::error::ErrorKind;
use mjc_syntax::token::TokenKind;
use mjc_syntax::trace::Rule;

use crate::parser::Parser;

impl<'a> Parser<'a> {
    pub fn parse_condition(&mut self) {
        self.enter(Rule::Condition);
        self.parse_expression();

        if matches!(self.current(), Some(t) if t.kind.is_comparison()) {
            self.bump(Rule::Condition);
            self.parse_expression();
        }
    }

    pub fn parse_expression(&mut self) {
        self.enter(Rule::Expression);
        self.parse_term();
        while self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            self.bump(Rule::Expression);
            self.parse_term();
        }
    }

    fn parse_term(&mut self) {
        self.enter(Rule::Term);
        self.parse_factor();
        while self.check(TokenKind::Star)
            || self.check(TokenKind::Slash)
            || self.check(TokenKind::Percent)
        {
            self.bump(Rule::Term);
            self.parse_factor();
        }
    }

    fn parse_factor(&mut self) {
        self.enter(Rule::Factor);
        let Some(token) = self.current() else {
            self.report(ErrorKind::InvalidFactor);
            return;
        };

        if token.kind.is_number() {
            self.bump(Rule::Factor);
        } else if token.kind.is_word() {
            self.bump(Rule::Factor);
            if self.check(TokenKind::PlusPlus) || self.check(TokenKind::MinusMinus) {
                self.bump(Rule::Factor);
            }
        } else if token.is(TokenKind::LParen) {
            if !self.descend(Rule::Factor, TokenKind::LParen, TokenKind::RParen) {
                return;
            }
            self.bump(Rule::Factor);
            self.parse_expression();
            self.expect(TokenKind::RParen, Rule::Factor);
            self.depth -= 1;
        } else {
            self.report(ErrorKind::InvalidFactor);
        }
    }
}
