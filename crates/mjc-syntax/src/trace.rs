//! Structured trace hook for the lexer and parser.
//!
//! Both components accept an optional [`TraceSink`]. When one is installed
//! they report every token produced, every grammar rule entered, every token
//! consumed and every diagnostic recorded. Without a sink no event is built.
//!
//! ```rust
//! use mjc_syntax::trace::{Component, RecordingTrace, Rule, TraceEvent, TraceSink};
//!
//! let mut sink = RecordingTrace::default();
//! sink.event(Component::Parser, &TraceEvent::RuleEntered(Rule::While));
//!
//! assert_eq!(sink.rules_entered(), vec![Rule::While]);
//! ```

use std::fmt;

use crate::error::Diagnostic;
use crate::token::Token;

/// Which half of the pipeline emitted an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Lexer,
    Parser,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Lexer => f.write_str("lexer"),
            Component::Parser => f.write_str("parser"),
        }
    }
}

/// One variant per grammar rule of the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Program,
    Class,
    Method,
    Block,
    StatementList,
    Statement,
    Declaration,
    Type,
    Assignment,
    AssignOp,
    While,
    IfSkip,
    ForSkip,
    Condition,
    Expression,
    Term,
    Factor,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Program => "PROGRAM",
            Rule::Class => "CLASS",
            Rule::Method => "METHOD",
            Rule::Block => "BLOCK",
            Rule::StatementList => "STATEMENTS",
            Rule::Statement => "STATEMENT",
            Rule::Declaration => "DECLARATION",
            Rule::Type => "TYPE",
            Rule::Assignment => "ASSIGNMENT",
            Rule::AssignOp => "ASSIGN_OP",
            Rule::While => "WHILE",
            Rule::IfSkip => "IF",
            Rule::ForSkip => "FOR",
            Rule::Condition => "CONDITION",
            Rule::Expression => "EXPRESSION",
            Rule::Term => "TERM",
            Rule::Factor => "FACTOR",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// The lexer appended a token to its stream.
    TokenProduced(Token),
    RuleEntered(Rule),
    /// The parser moved its cursor past `token` while inside `rule`.
    TokenConsumed { rule: Rule, token: Token },
    /// Skip-recovery stepped over `count` tokens without validating them.
    TokensSkipped { rule: Rule, count: usize },
    Diagnostic(Diagnostic),
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::TokenProduced(t) => {
                write!(f, "token {} '{}' at {}:{}", t.kind, t.lexeme, t.line, t.col)
            }
            TraceEvent::RuleEntered(rule) => write!(f, "[{}] enter", rule),
            TraceEvent::TokenConsumed { rule, token } => {
                write!(f, "[{}] consumed '{}' at {}:{}", rule, token.lexeme, token.line, token.col)
            }
            TraceEvent::TokensSkipped { rule, count } => {
                write!(f, "[{}] skipped {} token(s)", rule, count)
            }
            TraceEvent::Diagnostic(d) => write!(f, "error: {}", d),
        }
    }
}

/// Receiver of trace events.
pub trait TraceSink {
    fn event(&mut self, component: Component, event: &TraceEvent);
}

/// A sink that keeps every event, mostly useful in tests.
#[derive(Debug, Default)]
pub struct RecordingTrace {
    pub events: Vec<(Component, TraceEvent)>,
}

impl RecordingTrace {
    pub fn rules_entered(&self) -> Vec<Rule> {
        self.events
            .iter()
            .filter_map(|(_, e)| match e {
                TraceEvent::RuleEntered(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    /// Lexemes consumed by the parser while inside `rule`, in order.
    pub fn consumed_in(&self, rule: Rule) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|(_, e)| match e {
                TraceEvent::TokenConsumed { rule: r, token } if *r == rule => {
                    Some(token.lexeme.as_str())
                }
                _ => None,
            })
            .collect()
    }

    pub fn from_component(&self, component: Component) -> impl Iterator<Item = &TraceEvent> {
        self.events
            .iter()
            .filter(move |(c, _)| *c == component)
            .map(|(_, e)| e)
    }
}

impl TraceSink for RecordingTrace {
    fn event(&mut self, component: Component, event: &TraceEvent) {
        self.events.push((component, event.clone()));
    }
}
