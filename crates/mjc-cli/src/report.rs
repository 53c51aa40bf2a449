//! Text and JSON rendering of an [`Analysis`].

use std::path::Path;

use owo_colors::OwoColorize;
use serde::Serialize;

use mjc_syntax::error::{Diagnostic, Phase};
use mjc_syntax::token::TokenStream;

use crate::common::provide_error_suggestions;
use crate::Analysis;

/// Applies colors only when they are enabled.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn paint(&self, s: &str, style: impl FnOnce(&str) -> String) -> String {
        if self.color {
            style(s)
        } else {
            s.to_string()
        }
    }
}

fn rule(ch: char) -> String {
    ch.to_string().repeat(70)
}

fn print_token_table(painter: &Painter, tokens: &TokenStream) {
    println!("{}", rule('='));
    println!("{}", painter.paint("TOKENS", |s| s.bold().to_string()));
    println!("{}", rule('='));
    println!("{:<20} | {:<15} | {:<6} | {:<6}", "TYPE", "VALUE", "LINE", "COL");
    println!("{}", rule('-'));
    for token in tokens {
        println!("{}", token);
    }
    println!("{}", rule('='));
    println!("Total : {} tokens\n", tokens.len());
}

/// Prints one diagnostic with a source excerpt and a caret under its column.
fn render_diagnostic(painter: &Painter, source: &str, diag: &Diagnostic) {
    let kind = match diag.phase() {
        Phase::Lexical => "Lexical error",
        Phase::Syntax => "Syntax error",
    };
    eprintln!(
        "{}: {}",
        painter.paint(kind, |s| s.red().bold().to_string()),
        painter.paint(&diag.kind.to_string(), |s| s.red().to_string())
    );
    match (diag.line, diag.col) {
        (Some(line), Some(col)) => {
            eprintln!("  --> line {}, column {}", line, col);
            if let Some(src_line) = source.lines().nth(line.saturating_sub(1)) {
                let line_num_str = format!("{:3} | ", line);
                eprintln!("     |");
                eprintln!(
                    "{}{}",
                    painter.paint(&line_num_str, |s| s.bright_black().to_string()),
                    src_line
                );

                let mut marker = String::new();
                marker.push_str(&" ".repeat(line_num_str.len()));
                if col > 1 {
                    marker.push_str(&" ".repeat(col - 1));
                }
                marker.push('^');
                eprintln!(
                    "{}{}",
                    painter.paint(&marker, |s| s.red().to_string()),
                    painter.paint(" error here", |s| s.red().to_string())
                );
                eprintln!("     |");
            }
        }
        _ => eprintln!("  --> end of input"),
    }
    provide_error_suggestions(painter, &diag.kind);
}

fn print_diagnostics(painter: &Painter, source: &str, title: &str, diagnostics: &[Diagnostic]) {
    eprintln!("{}", rule('='));
    eprintln!("{}", painter.paint(title, |s| s.red().bold().to_string()));
    eprintln!("{}", rule('='));
    for diag in diagnostics {
        render_diagnostic(painter, source, diag);
    }
    eprintln!("Total : {} errors\n", diagnostics.len());
}

pub fn print_text(
    painter: &Painter,
    path: &Path,
    source: &str,
    analysis: &Analysis,
    show_tokens: bool,
) {
    println!("File : {}", path.display());
    println!("Size : {} characters\n", source.chars().count());

    if show_tokens {
        print_token_table(painter, &analysis.lexed.tokens);
    }

    let lexical = &analysis.lexed.diagnostics;
    if lexical.is_empty() {
        println!("{}", painter.paint("no lexical errors", |s| s.green().to_string()));
    } else {
        print_diagnostics(painter, source, "LEXICAL ERRORS", lexical);
        eprintln!(
            "{}",
            painter.paint("syntax analysis skipped: lexical errors", |s| s
                .yellow()
                .to_string())
        );
        return;
    }

    let Some(outcome) = &analysis.syntax else {
        return;
    };

    if outcome.diagnostics.is_empty() {
        println!("{}", painter.paint("no syntax errors", |s| s.green().to_string()));
    } else {
        print_diagnostics(painter, source, "SYNTAX ERRORS", &outcome.diagnostics);
    }

    if outcome.accepted {
        println!(
            "{}",
            painter.paint("PROGRAM ACCEPTED", |s| s.green().bold().to_string())
        );
    } else {
        println!(
            "{}",
            painter.paint("PROGRAM REJECTED", |s| s.red().bold().to_string())
        );
    }
}

#[derive(Serialize)]
struct SyntaxReport<'a> {
    accepted: bool,
    errors: &'a [Diagnostic],
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: String,
    tokens: &'a TokenStream,
    lexical_errors: &'a [Diagnostic],
    /// Absent when the syntax phase was skipped.
    syntax: Option<SyntaxReport<'a>>,
}

pub fn print_json(path: &Path, analysis: &Analysis) -> serde_json::Result<()> {
    let report = JsonReport {
        file: path.display().to_string(),
        tokens: &analysis.lexed.tokens,
        lexical_errors: &analysis.lexed.diagnostics,
        syntax: analysis.syntax.as_ref().map(|outcome| SyntaxReport {
            accepted: outcome.accepted,
            errors: &outcome.diagnostics,
        }),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
