mod common;
mod report;

use std::fs;
use std::path::PathBuf;

use clap::{Parser as ClapParser, ValueEnum};
use mjc_lexer::{LexOutput, Lexer};
use mjc_parser::{ParseOutcome, Parser};
use mjc_syntax::trace::{Component, TraceEvent, TraceSink};
use owo_colors::OwoColorize;

use report::Painter;

#[derive(ClapParser, Debug)]
#[command(
    name = "mjc",
    version,
    about = "Check the lexical and syntactic validity of a Java teaching-subset file"
)]
struct Cli {
    /// Source file to check
    #[arg(default_value = "test.java")]
    file: PathBuf,

    /// Print the table of recognized tokens
    #[arg(long = "tokens", default_value_t = false)]
    tokens: bool,

    /// Stop after the lexical phase
    #[arg(long = "lex-only", default_value_t = false)]
    lex_only: bool,

    /// Print every lexer and parser trace event to stderr
    #[arg(
        long = "trace",
        env = "MJC_TRACE",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    trace: bool,

    /// Report format
    #[arg(long = "format", value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Disable colored output
    #[arg(long = "no-color", default_value_t = false)]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Everything the driver learned about one source file.
pub struct Analysis {
    pub lexed: LexOutput,
    /// `None` when the syntax phase did not run.
    pub syntax: Option<ParseOutcome>,
}

impl Analysis {
    pub fn succeeded(&self, lex_only: bool) -> bool {
        if self.lexed.has_errors() {
            return false;
        }
        match &self.syntax {
            Some(outcome) => outcome.accepted,
            None => lex_only,
        }
    }
}

/// Prints trace events to stderr as they happen.
struct StderrTrace {
    painter: Painter,
}

impl TraceSink for StderrTrace {
    fn event(&mut self, component: Component, event: &TraceEvent) {
        let tag = format!("[{}]", component);
        let line = event.to_string();
        match event {
            TraceEvent::Diagnostic(_) => eprintln!(
                "{} {}",
                self.painter.paint(&tag, |s| s.bright_black().to_string()),
                self.painter.paint(&line, |s| s.red().to_string())
            ),
            _ => eprintln!(
                "{} {}",
                self.painter.paint(&tag, |s| s.bright_black().to_string()),
                line
            ),
        }
    }
}

/// Runs the lexer and, when it reported nothing, the parser.
fn analyze(src: &str, cli: &Cli, painter: Painter) -> Analysis {
    let mut tracer = StderrTrace { painter };

    let lexed = if cli.trace {
        Lexer::with_trace(src, &mut tracer).tokenize()
    } else {
        Lexer::new(src).tokenize()
    };

    // Syntax diagnostics over a damaged token stream are not trustworthy.
    if lexed.has_errors() || cli.lex_only {
        return Analysis {
            lexed,
            syntax: None,
        };
    }

    let syntax = {
        let mut parser = if cli.trace {
            Parser::with_trace(&lexed.tokens, &mut tracer)
        } else {
            Parser::new(&lexed.tokens)
        };
        parser.parse_program();
        parser.finish()
    };

    Analysis {
        lexed,
        syntax: Some(syntax),
    }
}

fn main() {
    let cli = Cli::parse();
    let painter = Painter::new(!cli.no_color && cli.format == Format::Text);

    let src = match fs::read_to_string(&cli.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!(
                "{}: {}",
                painter.paint("error", |s| s.red().bold().to_string()),
                painter.paint(
                    &format!("Failed to read {}: {}", cli.file.display(), e),
                    |s| s.red().to_string()
                )
            );
            std::process::exit(1);
        }
    };

    let analysis = analyze(&src, &cli, painter);

    match cli.format {
        Format::Text => report::print_text(&painter, &cli.file, &src, &analysis, cli.tokens),
        Format::Json => {
            if let Err(e) = report::print_json(&cli.file, &analysis) {
                eprintln!(
                    "{}: {}",
                    painter.paint("error", |s| s.red().bold().to_string()),
                    e
                );
                std::process::exit(1);
            }
        }
    }

    if !analysis.succeeded(cli.lex_only) {
        std::process::exit(1);
    }
}
