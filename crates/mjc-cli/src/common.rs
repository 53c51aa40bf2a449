use owo_colors::OwoColorize;

use mjc_syntax::error::{ErrorKind, Found};

use crate::report::Painter;

fn help(painter: &Painter, text: &str) {
    eprintln!("{}", painter.paint(&format!("Help: {}", text), |s| s.yellow().to_string()));
}

fn note(painter: &Painter, text: &str) {
    eprintln!("    {}", painter.paint(text, |s| s.bright_black().to_string()));
}

pub fn provide_error_suggestions(painter: &Painter, kind: &ErrorKind) {
    match kind {
        // Lexical errors
        ErrorKind::UnterminatedString => {
            help(painter, "String is missing its closing quote.");
            note(painter, "Make sure every opening quote has a matching closing quote");
        }
        ErrorKind::UnterminatedComment { .. } => {
            help(painter, "Block comment is never closed.");
            note(painter, "Every /* needs a matching */");
        }
        ErrorKind::InvalidCharacter(_) => {
            help(painter, "This character is not part of the language.");
            note(painter, "Remove it or place it inside a string or comment");
        }
        ErrorKind::InvalidOperator(c) => {
            help(painter, "Operator is not recognized.");
            match c {
                '&' => note(painter, "Did you mean '&&'?"),
                '|' => note(painter, "Did you mean '||'?"),
                _ => note(painter, "Valid operators: + - * / % = == != < <= > >= ! ++ -- && ||"),
            }
        }
        ErrorKind::InvalidSeparator(_) => {
            help(painter, "Separator is not recognized.");
            note(painter, "Valid separators: ( ) { } [ ] ; , .");
        }

        // Syntax errors
        ErrorKind::UnexpectedToken { expected, found } => {
            help(painter, "Missing required syntax element.");
            if matches!(found, Found::EndOfInput) {
                note(painter, "The file ends early: check that every '{' and '(' is closed");
            } else if expected == "';'" {
                note(painter, "Every declaration and assignment ends with ';'");
            } else if expected == "'('" || expected == "')'" {
                note(painter, "Check if parentheses are balanced");
                note(painter, "Example: while (i < 10) { i++; }");
            } else if expected == "'=', '++' or '--'" {
                note(painter, "Use '=' for assignment and '==' for comparison");
            } else if expected == "end of input" {
                note(painter, "Only one class is allowed: remove the code after its closing '}'");
            }
        }
        ErrorKind::MissingClassName => {
            help(painter, "A class needs a name.");
            note(painter, "Example: public class Main { ... }");
        }
        ErrorKind::MissingIdentifier | ErrorKind::MissingVariableName => {
            help(painter, "Expected a variable name.");
            note(painter, "Example: int count = 0;");
        }
        ErrorKind::MissingParameterName => {
            help(painter, "main needs a parameter name.");
            note(painter, "Example: public static void main(String[] args)");
        }
        ErrorKind::InvalidTypeKeyword => {
            help(painter, "Declarations start with a type.");
            note(painter, "Available types: int, double, float, boolean, String");
        }
        ErrorKind::InvalidStatement(_) => {
            help(painter, "Statements start with a type, a variable name, 'while', 'if' or 'for'.");
        }
        ErrorKind::NestingTooDeep { limit } => {
            help(painter, "Blocks or parentheses are nested too deeply.");
            note(
                painter,
                &format!("At most {} levels are checked, split the code into flatter parts", limit),
            );
        }
        ErrorKind::InvalidFactor => {
            help(painter, "Expected a value.");
            note(painter, "Example: count + 1, (a * b) % 2, i++");
        }
    }
}
