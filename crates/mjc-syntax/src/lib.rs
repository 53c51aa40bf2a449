pub mod error;
pub mod keywords;
pub mod token;
pub mod trace;

pub use error::*;
pub use token::*;
pub use trace::{Component, Rule, TraceEvent, TraceSink};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::{is_reserved, is_type_keyword, RESERVED_WORDS};

    #[test]
    fn test_reserved_words_are_exact() {
        for word in RESERVED_WORDS {
            assert!(is_reserved(word), "{} should be reserved", word);
        }
        assert!(!is_reserved("string"));
        assert!(!is_reserved("WHILE"));
        assert!(!is_reserved("malek"));
        assert!(!is_reserved("publicity"));
        assert!(!is_reserved(""));
    }

    #[test]
    fn test_type_keywords_are_reserved() {
        for word in ["int", "double", "float", "boolean", "String"] {
            assert!(is_type_keyword(word));
            assert!(is_reserved(word));
        }
        assert!(!is_type_keyword("void"));
        assert!(!is_type_keyword("char"));
    }

    #[test]
    fn test_token_stream_requires_single_trailing_eof() {
        let ok = TokenStream::new(vec![Token::new(TokenKind::Ident, "x", 1, 1), Token::eof(1, 2)]);
        assert!(ok.is_ok());

        let missing = TokenStream::new(vec![Token::new(TokenKind::Ident, "x", 1, 1)]);
        assert!(missing.is_err());

        let not_last = TokenStream::new(vec![Token::eof(1, 1), Token::new(TokenKind::Ident, "x", 1, 1)]);
        let err = not_last.unwrap_err();
        assert_eq!((err.line, err.col), (Some(1), Some(1)));
        assert_eq!(err.to_string(), "end-marker before the last token at 1:1");

        let twice = TokenStream::new(vec![
            Token::new(TokenKind::Ident, "x", 1, 1),
            Token::eof(2, 4),
            Token::eof(3, 1),
        ]);
        let err = twice.unwrap_err();
        assert_eq!((err.line, err.col), (Some(2), Some(4)));

        let empty = TokenStream::new(Vec::new()).unwrap_err();
        assert_eq!(empty.line, None);
    }

    #[test]
    fn test_comparison_kinds() {
        let comparisons = [
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEq,
            TokenKind::GreaterEq,
            TokenKind::AndAnd,
            TokenKind::OrOr,
        ];
        for kind in comparisons {
            assert!(kind.is_comparison(), "{} should compare", kind);
        }
        assert!(!TokenKind::Equal.is_comparison());
        assert!(!TokenKind::Bang.is_comparison());
    }

    #[test]
    fn test_word_match_ignores_literals_and_eof() {
        assert!(Token::new(TokenKind::Keyword, "while", 1, 1).is_word("while"));
        assert!(Token::new(TokenKind::Ident, "main", 1, 1).is_word("main"));
        assert!(!Token::new(TokenKind::StringLiteral, "while", 1, 1).is_word("while"));
        assert!(!Token::eof(3, 1).is_word("EOF"));
    }

    #[test]
    fn test_diagnostic_display_and_phase() {
        let lex = Diagnostic::at(ErrorKind::InvalidOperator('&'), 2, 5);
        assert_eq!(lex.phase(), Phase::Lexical);
        assert_eq!(lex.to_string(), "invalid operator '&' at 2:5");

        let comment = Diagnostic::at(ErrorKind::UnterminatedComment { start_line: 4 }, 9, 1);
        assert!(comment.to_string().contains("line 4"));

        let syn = Diagnostic::at_end(ErrorKind::UnexpectedToken {
            expected: "'}'".into(),
            found: Found::EndOfInput,
        });
        assert_eq!(syn.phase(), Phase::Syntax);
        assert_eq!(syn.to_string(), "expected '}', found end of input (end of input)");
    }

    #[test]
    fn test_token_table_row() {
        let t = Token::new(TokenKind::Keyword, "while", 12, 5);
        let row = t.to_string();
        assert!(row.starts_with("KEYWORD"));
        assert!(row.contains("| while"));
        assert!(row.contains("L:12"));
        assert!(row.contains("C:5"));
    }
}
