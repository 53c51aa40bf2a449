//! Reserved words of the mjc subset.
//!
//! Membership is an exact, case-sensitive string match: `While` and `whilex`
//! are identifiers, only `while` is reserved.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Every word the lexer classifies as [`TokenKind::Keyword`](crate::TokenKind::Keyword).
///
/// The last two entries are project-specific reserved identifiers.
pub const RESERVED_WORDS: [&str; 26] = [
    "public", "private", "protected", "static", "final", "class", "void", "int", "double",
    "float", "boolean", "String", "if", "else", "while", "do", "for", "switch", "case", "break",
    "continue", "return", "new", "this", "Malek", "Leiticia",
];

/// Reserved words that may start a declaration.
pub const TYPE_KEYWORDS: [&str; 5] = ["int", "double", "float", "boolean", "String"];

fn reserved_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| RESERVED_WORDS.iter().copied().collect())
}

/// Returns true when `word` is exactly one of [`RESERVED_WORDS`].
///
/// ```rust
/// use mjc_syntax::keywords::is_reserved;
///
/// assert!(is_reserved("while"));
/// assert!(is_reserved("Malek"));
/// assert!(!is_reserved("While"));
/// assert!(!is_reserved("whi"));
/// ```
pub fn is_reserved(word: &str) -> bool {
    reserved_set().contains(word)
}

pub fn is_type_keyword(word: &str) -> bool {
    TYPE_KEYWORDS.contains(&word)
}
