//! Finite automaton recognizing identifiers and reserved words.
//!
//! Rows are states, columns are character classes. A `None` entry rejects the
//! character and ends the run; the longest accepted prefix is the lexeme.
//!
//! | state       | letter  | digit   | `_`     | other |
//! |-------------|---------|---------|---------|-------|
//! | 0 `START`   | 1       | reject  | 1       | reject|
//! | 1 `IN_WORD` | 1       | 1       | 1       | reject|

pub type State = usize;

pub const START: State = 0;
pub const IN_WORD: State = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter = 0,
    Digit = 1,
    Underscore = 2,
    Other = 3,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if c.is_alphabetic() {
            CharClass::Letter
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else if c == '_' {
            CharClass::Underscore
        } else {
            CharClass::Other
        }
    }
}

pub const TRANSITIONS: [[Option<State>; 4]; 2] = [
    [Some(IN_WORD), None, Some(IN_WORD), None],
    [Some(IN_WORD), Some(IN_WORD), Some(IN_WORD), None],
];

/// Next state from `state` on a character of class `class`, `None` on reject.
pub fn step(state: State, class: CharClass) -> Option<State> {
    TRANSITIONS.get(state).and_then(|row| row[class as usize])
}

pub fn is_accepting(state: State) -> bool {
    state == IN_WORD
}

/// True when `c` can begin a word, i.e. leaves the start state.
pub fn starts_word(c: char) -> bool {
    step(START, CharClass::of(c)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_state_rejects_digits() {
        assert_eq!(step(START, CharClass::Digit), None);
        assert_eq!(step(START, CharClass::Letter), Some(IN_WORD));
        assert_eq!(step(START, CharClass::Underscore), Some(IN_WORD));
        assert_eq!(step(START, CharClass::Other), None);
    }

    #[test]
    fn test_word_state_loops_until_other() {
        for class in [CharClass::Letter, CharClass::Digit, CharClass::Underscore] {
            assert_eq!(step(IN_WORD, class), Some(IN_WORD));
        }
        assert_eq!(step(IN_WORD, CharClass::Other), None);
        assert!(is_accepting(IN_WORD));
        assert!(!is_accepting(START));
    }

    #[test]
    fn test_char_classes() {
        assert_eq!(CharClass::of('a'), CharClass::Letter);
        assert_eq!(CharClass::of('é'), CharClass::Letter);
        assert_eq!(CharClass::of('7'), CharClass::Digit);
        assert_eq!(CharClass::of('_'), CharClass::Underscore);
        assert_eq!(CharClass::of('$'), CharClass::Other);
        assert!(starts_word('_'));
        assert!(!starts_word('9'));
    }
}
