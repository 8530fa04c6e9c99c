use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("integer");
        set.insert("bool");
        set.insert("main");
        set
    };

    pub static ref BOOLEAN_LITERALS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("true");
        set.insert("false");
        set.insert("True");
        set.insert("False");
        set
    };

    /// Second character of every two-character operator, keyed on the first.
    pub static ref OPERATOR_PAIRS: HashMap<char, char> = {
        let mut map = HashMap::new();
        map.insert('<', '=');
        map.insert('>', '=');
        map.insert('!', '=');
        map.insert('=', '=');
        map.insert(':', '=');
        map.insert('|', '|');
        map.insert('&', '&');
        map.insert('*', '*');
        map
    };
}

pub const OPERATOR_STARTS: [char; 11] = ['*', '-', '+', '<', '>', '|', '!', '&', '=', '/', ':'];

pub const SEPARATORS: [char; 6] = ['(', ')', '{', '}', ',', ';'];

/// Operator-start characters that are only legal as the first half of a pair.
pub const UNPAIRED_ILLEGAL: [char; 4] = ['=', ':', '|', '&'];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Literal,
    Operator,
    Separator,
    /// Anything malformed or unrecognised.
    Other,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::Literal => "Literal",
            TokenKind::Operator => "Operator",
            TokenKind::Separator => "Separator",
            TokenKind::Other => "Other",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<10} {}", self.kind, self.lexeme)
    }
}

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\u{0C}')
}

pub fn is_end_of_line(c: char) -> bool {
    matches!(c, '\r' | '\n' | '\u{0C}')
}

pub fn is_operator_start(c: char) -> bool {
    OPERATOR_STARTS.contains(&c)
}

pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// End of input is also a boundary; callers holding an `Option<char>` check that themselves.
pub fn is_token_boundary(c: char) -> bool {
    is_whitespace(c) || is_operator_start(c) || is_separator(c)
}

/// Classifies a complete run of letters and digits that started with a letter.
pub fn classify_word(word: &str) -> TokenKind {
    if KEYWORDS.contains(word) {
        TokenKind::Keyword
    } else if BOOLEAN_LITERALS.contains(word) {
        TokenKind::Literal
    } else {
        TokenKind::Identifier
    }
}
