//! Integration tests for scanning whole sources.
//!
//! These tests drive the public scanner API end to end: files on disk,
//! missing files, readers that fail part way through, and properties that
//! must hold for arbitrary input.

use std::io::{self, Read, Write};

use proptest::prelude::*;
use scanner::{
    errors::errors::ErrorImpl,
    lexer::{
        lexer::{tokenize, Scanner},
        tokens::{is_whitespace, Token, TokenKind},
    },
};
use tempfile::NamedTempFile;

fn write_source(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_scan_file() {
    let file = write_source("bool done := False;\nif (done != True) { x := x ** 2; }\n");
    let tokens: Vec<Token> = Scanner::open(file.path()).collect::<Result<_, _>>().unwrap();

    let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    assert_eq!(rendered[0], "Keyword    bool");
    assert_eq!(rendered[3], "Literal    False");
    assert_eq!(rendered[9], "Literal    True");
    assert_eq!(rendered[15], "Operator   **");
    assert_eq!(tokens.len(), 19);
}

#[test]
fn test_scan_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut scanner = Scanner::open(dir.path().join("absent.kay"));

    assert!(scanner.at_end());
    assert!(scanner.next_token().unwrap().is_none());
}

#[test]
fn test_scan_empty_file() {
    let file = write_source("");
    let mut scanner = Scanner::open(file.path());

    assert!(scanner.next_token().unwrap().is_none());
    assert!(scanner.at_end());
}

#[test]
fn test_scan_comment_file_without_newline() {
    let file = write_source("// only a comment");
    let tokens: Vec<Token> = Scanner::open(file.path()).collect::<Result<_, _>>().unwrap();

    assert!(tokens.is_empty());
}

/// Hands out its bytes, then fails every read after them.
struct FailingReader {
    data: &'static [u8],
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        }
        self.data.read(buf)
    }
}

#[test]
fn test_read_failure_is_fatal() {
    let mut scanner = Scanner::from_reader(FailingReader { data: b"abc def" });

    let first = scanner.next_token().unwrap().unwrap();
    assert_eq!(first.lexeme, "abc");

    let err = scanner.next_token().unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorImpl::ReadFailure {
            reason: "disk on fire".to_string()
        }
    );
    assert!(scanner.at_end());
    assert!(scanner.next_token().unwrap().is_none());
}

#[test]
fn test_iterator_stops_after_error() {
    let results: Vec<_> = Scanner::from_reader(FailingReader { data: b"x; y" }).collect();

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(results[2].is_err());
}

#[test]
fn test_invalid_utf8_is_reported() {
    let bytes: &[u8] = &[b'a', b' ', 0xC0, 0xAF];
    let results: Vec<_> = Scanner::from_reader(bytes).collect();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().lexeme, "a");
    assert_eq!(results[1].as_ref().unwrap_err().get_error_name(), "InvalidEncoding");
}

fn source_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        'a', 'b', 'Z', 'i', 'f', '0', '7', '9', '*', '-', '+', '<', '>', '|', '!', '&', '=', ':',
        '(', ')', '{', '}', ',', ';', '.', '_', '@', 'é', ' ', '\t', '\n', '\r', '\u{0C}',
    ])
}

fn source_text(with_slash: bool) -> impl Strategy<Value = String> {
    let chars = if with_slash {
        prop_oneof![9 => source_char(), 1 => Just('/')].boxed()
    } else {
        source_char().boxed()
    };
    prop::collection::vec(chars, 0..64).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn lexemes_reconstruct_source(source in source_text(false)) {
        let tokens = tokenize(&source).unwrap();
        let joined: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        let expected: String = source.chars().filter(|c| !is_whitespace(*c)).collect();

        prop_assert_eq!(joined, expected);
        prop_assert!(tokens.iter().all(|t| !t.lexeme.is_empty()));
    }

    #[test]
    fn rescanning_a_lexeme_keeps_its_kind(source in source_text(true)) {
        for token in tokenize(&source).unwrap() {
            let again = tokenize(&token.lexeme).unwrap();
            prop_assert_eq!(again, vec![token]);
        }
    }
}

#[test]
fn test_two_character_operators_never_split() {
    for op in ["<=", ">=", "!=", "==", ":=", "||", "&&", "**"] {
        for context in [op.to_string(), format!("a{op}b"), format!("1{op}2"), format!("({op})")] {
            let tokens = tokenize(&context).unwrap();
            let operator = tokens
                .iter()
                .find(|t| t.lexeme.starts_with(&op[..1]))
                .unwrap();

            assert_eq!(operator.kind, TokenKind::Operator, "in {context:?}");
            assert_eq!(operator.lexeme, op, "in {context:?}");
        }
    }
}
