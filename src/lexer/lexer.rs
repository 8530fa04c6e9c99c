use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use tracing::trace;

use crate::{errors::errors::Error, MK_TOKEN};

use super::{
    source::CharacterSource,
    tokens::{
        classify_word, is_digit, is_end_of_line, is_letter, is_operator_start, is_separator,
        is_token_boundary, is_whitespace, Token, TokenKind, OPERATOR_PAIRS, UNPAIRED_ILLEGAL,
    },
};

/// Pull-based scanner producing one [`Token`] per call.
///
/// `lookahead` always holds the first character not yet claimed by a
/// produced token; `None` is the end-of-input sentinel and never reverts.
pub struct Scanner<R> {
    source: CharacterSource<R>,
    lookahead: Option<char>,
}

impl Scanner<BufReader<File>> {
    /// Never fails: a file that cannot be opened gives a scanner that is already at the end.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Scanner::new(CharacterSource::open(path))
    }
}

impl<R: Read> Scanner<R> {
    pub fn from_reader(input: R) -> Self {
        Scanner::new(CharacterSource::new(input))
    }

    pub fn new(source: CharacterSource<R>) -> Self {
        // A blank lookahead is skipped as whitespace on the first call,
        // which is what pulls in the first real character.
        let lookahead = if source.at_end() { None } else { Some(' ') };

        Scanner { source, lookahead }
    }

    pub fn at_end(&self) -> bool {
        self.lookahead.is_none()
    }

    /// Returns the next token, or `Ok(None)` once the input is used up.
    ///
    /// Malformed input never errors; it comes back as [`TokenKind::Other`].
    /// Only a failing source produces `Err`, after which the scanner is at
    /// the end.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        loop {
            self.skip_whitespace()?;

            let Some(c) = self.lookahead else {
                return Ok(None);
            };

            if c == '/' {
                self.advance()?;
                if self.lookahead == Some('/') {
                    self.skip_line_comment()?;
                    continue;
                }
                return Ok(Some(self.emit(MK_TOKEN!(TokenKind::Operator, String::from("/")))));
            }

            let token = if is_operator_start(c) {
                self.scan_operator(c)?
            } else if is_separator(c) {
                self.scan_single(TokenKind::Separator)?
            } else if is_letter(c) {
                self.scan_word()?
            } else if is_digit(c) {
                self.scan_number(String::new())?
            } else {
                self.scan_single(TokenKind::Other)?
            };

            return Ok(Some(self.emit(token)));
        }
    }

    fn emit(&self, token: Token) -> Token {
        trace!(kind = %token.kind, lexeme = %token.lexeme, "scanned token");
        token
    }

    fn advance(&mut self) -> Result<(), Error> {
        match self.source.read_next() {
            Ok(next) => {
                self.lookahead = next;
                Ok(())
            }
            Err(err) => {
                self.lookahead = None;
                Err(err)
            }
        }
    }

    /// Moves the lookahead into `lexeme` and reads the next character.
    fn bump(&mut self, lexeme: &mut String) -> Result<(), Error> {
        if let Some(c) = self.lookahead {
            lexeme.push(c);
        }
        self.advance()
    }

    fn bump_while(&mut self, lexeme: &mut String, accept: fn(char) -> bool) -> Result<(), Error> {
        while self.lookahead.is_some_and(accept) {
            self.bump(lexeme)?;
        }
        Ok(())
    }

    fn at_boundary(&self) -> bool {
        self.lookahead.map_or(true, is_token_boundary)
    }

    fn skip_whitespace(&mut self) -> Result<(), Error> {
        while self.lookahead.is_some_and(is_whitespace) {
            self.advance()?;
        }
        Ok(())
    }

    /// Called with the second `/` as lookahead. Stops before the line break.
    fn skip_line_comment(&mut self) -> Result<(), Error> {
        let mut elided = 1;
        while self.lookahead.is_some_and(|c| !is_end_of_line(c)) {
            self.advance()?;
            elided += 1;
        }
        trace!(elided, "skipped comment");
        Ok(())
    }

    fn scan_single(&mut self, kind: TokenKind) -> Result<Token, Error> {
        let mut lexeme = String::with_capacity(1);
        self.bump(&mut lexeme)?;
        Ok(MK_TOKEN!(kind, lexeme))
    }

    fn scan_operator(&mut self, first: char) -> Result<Token, Error> {
        let mut lexeme = String::with_capacity(2);
        self.bump(&mut lexeme)?;

        if let Some(&second) = OPERATOR_PAIRS.get(&first) {
            if self.lookahead == Some(second) {
                self.bump(&mut lexeme)?;
                return Ok(MK_TOKEN!(TokenKind::Operator, lexeme));
            }
        }

        if first == '-' && self.lookahead.is_some_and(is_digit) {
            return self.scan_number(lexeme);
        }

        if UNPAIRED_ILLEGAL.contains(&first) {
            Ok(MK_TOKEN!(TokenKind::Other, lexeme))
        } else {
            Ok(MK_TOKEN!(TokenKind::Operator, lexeme))
        }
    }

    fn scan_word(&mut self) -> Result<Token, Error> {
        let mut lexeme = String::new();
        self.bump_while(&mut lexeme, |c| is_letter(c) || is_digit(c))?;

        if !self.at_boundary() {
            return self.salvage(lexeme);
        }

        let kind = classify_word(&lexeme);
        Ok(MK_TOKEN!(kind, lexeme))
    }

    /// `lexeme` is empty or holds a leading `-`.
    fn scan_number(&mut self, mut lexeme: String) -> Result<Token, Error> {
        self.bump_while(&mut lexeme, is_digit)?;

        if self.lookahead == Some('.') {
            // decimals are not literals; swallow everything up to whitespace
            self.bump_while(&mut lexeme, |c| !is_whitespace(c))?;
            return Ok(MK_TOKEN!(TokenKind::Other, lexeme));
        }

        if !self.at_boundary() {
            return self.salvage(lexeme);
        }

        Ok(MK_TOKEN!(TokenKind::Literal, lexeme))
    }

    fn salvage(&mut self, mut lexeme: String) -> Result<Token, Error> {
        self.bump_while(&mut lexeme, |c| !is_token_boundary(c))?;
        Ok(MK_TOKEN!(TokenKind::Other, lexeme))
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

pub fn tokenize<S: AsRef<str>>(source: S) -> Result<Vec<Token>, Error> {
    Scanner::from_reader(source.as_ref().as_bytes()).collect()
}
