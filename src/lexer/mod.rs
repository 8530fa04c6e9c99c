//! Lexical analysis for KAY source text.
//!
//! - [source] reads characters one at a time from a file or any reader
//! - [tokens] holds the token types and the classification tables
//! - [lexer] is the scanner that turns characters into tokens on demand
//!
//! Malformed runs of characters become `Other` tokens and scanning carries
//! on from the next boundary.

pub mod lexer;
pub mod source;
pub mod tokens;
