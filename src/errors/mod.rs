//! Error types and error handling for the scanner.
//!
//! Malformed lexemes are not errors: they come back as `Other` tokens.
//! What lives here is the small set of failures that stop scanning
//! altogether:
//!
//! - Reading from a source that was opened successfully but then failed
//! - Source bytes that are not valid UTF-8
//! - Error names and suggestions used when reporting on the command line

pub mod errors;
