use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ReadFailure { .. } => "ReadFailure",
            ErrorImpl::InvalidEncoding { .. } => "InvalidEncoding",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ReadFailure { reason } => ErrorTip::Suggestion(format!(
                "The source stopped being readable after it was opened: {}",
                reason
            )),
            ErrorImpl::InvalidEncoding { bytes } if bytes.is_empty() => ErrorTip::None,
            ErrorImpl::InvalidEncoding { .. } => {
                ErrorTip::Suggestion(String::from("Source files must be UTF-8 encoded"))
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new(ErrorImpl::ReadFailure {
            reason: error.to_string(),
        })
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("failed to read from source: {reason}")]
    ReadFailure { reason: String },
    #[error("invalid UTF-8 sequence in source: {bytes:02x?}")]
    InvalidEncoding { bytes: Vec<u8> },
}
