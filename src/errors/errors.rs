use std::fmt::Display;

use thiserror::Error;

use crate::Span;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} ({span})")]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Fatal errors stop the scan; everything else is reported and skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnterminatedComment)
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString { literal } => ErrorTip::Suggestion(format!(
                "String `{}` is missing its closing quote",
                literal
            )),
            ErrorImpl::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "Every `/*` needs a matching `*/`, including nested ones",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unrecognized char: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("Unterminated string constant: {literal}")]
    UnterminatedString { literal: String },
    #[error("Input ends with unterminated comment")]
    UnterminatedComment,
    #[error("Integer constant out of range: {token}")]
    NumberParseError { token: String },
}
