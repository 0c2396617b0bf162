//! Unit tests for error handling.
//!
//! This module contains tests for error types and the diagnostic sinks.

use crate::errors::diagnostics::{DiagnosticSink, LogSink};
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Span;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Span::new(10, 4, 4),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_span() {
    let span = Span::new(42, 3, 7);
    let error = Error::new(
        ErrorImpl::UnterminatedString {
            literal: "\"abc".to_string(),
        },
        span,
    );

    assert_eq!(error.get_span().line, 42);
    assert_eq!(error.get_span().first_column, 3);
    assert_eq!(error.get_span().last_column, 7);
}

#[test]
fn test_unterminated_string_error() {
    let error = Error::new(
        ErrorImpl::UnterminatedString {
            literal: "\"abc".to_string(),
        },
        Span::null(),
    );

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(
        error.get_impl().to_string(),
        "Unterminated string constant: \"abc"
    );
    assert!(!error.is_fatal());
}

#[test]
fn test_unterminated_comment_is_fatal() {
    let error = Error::new(ErrorImpl::UnterminatedComment, Span::null());

    assert_eq!(error.get_error_name(), "UnterminatedComment");
    assert!(error.is_fatal());
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Span::null(),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert!(!error.is_fatal());
}

#[test]
fn test_unrecognised_message_quotes_char() {
    let error = ErrorImpl::UnrecognisedToken {
        token: "#".to_string(),
    };

    assert_eq!(error.to_string(), "Unrecognized char: \"#\"");
}

#[test]
fn test_error_display_includes_span() {
    let error = Error::new(ErrorImpl::UnterminatedComment, Span::new(4, 1, 2));

    assert_eq!(
        error.to_string(),
        "Input ends with unterminated comment (line 4 cols 1-2)"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Span::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnterminatedComment, Span::null());

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_vec_sink_collects_in_order() {
    let mut sink: Vec<Error> = Vec::new();

    sink.report(Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        Span::new(1, 1, 1),
    ));
    sink.report(Error::new(ErrorImpl::UnterminatedComment, Span::new(2, 1, 2)));

    assert_eq!(sink.len(), 2);
    assert_eq!(sink[0].get_error_name(), "UnrecognisedToken");
    assert_eq!(sink[1].get_error_name(), "UnterminatedComment");
}

#[test]
fn test_log_sink_counts() {
    let mut sink = LogSink::new();

    sink.report(Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        Span::new(1, 1, 1),
    ));
    sink.report(Error::new(ErrorImpl::UnterminatedComment, Span::new(2, 1, 2)));

    assert_eq!(sink.reported(), 2);
    assert_eq!(sink.fatal(), 1);
}
