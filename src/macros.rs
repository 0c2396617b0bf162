//! Utility macros for the scanner.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The matched source text
/// * `$value` - The optional semantic value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntConstant, "42".to_string(), Some(TokenValue::Integer(42)), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a handler for operator and punctuation patterns, which carry no
/// value and always produce a token.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new(r"\+", MK_DEFAULT_HANDLER!(TokenKind::Plus))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {{
        fn handler(_scanner: &mut Scanner<'_>, lexeme: &str, span: Span) -> Option<Token> {
            Some($crate::MK_TOKEN!($kind, String::from(lexeme), None, span))
        }

        handler as RegexHandler
    }};
}
