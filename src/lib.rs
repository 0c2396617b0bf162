#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Location of one lexeme: the line it starts on plus the first and last
/// column it covers on that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub line: u32,
    pub first_column: u32,
    pub last_column: u32,
}

impl Span {
    pub fn new(line: u32, first_column: u32, last_column: u32) -> Self {
        Span {
            line,
            first_column,
            last_column,
        }
    }

    pub fn null() -> Self {
        Span::new(0, 0, 0)
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {} cols {}-{}",
            self.line, self.first_column, self.last_column
        )
    }
}

/// Returns the text of the given 1-based line, without its terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
}

/// Renders a diagnostic with the offending source line and a caret run under
/// the reported columns.
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: UnrecognisedToken (...)
        -> program.decaf
           |
        20 | int a = #;
           | --------^
    */

    let span = error.get_span();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}:{}:{}\n", file, span.line, span.first_column));

    let Some(line_text) = get_line_at_position(source, span.line) else {
        return out;
    };

    let line_string = span.line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text));

    let lead = span.first_column.max(1) as usize;
    let width = (span.last_column.max(span.first_column) - span.first_column) as usize + 1;
    out.push_str(&format!(
        "{:>padding$} {}{}\n",
        "|",
        "-".repeat(lead - 1),
        "^".repeat(width)
    ));

    out
}
