//! Error types and error reporting for the scanner.
//!
//! This module defines the error types produced while scanning source text.
//! It includes:
//!
//! - Error structures carrying the span they occurred at
//! - The taxonomy of scan problems (recoverable vs. fatal)
//! - Helpful error messages and suggestions
//! - The `DiagnosticSink` seam the scanner reports through

pub mod diagnostics;
pub mod errors;

#[cfg(test)]
mod tests;
