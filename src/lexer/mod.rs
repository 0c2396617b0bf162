//! Lexical analysis module for the Decaf front end.
//!
//! This module contains the scanner that converts source text into a stream
//! of tokens for parsing. It handles:
//!
//! - Longest-match tokenization over a prioritized table of regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Nested block comments and single-line comments
//! - Identifier interning through the symbol table
//! - Line/column tracking for error reporting

pub mod comments;
pub mod lexer;
pub mod position;
pub mod symbols;
pub mod tokens;
