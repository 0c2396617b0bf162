use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    config::ScannerConfig,
    errors::{
        diagnostics::DiagnosticSink,
        errors::{Error, ErrorImpl},
    },
    Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::{
    comments::{skip_block_comment, CommentState},
    position::PositionTracker,
    symbols::SymbolTable,
    tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP},
};

/// Builds the token for a matched lexeme, or returns `None` when the lexeme
/// is dropped (whitespace, comments, reported errors).
pub type RegexHandler = fn(&mut Scanner<'_>, &str, Span) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(&format!("^(?:{})", pattern)).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    /// Lexical rules in priority order. The longest match wins; on equal
    /// length the earlier rule wins. Keywords and boolean literals share the
    /// identifier rule and are told apart in `symbol_handler`.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(r"/\*", comment_handler),
        RegexPattern::new(r"//[^\n]*", skip_handler),
        RegexPattern::new(r"[ \t]+", skip_handler),
        RegexPattern::new(r"\n", skip_handler),
        RegexPattern::new(r"&&", MK_DEFAULT_HANDLER!(TokenKind::And)),
        RegexPattern::new(r"\|\|", MK_DEFAULT_HANDLER!(TokenKind::Or)),
        RegexPattern::new(r"<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals)),
        RegexPattern::new(r">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals)),
        RegexPattern::new(r"==", MK_DEFAULT_HANDLER!(TokenKind::Equals)),
        RegexPattern::new(r"!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals)),
        RegexPattern::new(r"\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        RegexPattern::new(r"-", MK_DEFAULT_HANDLER!(TokenKind::Dash)),
        RegexPattern::new(r"\*", MK_DEFAULT_HANDLER!(TokenKind::Star)),
        RegexPattern::new(r"/", MK_DEFAULT_HANDLER!(TokenKind::Slash)),
        RegexPattern::new(r"%", MK_DEFAULT_HANDLER!(TokenKind::Percent)),
        RegexPattern::new(r"\\", MK_DEFAULT_HANDLER!(TokenKind::Backslash)),
        RegexPattern::new(r"<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        RegexPattern::new(r">", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        RegexPattern::new(r"=", MK_DEFAULT_HANDLER!(TokenKind::Assignment)),
        RegexPattern::new(r";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        RegexPattern::new(r",", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        RegexPattern::new(r"\.", MK_DEFAULT_HANDLER!(TokenKind::Dot)),
        RegexPattern::new(r"!", MK_DEFAULT_HANDLER!(TokenKind::Not)),
        RegexPattern::new(r"\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket)),
        RegexPattern::new(r"\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket)),
        RegexPattern::new(r"\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        RegexPattern::new(r"\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        RegexPattern::new(r"\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        RegexPattern::new(r"\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
        RegexPattern::new(r"[0-9]+\.[0-9]*(?:[eE][+-][0-9]+)?", double_handler),
        RegexPattern::new(r"0[xX][0-9a-fA-F]+", hex_handler),
        RegexPattern::new(r"[0-9]+", int_handler),
        RegexPattern::new(r#""[^"\n]*""#, string_handler),
        RegexPattern::new(r#""[^"\n]*"#, unterminated_string_handler),
        RegexPattern::new(r"[a-zA-Z][a-zA-Z0-9_]*", symbol_handler),
    ];
}

/// Owned scanner state: the source text and cursor, the position tracker,
/// block comment nesting and the symbol table.
///
/// Recoverable problems go to the sink and scanning carries on. An
/// unterminated block comment is fatal: it is reported once, and from then on
/// every call to [`Scanner::next_token`] returns that error.
pub struct Scanner<'s> {
    source: String,
    pos: usize,
    tracker: PositionTracker,
    comment: CommentState,
    symbols: SymbolTable,
    config: ScannerConfig,
    sink: &'s mut dyn DiagnosticSink,
    fatal: Option<Error>,
    exhausted: bool,
}

impl<'s> Scanner<'s> {
    pub fn new(source: String, config: ScannerConfig, sink: &'s mut dyn DiagnosticSink) -> Self {
        Scanner {
            source,
            pos: 0,
            tracker: PositionTracker::new(),
            comment: CommentState::Normal,
            symbols: SymbolTable::with_buckets(config.bucket_count),
            config,
            sink,
            fatal: None,
            exhausted: false,
        }
    }

    /// Scans past whitespace and comments and returns the next token.
    ///
    /// Once the input is used up this keeps returning end-of-input tokens.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            if let Some(fatal) = &self.fatal {
                return Err(fatal.clone());
            }

            let Some(ch) = self.remainder().chars().next() else {
                return Ok(MK_TOKEN!(TokenKind::EOF, String::new(), None, self.tracker.here()));
            };

            let Some((length, handler)) = self.longest_match() else {
                let lexeme = ch.to_string();
                self.pos += ch.len_utf8();
                let span = self.tracker.advance(&lexeme);
                self.report(ErrorImpl::UnrecognisedToken { token: lexeme }, span);
                continue;
            };

            let lexeme = self.source[self.pos..self.pos + length].to_string();
            self.pos += length;
            let span = self.tracker.advance(&lexeme);

            if let Some(token) = handler(self, &lexeme, span) {
                trace!(kind = %token.kind, line = span.line, column = span.first_column, "token");
                return Ok(token);
            }
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    pub fn file(&self) -> &str {
        &self.config.file
    }

    pub fn line(&self) -> u32 {
        self.tracker.line()
    }

    pub fn column(&self) -> u32 {
        self.tracker.column()
    }

    pub fn comment_depth(&self) -> u32 {
        self.comment.depth()
    }

    pub fn is_halted(&self) -> bool {
        self.fatal.is_some()
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn longest_match(&self) -> Option<(usize, RegexHandler)> {
        let remainder = self.remainder();
        let mut best: Option<(usize, RegexHandler)> = None;

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(remainder) {
                let length = found.end();
                if length > best.map_or(0, |(best_length, _)| best_length) {
                    best = Some((length, pattern.handler));
                }
            }
        }

        best
    }

    fn report(&mut self, error_impl: ErrorImpl, span: Span) {
        let error = Error::new(error_impl, span);

        if error.is_fatal() {
            self.fatal = Some(error.clone());
        }
        self.sink.report(error);
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, Error>;

    /// Yields tokens up to and including end-of-input, or up to the fatal
    /// error, then stops.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) if token.kind == TokenKind::EOF => self.exhausted = true,
            Err(_) => self.exhausted = true,
            Ok(_) => {}
        }

        Some(result)
    }
}

fn skip_handler(_scanner: &mut Scanner, _lexeme: &str, _span: Span) -> Option<Token> {
    None
}

fn comment_handler(scanner: &mut Scanner, _lexeme: &str, span: Span) -> Option<Token> {
    scanner.comment.open();
    debug!(line = span.line, column = span.first_column, "entering block comment");

    let rest = &scanner.source[scanner.pos..];
    match skip_block_comment(&mut scanner.comment, rest, &mut scanner.tracker) {
        Some(consumed) => scanner.pos += consumed,
        None => {
            scanner.pos = scanner.source.len();
            scanner.report(ErrorImpl::UnterminatedComment, span);
        }
    }

    None
}

fn int_handler(scanner: &mut Scanner, lexeme: &str, span: Span) -> Option<Token> {
    match lexeme.parse::<i64>() {
        Ok(value) => Some(MK_TOKEN!(
            TokenKind::IntConstant,
            lexeme.to_string(),
            Some(TokenValue::Integer(value)),
            span
        )),
        Err(_) => {
            scanner.report(ErrorImpl::NumberParseError { token: lexeme.to_string() }, span);
            None
        }
    }
}

fn hex_handler(scanner: &mut Scanner, lexeme: &str, span: Span) -> Option<Token> {
    match i64::from_str_radix(&lexeme[2..], 16) {
        Ok(value) => Some(MK_TOKEN!(
            TokenKind::IntConstant,
            lexeme.to_string(),
            Some(TokenValue::Integer(value)),
            span
        )),
        Err(_) => {
            scanner.report(ErrorImpl::NumberParseError { token: lexeme.to_string() }, span);
            None
        }
    }
}

fn double_handler(scanner: &mut Scanner, lexeme: &str, span: Span) -> Option<Token> {
    match lexeme.parse::<f64>() {
        Ok(value) => Some(MK_TOKEN!(
            TokenKind::DoubleConstant,
            lexeme.to_string(),
            Some(TokenValue::Double(value)),
            span
        )),
        Err(_) => {
            scanner.report(ErrorImpl::NumberParseError { token: lexeme.to_string() }, span);
            None
        }
    }
}

fn string_handler(_scanner: &mut Scanner, lexeme: &str, span: Span) -> Option<Token> {
    let contents = &lexeme[1..lexeme.len() - 1];

    Some(MK_TOKEN!(
        TokenKind::StringConstant,
        lexeme.to_string(),
        Some(TokenValue::Str(contents.to_string())),
        span
    ))
}

fn unterminated_string_handler(scanner: &mut Scanner, lexeme: &str, span: Span) -> Option<Token> {
    scanner.report(ErrorImpl::UnterminatedString { literal: lexeme.to_string() }, span);
    None
}

fn symbol_handler(scanner: &mut Scanner, lexeme: &str, span: Span) -> Option<Token> {
    if let Some(kind) = RESERVED_LOOKUP.get(lexeme) {
        return Some(MK_TOKEN!(*kind, lexeme.to_string(), None, span));
    }

    if lexeme == "true" || lexeme == "false" {
        return Some(MK_TOKEN!(
            TokenKind::BoolConstant,
            lexeme.to_string(),
            Some(TokenValue::Bool(lexeme == "true")),
            span
        ));
    }

    let id = scanner.symbols.lookup_or_insert(lexeme, span.line);
    Some(MK_TOKEN!(
        TokenKind::Identifier,
        lexeme.to_string(),
        Some(TokenValue::Identifier(id)),
        span
    ))
}

/// Everything a complete scan produced.
#[derive(Debug)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    pub diagnostics: Vec<Error>,
}

/// Scans `source` to the end with default settings.
pub fn tokenize(source: String, file: Option<String>) -> Result<Tokenized, Error> {
    tokenize_with(source, ScannerConfig::new(file))
}

pub fn tokenize_with(source: String, config: ScannerConfig) -> Result<Tokenized, Error> {
    let mut diagnostics: Vec<Error> = vec![];
    let mut scanner = Scanner::new(source, config, &mut diagnostics);
    let mut tokens = vec![];

    for token in scanner.by_ref() {
        tokens.push(token?);
    }

    let symbols = scanner.into_symbols();
    Ok(Tokenized {
        tokens,
        symbols,
        diagnostics,
    })
}
