use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

use super::symbols::DeclId;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("void", TokenKind::Void);
        map.insert("int", TokenKind::Int);
        map.insert("double", TokenKind::Double);
        map.insert("bool", TokenKind::Bool);
        map.insert("string", TokenKind::String);
        map.insert("class", TokenKind::Class);
        map.insert("extends", TokenKind::Extends);
        map.insert("this", TokenKind::This);
        map.insert("null", TokenKind::Null);
        map.insert("while", TokenKind::While);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map.insert("public", TokenKind::Public);
        map.insert("private", TokenKind::Private);
        map.insert("New", TokenKind::New);
        map.insert("NewArray", TokenKind::NewArray);
        map.insert("Print", TokenKind::Print);
        map.insert("ReadInteger", TokenKind::ReadInteger);
        map.insert("ReadLine", TokenKind::ReadLine);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    IntConstant,
    DoubleConstant,
    BoolConstant,
    StringConstant,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Dot,
    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Backslash,
    Star,
    Percent,

    // Reserved
    Void,
    Int,
    Double,
    Bool,
    String,
    Class,
    Extends,
    This,
    Null,
    While,
    If,
    Else,
    Return,
    Public,
    Private,
    New,
    NewArray,
    Print,
    ReadInteger,
    ReadLine,
}

impl TokenKind {
    pub fn is_reserved(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }

    /// Classic `T_` name used in token dumps. Operators are named by their
    /// own text, quoted.
    pub fn dump_name(&self) -> String {
        match self {
            TokenKind::EOF => "T_EOF".to_string(),
            TokenKind::IntConstant => "T_IntConstant".to_string(),
            TokenKind::DoubleConstant => "T_DoubleConstant".to_string(),
            TokenKind::BoolConstant => "T_BoolConstant".to_string(),
            TokenKind::StringConstant => "T_StringConstant".to_string(),
            TokenKind::Identifier => "T_Identifier".to_string(),
            TokenKind::And => "T_And".to_string(),
            TokenKind::Or => "T_Or".to_string(),
            TokenKind::LessEquals => "T_LessEqual".to_string(),
            TokenKind::GreaterEquals => "T_GreaterEqual".to_string(),
            TokenKind::Equals => "T_Equal".to_string(),
            TokenKind::NotEquals => "T_NotEqual".to_string(),
            kind if kind.is_reserved() => format!("T_{:?}", kind),
            kind => format!("'{}'", kind.symbol().unwrap_or("?")),
        }
    }

    /// Source text of a single-character operator or punctuation kind.
    pub fn symbol(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Not => "!",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Backslash => "\\",
            TokenKind::Star => "*",
            TokenKind::Percent => "%",
            _ => return None,
        };

        Some(text)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Semantic payload of literal and identifier tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Integer(i64),
    Double(f64),
    Bool(bool),
    Str(String),
    Identifier(DeclId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub value: Option<TokenValue>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nlexeme: {}}}", self.kind, self.lexeme)
    }
}

impl Token {
    pub fn as_integer(&self) -> Option<i64> {
        match self.value {
            Some(TokenValue::Integer(value)) => Some(value),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self.value {
            Some(TokenValue::Double(value)) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            Some(TokenValue::Bool(value)) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Str(value)) => Some(value),
            _ => None,
        }
    }

    pub fn as_decl(&self) -> Option<DeclId> {
        match self.value {
            Some(TokenValue::Identifier(id)) => Some(id),
            _ => None,
        }
    }

    /// One-line dump in the classic scanner-driver format:
    ///
    /// ```text
    /// x            line 1 cols 5-5 is T_Identifier
    /// 0x1A         line 1 cols 9-12 is T_IntConstant (value = 26)
    /// ```
    pub fn describe(&self) -> String {
        let head = format!(
            "{:<12} line {} cols {}-{} is {}",
            self.lexeme,
            self.span.line,
            self.span.first_column,
            self.span.last_column,
            self.kind.dump_name()
        );

        match &self.value {
            Some(TokenValue::Integer(value)) => format!("{} (value = {})", head, value),
            Some(TokenValue::Double(value)) => format!("{} (value = {})", head, value),
            Some(TokenValue::Bool(value)) => format!("{} (value = {})", head, value),
            Some(TokenValue::Str(_)) => format!("{} (value = {})", head, self.lexeme),
            Some(TokenValue::Identifier(_)) | None => head,
        }
    }
}
