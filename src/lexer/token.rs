use serde::Serialize;

use crate::span::Span;

/// Lexical category of a [`Token`]. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Class,
    If,
    Then,
    Else,
    Fi,
    Let,
    In,

    // Operators
    Plus,
    Minus,
    Times,
    Divide,
    Equals,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Colon,
    Comma,

    // Literals and names
    Id,
    Number,
    String,

    End,
}

impl TokenKind {
    /// Upper-case category name, as used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Class => "CLASS",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::Fi => "FI",
            TokenKind::Let => "LET",
            TokenKind::In => "IN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Equals => "EQUALS",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Id => "ID",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::End => "END",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::Fi
                | TokenKind::Let
                | TokenKind::In
        )
    }
}

impl Serialize for TokenKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Returns the keyword category for `s`, if it is one of the reserved words.
///
/// This is the lexer's only keyword table: every scanned identifier goes
/// through it.
pub fn keyword(s: &str) -> Option<TokenKind> {
    match s {
        "class" => Some(TokenKind::Class),
        "if" => Some(TokenKind::If),
        "then" => Some(TokenKind::Then),
        "else" => Some(TokenKind::Else),
        "fi" => Some(TokenKind::Fi),
        "let" => Some(TokenKind::Let),
        "in" => Some(TokenKind::In),
        _ => None,
    }
}

/// Returns true if the given string is a reserved word.
pub fn is_keyword(s: &str) -> bool {
    keyword(s).is_some()
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Class => write!(f, "'class'"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Then => write!(f, "'then'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::Fi => write!(f, "'fi'"),
            TokenKind::Let => write!(f, "'let'"),
            TokenKind::In => write!(f, "'in'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Times => write!(f, "'*'"),
            TokenKind::Divide => write!(f, "'/'"),
            TokenKind::Equals => write!(f, "'='"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Id => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::String => write!(f, "string"),
            TokenKind::End => write!(f, "end of input"),
        }
    }
}

/// A classified, located unit of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact lexeme, or the unescaped contents for string literals.
    pub text: String,
    /// 1-based line of the token's first character.
    pub line: u32,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, span: Span) -> Self {
        Self { kind, text: text.into(), line, span }
    }

    /// The end-of-input sentinel.
    pub fn end(line: u32, offset: usize) -> Self {
        Self::new(TokenKind::End, "", line, Span::point(offset))
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Human-readable description used in "found ..." diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Id => format!("identifier '{}'", self.text),
            TokenKind::Number => format!("number {}", self.text),
            TokenKind::String => format!("string \"{}\"", self.text),
            kind => kind.to_string(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.text)
    }
}
