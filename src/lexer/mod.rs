pub mod token;
pub use token::{Token, TokenKind, is_keyword};

use logos::Logos;
use crate::diagnostics::LexError;
use crate::span::{LineIndex, Span};

#[derive(Debug, Clone, Default, PartialEq)]
enum ScanError {
    #[default]
    Unrecognized,
    UnterminatedString,
}

/// Scanner-level token. Keywords are scanned as `Id` and reclassified through
/// [`token::keyword`], so `classes` stays an identifier while `class` is a keyword.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
#[logos(error = ScanError)]
enum Raw {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Times,
    #[token("/")]
    Divide,
    #[token("=")]
    Equals,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,

    #[regex(r"[0-9]+")]
    Number,

    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Id,

    #[token("\"", string_body)]
    Str(String),
}

/// Scans a string literal body after the opening quote. A backslash takes the
/// next character verbatim; there are no named escapes.
fn string_body(lex: &mut logos::Lexer<Raw>) -> Result<String, ScanError> {
    let rest = lex.remainder();
    let mut value = String::new();
    let mut chars = rest.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(i + 1);
                return Ok(value);
            }
            '\\' => match chars.next() {
                Some((_, escaped)) => value.push(escaped),
                None => break,
            },
            other => value.push(other),
        }
    }
    lex.bump(rest.len());
    Err(ScanError::UnterminatedString)
}

impl Raw {
    /// Category for this scanner token; `text` is its source slice.
    fn kind(&self, text: &str) -> TokenKind {
        match self {
            Raw::Plus => TokenKind::Plus,
            Raw::Minus => TokenKind::Minus,
            Raw::Times => TokenKind::Times,
            Raw::Divide => TokenKind::Divide,
            Raw::Equals => TokenKind::Equals,
            Raw::LParen => TokenKind::LParen,
            Raw::RParen => TokenKind::RParen,
            Raw::LBrace => TokenKind::LBrace,
            Raw::RBrace => TokenKind::RBrace,
            Raw::Semicolon => TokenKind::Semicolon,
            Raw::Colon => TokenKind::Colon,
            Raw::Comma => TokenKind::Comma,
            Raw::Number => TokenKind::Number,
            Raw::Id => token::keyword(text).unwrap_or(TokenKind::Id),
            Raw::Str(_) => TokenKind::String,
        }
    }
}

/// Single-use scanner over one source buffer.
///
/// Yields tokens in source order, then exactly one [`TokenKind::End`] token,
/// then `None`. The first error is yielded once and ends the stream.
pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, Raw>,
    lines: LineIndex,
    done: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            inner: Raw::lexer(source),
            lines: LineIndex::new(source),
            done: false,
        }
    }

    /// Collect every token, including the end-of-input sentinel.
    pub fn tokenize(self) -> Result<Vec<Token>, LexError> {
        self.collect()
    }

    fn make_token(&self, raw: Raw, span: Span) -> Token {
        let kind = raw.kind(self.inner.slice());
        let text = match raw {
            Raw::Str(value) => value,
            _ => self.inner.slice().to_string(),
        };
        Token::new(kind, text, self.lines.line_of(span.start), span)
    }

    fn make_error(&self, err: ScanError, span: Span) -> LexError {
        let line = self.lines.line_of(span.start);
        match err {
            ScanError::UnterminatedString => LexError::UnterminatedString { line, span },
            ScanError::Unrecognized => {
                let ch = self.source.get(span.start..).and_then(|s| s.chars().next()).unwrap_or(char::REPLACEMENT_CHARACTER);
                let span = Span::new(span.start, span.start + ch.len_utf8());
                LexError::UnexpectedCharacter { ch, line, span }
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.inner.next();
        let range = self.inner.span();
        let span = Span::new(range.start, range.end);
        match result {
            Some(Ok(raw)) => Some(Ok(self.make_token(raw, span))),
            Some(Err(err)) => {
                self.done = true;
                Some(Err(self.make_error(err, span)))
            }
            None => {
                self.done = true;
                let end = self.source.len();
                Some(Ok(Token::end(self.lines.line_of(end), end)))
            }
        }
    }
}

/// Convert source text into tokens, terminated by a single `END` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
