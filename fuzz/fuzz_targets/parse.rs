#![no_main]
use arbitrary::Arbitrary;
use coolfront::lexer::{Token, TokenKind};
use coolfront::span::Span;
use libfuzzer_sys::fuzz_target;

/// Token categories in a form `arbitrary` can generate directly, so the
/// parser sees sequences the lexer would rarely produce.
#[derive(Arbitrary, Debug)]
enum FuzzToken {
    Class,
    If,
    Then,
    Else,
    Fi,
    Let,
    In,
    Plus,
    Minus,
    Times,
    Divide,
    Equals,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Colon,
    Comma,
    Id,
    Number(u64),
    String,
    End,
}

impl FuzzToken {
    fn to_token(&self, offset: usize) -> Token {
        let (kind, text) = match self {
            FuzzToken::Class => (TokenKind::Class, "class".to_string()),
            FuzzToken::If => (TokenKind::If, "if".to_string()),
            FuzzToken::Then => (TokenKind::Then, "then".to_string()),
            FuzzToken::Else => (TokenKind::Else, "else".to_string()),
            FuzzToken::Fi => (TokenKind::Fi, "fi".to_string()),
            FuzzToken::Let => (TokenKind::Let, "let".to_string()),
            FuzzToken::In => (TokenKind::In, "in".to_string()),
            FuzzToken::Plus => (TokenKind::Plus, "+".to_string()),
            FuzzToken::Minus => (TokenKind::Minus, "-".to_string()),
            FuzzToken::Times => (TokenKind::Times, "*".to_string()),
            FuzzToken::Divide => (TokenKind::Divide, "/".to_string()),
            FuzzToken::Equals => (TokenKind::Equals, "=".to_string()),
            FuzzToken::LParen => (TokenKind::LParen, "(".to_string()),
            FuzzToken::RParen => (TokenKind::RParen, ")".to_string()),
            FuzzToken::LBrace => (TokenKind::LBrace, "{".to_string()),
            FuzzToken::RBrace => (TokenKind::RBrace, "}".to_string()),
            FuzzToken::Semicolon => (TokenKind::Semicolon, ";".to_string()),
            FuzzToken::Colon => (TokenKind::Colon, ":".to_string()),
            FuzzToken::Comma => (TokenKind::Comma, ",".to_string()),
            FuzzToken::Id => (TokenKind::Id, "x".to_string()),
            FuzzToken::Number(n) => (TokenKind::Number, n.to_string()),
            FuzzToken::String => (TokenKind::String, "str".to_string()),
            FuzzToken::End => (TokenKind::End, String::new()),
        };
        let len = text.len().max(1);
        Token::new(kind, text, 1, Span::new(offset, offset + len))
    }
}

fuzz_target!(|input: Vec<FuzzToken>| {
    let mut offset = 0;
    let tokens: Vec<Token> = input
        .iter()
        .map(|t| {
            let tok = t.to_token(offset);
            offset = tok.span.end + 1;
            tok
        })
        .collect();

    // The stream may lack END or hold it mid-sequence; the parser must cope.
    let _ = coolfront::parser::parse(&tokens);
});
