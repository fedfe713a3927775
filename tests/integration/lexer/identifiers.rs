// Category 4: Identifiers and Keywords
//
// A letter starts a run of letters, digits, and underscores. Exact matches
// against the reserved words produce keyword categories.

use super::*;

#[test]
fn every_keyword_is_recognized() {
    let cases = [
        ("class", TokenKind::Class),
        ("if", TokenKind::If),
        ("then", TokenKind::Then),
        ("else", TokenKind::Else),
        ("fi", TokenKind::Fi),
        ("let", TokenKind::Let),
        ("in", TokenKind::In),
    ];
    for (src, kind) in cases {
        assert_tokens(src, &[(kind, src)]);
    }
}

#[test]
fn keyword_prefixes_are_identifiers() {
    for src in ["classy", "iff", "thenx", "elsewhere", "fin", "letter", "inner", "class_"] {
        assert_tokens(src, &[(TokenKind::Id, src)]);
    }
}

#[test]
fn keywords_are_case_sensitive() {
    for src in ["Class", "IF", "Then", "LET"] {
        assert_tokens(src, &[(TokenKind::Id, src)]);
    }
}

#[test]
fn type_names_are_plain_identifiers() {
    assert_tokens("Int String Object", &[(TokenKind::Id, "Int"), (TokenKind::Id, "String"), (TokenKind::Id, "Object")]);
}

#[test]
fn identifier_with_digits_and_underscores() {
    assert_tokens("a1_b2__", &[(TokenKind::Id, "a1_b2__")]);
}

#[test]
fn leading_underscore_is_rejected() {
    let err = lex_fails("_private");
    assert!(matches!(err, LexError::UnexpectedCharacter { ch: '_', .. }));
}

#[test]
fn non_ascii_letter_is_rejected() {
    let err = lex_fails("é");
    assert!(matches!(err, LexError::UnexpectedCharacter { ch: 'é', .. }));
}
