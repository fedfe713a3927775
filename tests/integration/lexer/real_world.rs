// Real-World Code Samples
//
// Complete class declarations, lexed end to end.

use super::*;

#[test]
fn real_world_attribute_class() {
    assert_tokens(
        "class A { x : Int ; } ;",
        &[
            (TokenKind::Class, "class"),
            (TokenKind::Id, "A"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Id, "x"),
            (TokenKind::Colon, ":"),
            (TokenKind::Id, "Int"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Semicolon, ";"),
        ],
    );
}

#[test]
fn real_world_method_class() {
    let src = r#"class Counter {
    count : Int ;
    step(by : Int) : Int { count + by * 2 } ;
    label() : String { concat("n=", show(count)) } ;
} ;"#;
    let tokens = lex_ok(src);

    assert_eq!(tokens.first().unwrap().kind, TokenKind::Class);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::End);
    assert_eq!(tokens.last().unwrap().line, 5);
    assert!(tokens.iter().any(|t| t.kind == TokenKind::String && t.text == "n="));

    let step = tokens.iter().find(|t| t.text == "step").unwrap();
    assert_eq!(step.line, 3);
    let label = tokens.iter().find(|t| t.text == "label").unwrap();
    assert_eq!(label.line, 4);
}

#[test]
fn real_world_token_dump_format() {
    let tokens = lex_ok("f(1)");
    let dump: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    assert_eq!(dump, vec!["Token(f)", "Token(()", "Token(1)", "Token())", "Token()"]);
}

#[test]
fn real_world_lexing_is_deterministic() {
    let src = "class A { f(x : Int) : Int { { x ; \"s\" ; g() } } ; } ;";
    assert_eq!(lex_ok(src), lex_ok(src));
}
