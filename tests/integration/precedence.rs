// Operator precedence and associativity.
//
// `*` and `/` bind tighter than `+` and `-`; both tiers are left-associative.

use coolfront::parser::ast::*;

fn expr(src: &str) -> Expr {
    let program = coolfront::parse_source(&format!("class T {{ m() : Int {{ {src} }} ; }} ;")).expect("parse should succeed");
    match program.classes.into_iter().next().unwrap().features.into_iter().next().unwrap() {
        Feature::Method { body, .. } => body,
        other => panic!("expected method, got {other:?}"),
    }
}

fn n(v: i32) -> Expr {
    Expr::Number(v)
}

fn bin(op: BinOp, l: Expr, r: Expr) -> Expr {
    Expr::binary(op, l, r)
}

#[test]
fn mul_binds_tighter_than_add() {
    assert_eq!(expr("2 + 3 * 4"), bin(BinOp::Add, n(2), bin(BinOp::Mul, n(3), n(4))));
}

#[test]
fn mul_on_the_left_of_add() {
    assert_eq!(expr("2 * 3 + 4"), bin(BinOp::Add, bin(BinOp::Mul, n(2), n(3)), n(4)));
}

#[test]
fn div_binds_tighter_than_sub() {
    assert_eq!(expr("10 - 6 / 2"), bin(BinOp::Sub, n(10), bin(BinOp::Div, n(6), n(2))));
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(expr("8 - 3 - 2"), bin(BinOp::Sub, bin(BinOp::Sub, n(8), n(3)), n(2)));
}

#[test]
fn division_is_left_associative() {
    assert_eq!(expr("64 / 8 / 2"), bin(BinOp::Div, bin(BinOp::Div, n(64), n(8)), n(2)));
}

#[test]
fn mixed_additive_chain_is_left_associative() {
    assert_eq!(expr("1 + 2 - 3 + 4"), bin(BinOp::Add, bin(BinOp::Sub, bin(BinOp::Add, n(1), n(2)), n(3)), n(4)));
}

#[test]
fn mixed_multiplicative_chain_is_left_associative() {
    assert_eq!(expr("2 * 6 / 3 * 4"), bin(BinOp::Mul, bin(BinOp::Div, bin(BinOp::Mul, n(2), n(6)), n(3)), n(4)));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(expr("(2 + 3) * 4"), bin(BinOp::Mul, bin(BinOp::Add, n(2), n(3)), n(4)));
}

#[test]
fn parentheses_override_associativity() {
    assert_eq!(expr("8 - (3 - 2)"), bin(BinOp::Sub, n(8), bin(BinOp::Sub, n(3), n(2))));
}

#[test]
fn calls_are_factors() {
    assert_eq!(
        expr("f(1) * g() + 2"),
        bin(BinOp::Add, bin(BinOp::Mul, Expr::call("f", vec![n(1)]), Expr::call("g", vec![])), n(2))
    );
}

#[test]
fn two_tiers_interleaved() {
    // 1 + 2 * 3 - 4 / 2  →  (1 + (2 * 3)) - (4 / 2)
    assert_eq!(
        expr("1 + 2 * 3 - 4 / 2"),
        bin(BinOp::Sub, bin(BinOp::Add, n(1), bin(BinOp::Mul, n(2), n(3))), bin(BinOp::Div, n(4), n(2)))
    );
}

#[test]
fn unary_minus_is_not_supported() {
    let err = coolfront::parse_source("class T { m() : Int { -1 } ; } ;").unwrap_err();
    assert!(err.to_string().contains("expected expression"));
}
