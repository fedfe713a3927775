// Property-based tests for the parser.
//
// Programs are generated as ASTs, printed back to source with
// `pretty_print`, and reparsed. The reparsed tree must equal the generated
// one, which exercises precedence, associativity and block handling together.

use coolfront::lexer::{is_keyword, tokenize};
use coolfront::parse_source;
use coolfront::parser::ast::*;
use coolfront::parser::parse;
use coolfront::pretty::pretty_print;
use proptest::prelude::*;

fn arb_ident() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,8}".prop_filter("identifier must not be a keyword", |s| !is_keyword(s))
}

fn arb_type_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,6}"
}

fn arb_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \"\\\\]{0,10}"
}

fn arb_binop() -> impl Strategy<Value = BinOp> {
    prop_oneof![Just(BinOp::Add), Just(BinOp::Sub), Just(BinOp::Mul), Just(BinOp::Div)]
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (0..=i32::MAX).prop_map(Expr::Number),
        arb_ident().prop_map(Expr::Identifier),
        arb_string().prop_map(Expr::StringLiteral),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            (arb_binop(), inner.clone(), inner.clone()).prop_map(|(op, l, r)| Expr::binary(op, l, r)),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Expr::Block),
            (arb_ident(), prop::collection::vec(inner, 0..3)).prop_map(|(callee, args)| Expr::call(callee, args)),
        ]
    })
}

fn arb_feature() -> impl Strategy<Value = Feature> {
    let param = (arb_ident(), arb_type_name()).prop_map(|(name, declared_type)| Param { name, declared_type });
    prop_oneof![
        (arb_ident(), arb_type_name()).prop_map(|(name, declared_type)| Feature::Attribute { name, declared_type }),
        (arb_ident(), prop::collection::vec(param, 0..3), arb_type_name(), arb_expr())
            .prop_map(|(name, params, declared_type, body)| Feature::Method { name, params, declared_type, body }),
    ]
}

fn arb_program() -> impl Strategy<Value = Program> {
    let class = (arb_type_name(), prop::collection::vec(arb_feature(), 0..4))
        .prop_map(|(name, features)| Class { name, features });
    prop::collection::vec(class, 0..4).prop_map(|classes| Program { classes })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_printed_program_reparses_to_same_tree(program in arb_program()) {
        let source = pretty_print(&program);
        let reparsed = parse_source(&source);
        prop_assert!(reparsed.is_ok(), "failed to reparse:\n{}\n{:?}", source, reparsed);
        prop_assert_eq!(reparsed.unwrap(), program);
    }

    #[test]
    fn prop_pretty_print_is_idempotent(program in arb_program()) {
        let first = pretty_print(&program);
        let second = pretty_print(&parse_source(&first).unwrap());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_parse_is_deterministic(program in arb_program()) {
        let source = pretty_print(&program);
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(parse(&tokens), parse(&tokens));
    }

    /// Any truncation of a valid program either parses or fails cleanly.
    #[test]
    fn prop_truncated_programs_never_panic(program in arb_program(), cut in 0usize..400) {
        let source = pretty_print(&program);
        let mut end = cut.min(source.len());
        while !source.is_char_boundary(end) {
            end -= 1;
        }
        let _ = parse_source(&source[..end]);
    }

    /// Arbitrary text through the full front end never panics.
    #[test]
    fn prop_front_end_never_panics(source in "\\PC{0,300}") {
        let _ = parse_source(&source);
    }
}
