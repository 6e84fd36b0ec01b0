//! Property tests: parsing arbitrary simple sources never panics, dumps
//! are deterministic, and ranges stay ordered.

use esast_parser::es::formats::to_tree_str;
use esast_parser::es::pipeline::parse_source;
use esast_parser::es::testing::collect_ranges;
use proptest::prelude::*;

// Prefixed so generated names never collide with keywords.
fn identifier() -> impl Strategy<Value = String> {
    "[a-z0-9_]{0,6}".prop_map(|tail| format!("x{tail}"))
}

fn binary_operator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "+", "-", "*", "/", "%", "<", "<=", ">", ">=", "===", "!==", "==", "!=", "<<", ">>",
        ">>>", "&", "|", "^", "&&", "||",
    ])
}

proptest! {
    #[test]
    fn binary_statement_dump_is_deterministic(
        left in identifier(),
        op in binary_operator(),
        right in identifier(),
    ) {
        let source = format!("{left} {op} {right};");
        let program = parse_source(&source).unwrap();
        prop_assert_eq!(to_tree_str(&program), to_tree_str(&program));
    }

    #[test]
    fn nested_expression_ranges_are_ordered(
        name in identifier(),
        op in binary_operator(),
        count in 1usize..5,
        literal in 0u32..1000,
    ) {
        let operand = format!("({name} {op} {literal})");
        let separator = format!(" {op} ");
        let source = format!("{name} = {};", vec![operand; count].join(separator.as_str()));
        let program = parse_source(&source).unwrap();
        for range in collect_ranges(&program) {
            prop_assert!(range.start <= range.end);
        }
    }

    #[test]
    fn call_and_member_chains_round_trip(
        base in identifier(),
        property in identifier(),
        argument in identifier(),
    ) {
        let source = format!("{base}.{property}({argument})[{argument}]++;");
        let first = parse_source(&source).unwrap();
        let second = parse_source(&source).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(to_tree_str(&first), to_tree_str(&second));
    }
}
