//! Structural properties of built trees.

use esast_parser::es::ast::nodes::{Expression, Statement};
use esast_parser::es::ast::operators::BinaryOp;
use esast_parser::es::ast::Program;
use esast_parser::es::formats::to_tree_str;
use esast_parser::es::pipeline::parse_source;
use esast_parser::es::testing::collect_ranges;
use rstest::rstest;

fn first_expression(program: &Program) -> &Expression {
    match &program.body[0] {
        Statement::Expression(stmt) => match stmt.expression.as_ref() {
            Expression::Sequence(seq) => &seq.expressions[0],
            other => other,
        },
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

#[test]
fn all_ranges_are_ordered() {
    let source = "\
function outer(n) {
    var total = 0, step;
    for (var i = 0; i < n; i++) {
        if (i % 2 === 0) { total = total + i; } else continue;
    }
    do { total--; } while (total > 100);
    return { result: total, tail: [1,,3]['length'] };
}
outer(7 << 1, !done);
";
    let program = parse_source(source).unwrap();
    for range in collect_ranges(&program) {
        assert!(range.start <= range.end, "unordered range {range}");
        assert!(range.span.start <= range.span.end);
    }
}

#[test]
fn elision_builds_placeholder_at_index_one() {
    let program = parse_source("[1,,3];").unwrap();
    let text = to_tree_str(&program);
    match first_expression(&program) {
        Expression::Array(array) => assert_eq!(array.elements.len(), 3),
        other => panic!("expected an array, got {other:?}"),
    }
    assert!(text.contains("UndefinedLiteralNode (1:3, 1:4)"));
}

#[test]
fn for_loop_keeps_all_three_clauses() {
    let program = parse_source("for (i=0;i<10;i++) x;").unwrap();
    match &program.body[0] {
        Statement::For(stmt) => {
            assert_eq!(stmt.clauses.len(), 3);
            assert!(matches!(stmt.body.as_ref(), Statement::Expression(_)));
        }
        other => panic!("expected a for statement, got {other:?}"),
    }
}

#[test]
fn anonymous_function_expression_has_no_id() {
    let program = parse_source("(function(){});").unwrap();
    match first_expression(&program) {
        Expression::Sequence(seq) => match &seq.expressions[0] {
            Expression::Function(function) => {
                assert!(function.id.is_none());
                assert!(function.body.body.is_empty());
            }
            other => panic!("expected a function expression, got {other:?}"),
        },
        other => panic!("expected a sequence, got {other:?}"),
    }
}

#[rstest]
#[case("a <= b;", Some(BinaryOp::LessOrEqual))]
#[case("a >>> b;", Some(BinaryOp::ArithmeticRightShift))]
#[case("a === b;", Some(BinaryOp::Equal))]
#[case("a == b;", None)]
#[case("a != b;", None)]
fn binary_operator_canonicalization(#[case] source: &str, #[case] expected: Option<BinaryOp>) {
    let program = parse_source(source).unwrap();
    match first_expression(&program) {
        Expression::Binary(binary) => assert_eq!(binary.operator, expected),
        other => panic!("expected a binary expression, got {other:?}"),
    }
}

#[test]
fn member_access_forms() {
    let program = parse_source("a.b;").unwrap();
    match first_expression(&program) {
        Expression::Member(member) => {
            assert!(!member.computed);
            match member.property.as_ref() {
                Expression::Identifier(id) => assert_eq!(id.name, "b"),
                other => panic!("expected an identifier property, got {other:?}"),
            }
        }
        other => panic!("expected a member expression, got {other:?}"),
    }

    let program = parse_source("a[b];").unwrap();
    match first_expression(&program) {
        Expression::Member(member) => {
            assert!(member.computed);
            assert!(matches!(member.property.as_ref(), Expression::Sequence(_)));
        }
        other => panic!("expected a member expression, got {other:?}"),
    }
}

#[test]
fn rebuilding_yields_structurally_equal_trees() {
    let source = "var a = [1, 2]; function f(x) { return x || a[0]; } f(-3);";
    let first = parse_source(source).unwrap();
    let second = parse_source(source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_statement_has_no_output_but_siblings_do() {
    let program = parse_source("; a; ;").unwrap();
    assert_eq!(program.body.len(), 3);
    let text = to_tree_str(&program);
    assert_eq!(
        text,
        "ProgramNode (1:0, 1:6)\n    IdentifierNode (1:2, 1:3) : { name: a }\n"
    );
}
