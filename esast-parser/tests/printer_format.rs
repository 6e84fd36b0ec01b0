//! Exact dump output for representative sources.

use esast_parser::es::building::build;
use esast_parser::es::formats::to_tree_str;
use esast_parser::es::parsing::parse;

fn dump(source: &str) -> String {
    to_tree_str(&build(&parse(source).unwrap()).unwrap())
}

#[test]
fn single_identifier_statement() {
    assert_eq!(
        dump("a;"),
        "ProgramNode (1:0, 1:2)\n\
         \x20   IdentifierNode (1:0, 1:1) : { name: a }\n"
    );
}

#[test]
fn if_else_with_block_and_bare_statement() {
    let expected = "\
ProgramNode (1:0, 1:21)
    IfStatementNode (1:0, 1:21)
    --> test expression:
        IdentifierNode (1:4, 1:5) : { name: a }
    --> consequent:
        BlockStatementNode (1:7, 1:13)
            IdentifierNode (1:9, 1:10) : { name: b }
    --> alternate:
        IdentifierNode (1:19, 1:20) : { name: c }
";
    assert_eq!(dump("if (a) { b; } else c;"), expected);
}

#[test]
fn loose_equality_prints_null_operator() {
    let expected = "\
ProgramNode (1:0, 1:7)
    BinaryExpressionNode (1:0, 1:6) { operator: null }
    --> left operand:
        IdentifierNode (1:0, 1:1) : { name: a }
    --> right operand:
        IdentifierNode (1:5, 1:6) : { name: b }
";
    assert_eq!(dump("a == b;"), expected);
}

#[test]
fn function_declaration_with_parameters_and_return() {
    let expected = "\
ProgramNode (1:0, 1:36)
    FunctionDeclarationNode (1:0, 1:36)
    --> name:
        IdentifierNode (1:9, 1:12) : { name: add }
    --> parameters:
        IdentifierNode (1:13, 1:14) : { name: a }
        IdentifierNode (1:16, 1:17) : { name: b }
    --> body:
        ReturnStatementNode (1:21, 1:34)
        --> value:
            BinaryExpressionNode (1:28, 1:33) { operator: + }
            --> left operand:
                IdentifierNode (1:28, 1:29) : { name: a }
            --> right operand:
                IdentifierNode (1:32, 1:33) : { name: b }
";
    assert_eq!(dump("function add(a, b) { return a + b; }"), expected);
}

#[test]
fn anonymous_function_with_empty_body() {
    let expected = "\
ProgramNode (1:0, 1:15)
    FunctionExpressionNode (1:1, 1:13)
    --> body: empty
";
    assert_eq!(dump("(function(){});"), expected);
}

#[test]
fn array_with_elision_keeps_slot_positions() {
    let expected = "\
ProgramNode (1:0, 1:7)
    ArrayExpressionNode (1:0, 1:6)
    --> elements:
        LiteralNode (1:1, 1:2) : { value: 1 }
        UndefinedLiteralNode (1:3, 1:4) : { value: undefined }
        LiteralNode (1:4, 1:5) : { value: 3 }
";
    assert_eq!(dump("[1,,3];"), expected);
}

#[test]
fn lone_semicolon_contributes_nothing() {
    assert_eq!(dump(";"), "ProgramNode (1:0, 1:1)\n");
}

#[test]
fn multiline_source_reports_real_lines() {
    let expected = "\
ProgramNode (1:0, 3:2)
    IdentifierNode (1:0, 1:1) : { name: a }
    IdentifierNode (2:0, 2:1) : { name: b }
    IdentifierNode (3:0, 3:1) : { name: c }
";
    assert_eq!(dump("a;\nb;\nc;"), expected);
}
