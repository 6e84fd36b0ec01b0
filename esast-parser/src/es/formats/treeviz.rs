//! Indented text dump of an AST
//!
//! Each node contributes one heading line: indentation of four spaces per
//! depth, the kind name, the node's range with 1-based lines, and optional
//! inline metadata. Children follow under `--> label:` lines printed at the
//! node's own depth, with the children themselves one level deeper.
//!
//! Three kinds are transparent and never print a heading of their own:
//! empty statements render as nothing at all, sequences print their
//! elements at the sequence's depth, and function bodies print only their
//! statements (the `body:` label gets an inline ` empty` marker when there
//! are none). Transparency is a formatting rule of this module, not a
//! property of the nodes.
//!
//! The output is a deterministic pure function of the tree, so fixtures
//! can be compared byte for byte.

use std::fmt::Write;

use crate::es::ast::nodes::{
    ArrayExpression, AssignmentExpression, BinaryExpression, CallExpression, Expression,
    FunctionBody, Identifier, IncDecDirection, IncDecKind, IncOrDecExpression, Literal,
    LiteralValue, LogicalExpression, MemberExpression, ObjectExpression, Program, Property,
    Statement, UnaryExpression, VariableDeclaration, VariableDeclarationList,
};
use crate::es::ast::operators::ASSIGN_SYMBOL;
use crate::es::ast::range::Range;

/// Render the canonical tree dump of a program.
pub fn to_tree_str(program: &Program) -> String {
    let mut out = String::new();
    heading(&mut out, "ProgramNode", &program.location, "", 0);
    for statement in &program.body {
        print_statement(&mut out, statement, 1);
    }
    out
}

fn pad(depth: usize) -> String {
    " ".repeat(depth * 4)
}

fn heading(out: &mut String, name: &str, location: &Range, metadata: &str, depth: usize) {
    let _ = writeln!(
        out,
        "{}{} ({}:{}, {}:{}){}",
        pad(depth),
        name,
        location.start.line + 1,
        location.start.column,
        location.end.line + 1,
        location.end.column,
        metadata,
    );
}

fn label(out: &mut String, text: &str, depth: usize) {
    let _ = writeln!(out, "{}--> {}", pad(depth), text);
}

fn print_statement(out: &mut String, statement: &Statement, depth: usize) {
    match statement {
        Statement::Block(block) => {
            heading(out, "BlockStatementNode", &block.location, "", depth);
            for item in &block.body {
                print_statement(out, item, depth + 1);
            }
        }
        // Contributes no line at all.
        Statement::Empty(_) => {}
        Statement::Expression(stmt) => print_expression(out, &stmt.expression, depth),
        Statement::If(stmt) => {
            heading(out, "IfStatementNode", &stmt.location, "", depth);
            label(out, "test expression:", depth);
            print_expression(out, &stmt.test, depth + 1);
            label(out, "consequent:", depth);
            print_statement(out, &stmt.consequent, depth + 1);
            if let Some(alternate) = &stmt.alternate {
                label(out, "alternate:", depth);
                print_statement(out, alternate, depth + 1);
            }
        }
        Statement::While(stmt) => {
            heading(out, "WhileStatementNode", &stmt.location, "", depth);
            label(out, "test expression:", depth);
            print_expression(out, &stmt.test, depth + 1);
            label(out, "loop body:", depth);
            print_statement(out, &stmt.body, depth + 1);
        }
        Statement::DoWhile(stmt) => {
            heading(out, "DoWhileStatementNode", &stmt.location, "", depth);
            label(out, "test expression:", depth);
            print_expression(out, &stmt.test, depth + 1);
            label(out, "loop body:", depth);
            print_statement(out, &stmt.body, depth + 1);
        }
        Statement::For(stmt) => {
            heading(out, "ForStatementNode", &stmt.location, "", depth);
            label(out, "test expressions:", depth);
            for clause in &stmt.clauses {
                print_expression(out, clause, depth + 1);
            }
            label(out, "loop body:", depth);
            print_statement(out, &stmt.body, depth + 1);
        }
        Statement::ForVar(stmt) => {
            heading(out, "ForVarStatementNode", &stmt.location, "", depth);
            label(out, "test expressions:", depth);
            print_declaration_list(out, &stmt.declarations, depth + 1);
            for clause in &stmt.clauses {
                print_expression(out, clause, depth + 1);
            }
            label(out, "loop body:", depth);
            print_statement(out, &stmt.body, depth + 1);
        }
        Statement::Break(stmt) => heading(out, "BreakStatementNode", &stmt.location, "", depth),
        Statement::Continue(stmt) => {
            heading(out, "ContinueStatementNode", &stmt.location, "", depth)
        }
        Statement::Return(stmt) => {
            heading(out, "ReturnStatementNode", &stmt.location, "", depth);
            if let Some(value) = &stmt.value {
                label(out, "value:", depth);
                print_expression(out, value, depth + 1);
            }
        }
        Statement::VariableDeclarationList(list) => print_declaration_list(out, list, depth),
        Statement::FunctionDeclaration(decl) => print_function(
            out,
            "FunctionDeclarationNode",
            &decl.location,
            Some(&decl.id),
            &decl.params,
            &decl.body,
            depth,
        ),
    }
}

fn print_declaration_list(out: &mut String, list: &VariableDeclarationList, depth: usize) {
    heading(out, "VariableDeclarationListNode", &list.location, "", depth);
    if !list.declarations.is_empty() {
        label(out, "declarations:", depth);
        for declaration in &list.declarations {
            print_declaration(out, declaration, depth + 1);
        }
    }
}

fn print_declaration(out: &mut String, declaration: &VariableDeclaration, depth: usize) {
    heading(out, "VariableDeclarationNode", &declaration.location, "", depth);
    label(out, "identifier:", depth);
    print_identifier(out, &declaration.identifier, depth + 1);
    if let Some(init) = &declaration.init {
        label(out, "initValue:", depth);
        print_expression(out, init, depth + 1);
    }
}

fn print_function(
    out: &mut String,
    name: &str,
    location: &Range,
    id: Option<&Identifier>,
    params: &[Identifier],
    body: &FunctionBody,
    depth: usize,
) {
    heading(out, name, location, "", depth);
    if let Some(id) = id {
        label(out, "name:", depth);
        print_identifier(out, id, depth + 1);
    }
    if !params.is_empty() {
        label(out, "parameters:", depth);
        for param in params {
            print_identifier(out, param, depth + 1);
        }
    }
    if body.body.is_empty() {
        label(out, "body: empty", depth);
    } else {
        label(out, "body:", depth);
        for statement in &body.body {
            print_statement(out, statement, depth + 1);
        }
    }
}

fn print_identifier(out: &mut String, identifier: &Identifier, depth: usize) {
    let metadata = format!(" : {{ name: {} }}", identifier.name);
    heading(out, "IdentifierNode", &identifier.location, &metadata, depth);
}

fn print_expression(out: &mut String, expression: &Expression, depth: usize) {
    match expression {
        Expression::Literal(literal) => print_literal(out, literal, depth),
        Expression::Identifier(identifier) => print_identifier(out, identifier, depth),
        // Sequences are transparent: elements print at the sequence's own
        // depth, with no heading line for the sequence itself.
        Expression::Sequence(sequence) => {
            for item in &sequence.expressions {
                print_expression(out, item, depth);
            }
        }
        Expression::Array(array) => print_array(out, array, depth),
        Expression::Object(object) => print_object(out, object, depth),
        Expression::Member(member) => print_member(out, member, depth),
        Expression::Call(call) => print_call(out, call, depth),
        Expression::Function(function) => print_function(
            out,
            "FunctionExpressionNode",
            &function.location,
            function.id.as_ref(),
            &function.params,
            &function.body,
            depth,
        ),
        Expression::Binary(binary) => print_binary(out, binary, depth),
        Expression::Unary(unary) => print_unary(out, unary, depth),
        Expression::Assignment(assignment) => print_assignment(out, assignment, depth),
        Expression::Logical(logical) => print_logical(out, logical, depth),
        Expression::IncOrDec(inc_or_dec) => print_inc_or_dec(out, inc_or_dec, depth),
    }
}

fn print_literal(out: &mut String, literal: &Literal, depth: usize) {
    let (name, value) = match &literal.value {
        LiteralValue::Null => ("LiteralNode", "null".to_string()),
        LiteralValue::Undefined => ("UndefinedLiteralNode", "undefined".to_string()),
        LiteralValue::Boolean(flag) => ("LiteralNode", flag.to_string()),
        LiteralValue::Number(text) => ("LiteralNode", text.clone()),
        LiteralValue::String(text) => ("LiteralNode", text.clone()),
    };
    let metadata = format!(" : {{ value: {value} }}");
    heading(out, name, &literal.location, &metadata, depth);
}

fn print_array(out: &mut String, array: &ArrayExpression, depth: usize) {
    heading(out, "ArrayExpressionNode", &array.location, "", depth);
    if array.elements.is_empty() {
        label(out, "elements: empty", depth);
    } else {
        label(out, "elements:", depth);
        for element in &array.elements {
            print_expression(out, element, depth + 1);
        }
    }
}

fn print_object(out: &mut String, object: &ObjectExpression, depth: usize) {
    heading(out, "ObjectExpressionNode", &object.location, "", depth);
    if !object.properties.is_empty() {
        label(out, "properties:", depth);
        for property in &object.properties {
            print_property(out, property, depth + 1);
        }
    }
}

fn print_property(out: &mut String, property: &Property, depth: usize) {
    heading(out, "PropertyNode", &property.location, "", depth);
    label(out, "key:", depth);
    print_expression(out, &property.key, depth + 1);
    label(out, "value:", depth);
    print_expression(out, &property.value, depth + 1);
}

fn print_member(out: &mut String, member: &MemberExpression, depth: usize) {
    let metadata = format!(" {{ computed: {} }}", member.computed);
    heading(out, "MemberExpressionNode", &member.location, &metadata, depth);
    label(out, "object:", depth);
    print_expression(out, &member.object, depth + 1);
    label(out, "property:", depth);
    print_expression(out, &member.property, depth + 1);
}

fn print_call(out: &mut String, call: &CallExpression, depth: usize) {
    heading(out, "CallExpressionNode", &call.location, "", depth);
    label(out, "callable:", depth);
    print_expression(out, &call.callee, depth + 1);
    if !call.arguments.is_empty() {
        label(out, "arguments:", depth);
        for argument in &call.arguments {
            print_expression(out, argument, depth + 1);
        }
    }
}

fn print_binary(out: &mut String, binary: &BinaryExpression, depth: usize) {
    // An unmapped operator renders as null rather than failing the dump.
    let operator = match binary.operator {
        Some(op) => op.to_string(),
        None => "null".to_string(),
    };
    let metadata = format!(" {{ operator: {operator} }}");
    heading(out, "BinaryExpressionNode", &binary.location, &metadata, depth);
    label(out, "left operand:", depth);
    print_expression(out, &binary.left, depth + 1);
    label(out, "right operand:", depth);
    print_expression(out, &binary.right, depth + 1);
}

fn print_unary(out: &mut String, unary: &UnaryExpression, depth: usize) {
    let metadata = format!(" {{ operator: {} }}", unary.operator);
    heading(out, "UnaryExpressionNode", &unary.location, &metadata, depth);
    label(out, "operand:", depth);
    print_expression(out, &unary.operand, depth + 1);
}

fn print_assignment(out: &mut String, assignment: &AssignmentExpression, depth: usize) {
    let metadata = format!(" {{ operator: {ASSIGN_SYMBOL} }}");
    heading(
        out,
        "AssignmentExpressionNode",
        &assignment.location,
        &metadata,
        depth,
    );
    label(out, "left operand:", depth);
    print_expression(out, &assignment.left, depth + 1);
    label(out, "right operand:", depth);
    print_expression(out, &assignment.right, depth + 1);
}

fn print_logical(out: &mut String, logical: &LogicalExpression, depth: usize) {
    let metadata = format!(" {{ operator: {} }}", logical.operator);
    heading(out, "LogicalExpressionNode", &logical.location, &metadata, depth);
    label(out, "left operand:", depth);
    print_expression(out, &logical.left, depth + 1);
    label(out, "right operand:", depth);
    print_expression(out, &logical.right, depth + 1);
}

fn print_inc_or_dec(out: &mut String, expression: &IncOrDecExpression, depth: usize) {
    let name = match expression.kind {
        IncDecKind::Increment => "IncrementExpression",
        IncDecKind::Decrement => "DecrementExpression",
    };
    let direction = match expression.direction {
        IncDecDirection::Pre => "pre",
        IncDecDirection::Post => "post",
    };
    let metadata = format!(" {{ type: {direction} }}");
    heading(out, name, &expression.location, &metadata, depth);
    label(out, "identifier:", depth);
    print_expression(out, &expression.target, depth + 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::es::building::build;
    use crate::es::parsing::parse;

    fn dump(source: &str) -> String {
        to_tree_str(&build(&parse(source).unwrap()).unwrap())
    }

    #[test]
    fn test_sequences_are_transparent() {
        assert_eq!(
            dump("a;"),
            "ProgramNode (1:0, 1:2)\n    IdentifierNode (1:0, 1:1) : { name: a }\n"
        );
    }

    #[test]
    fn test_empty_statement_prints_nothing() {
        assert_eq!(dump(";"), "ProgramNode (1:0, 1:1)\n");
        // Siblings are unaffected by the silent statement.
        assert_eq!(
            dump("; a;"),
            "ProgramNode (1:0, 1:4)\n    IdentifierNode (1:2, 1:3) : { name: a }\n"
        );
    }

    #[test]
    fn test_undefined_placeholder_has_its_own_name() {
        let text = dump("[,];");
        assert!(text.contains("UndefinedLiteralNode (1:1, 1:2) : { value: undefined }"));
    }

    #[test]
    fn test_unmapped_operator_renders_null() {
        let text = dump("a != b;");
        assert!(text.contains("BinaryExpressionNode (1:0, 1:6) { operator: null }"));
    }

    #[test]
    fn test_empty_array_marker_is_inline() {
        let text = dump("[];");
        assert!(text.contains("--> elements: empty\n"));
        assert!(!text.contains("--> elements:\n"));
    }

    #[test]
    fn test_printing_is_deterministic() {
        let program = build(&parse("do { a--; } while (a > 0);").unwrap()).unwrap();
        assert_eq!(to_tree_str(&program), to_tree_str(&program));
    }
}
