//! Test support: exhaustive walkers over built trees

use crate::es::ast::nodes::{Expression, FunctionBody, Program, Statement, VariableDeclarationList};
use crate::es::ast::range::Range;

/// Collect every range in the tree, in depth-first order.
pub fn collect_ranges(program: &Program) -> Vec<&Range> {
    let mut ranges = vec![&program.location];
    for statement in &program.body {
        statement_ranges(statement, &mut ranges);
    }
    ranges
}

fn statement_ranges<'a>(statement: &'a Statement, ranges: &mut Vec<&'a Range>) {
    ranges.push(statement.location());
    match statement {
        Statement::Block(block) => {
            for item in &block.body {
                statement_ranges(item, ranges);
            }
        }
        Statement::Empty(_) | Statement::Break(_) | Statement::Continue(_) => {}
        Statement::Expression(stmt) => expression_ranges(&stmt.expression, ranges),
        Statement::If(stmt) => {
            expression_ranges(&stmt.test, ranges);
            statement_ranges(&stmt.consequent, ranges);
            if let Some(alternate) = &stmt.alternate {
                statement_ranges(alternate, ranges);
            }
        }
        Statement::While(stmt) => {
            expression_ranges(&stmt.test, ranges);
            statement_ranges(&stmt.body, ranges);
        }
        Statement::DoWhile(stmt) => {
            expression_ranges(&stmt.test, ranges);
            statement_ranges(&stmt.body, ranges);
        }
        Statement::For(stmt) => {
            for clause in &stmt.clauses {
                expression_ranges(clause, ranges);
            }
            statement_ranges(&stmt.body, ranges);
        }
        Statement::ForVar(stmt) => {
            declaration_list_ranges(&stmt.declarations, ranges);
            for clause in &stmt.clauses {
                expression_ranges(clause, ranges);
            }
            statement_ranges(&stmt.body, ranges);
        }
        Statement::Return(stmt) => {
            if let Some(value) = &stmt.value {
                expression_ranges(value, ranges);
            }
        }
        Statement::VariableDeclarationList(list) => {
            // The list range itself was pushed above via the statement.
            for declaration in &list.declarations {
                ranges.push(&declaration.location);
                ranges.push(&declaration.identifier.location);
                if let Some(init) = &declaration.init {
                    expression_ranges(init, ranges);
                }
            }
        }
        Statement::FunctionDeclaration(decl) => {
            ranges.push(&decl.id.location);
            for param in &decl.params {
                ranges.push(&param.location);
            }
            function_body_ranges(&decl.body, ranges);
        }
    }
}

fn declaration_list_ranges<'a>(list: &'a VariableDeclarationList, ranges: &mut Vec<&'a Range>) {
    ranges.push(&list.location);
    for declaration in &list.declarations {
        ranges.push(&declaration.location);
        ranges.push(&declaration.identifier.location);
        if let Some(init) = &declaration.init {
            expression_ranges(init, ranges);
        }
    }
}

fn function_body_ranges<'a>(body: &'a FunctionBody, ranges: &mut Vec<&'a Range>) {
    ranges.push(&body.location);
    for statement in &body.body {
        statement_ranges(statement, ranges);
    }
}

fn expression_ranges<'a>(expression: &'a Expression, ranges: &mut Vec<&'a Range>) {
    ranges.push(expression.location());
    match expression {
        Expression::Literal(_) | Expression::Identifier(_) => {}
        Expression::Sequence(sequence) => {
            for item in &sequence.expressions {
                expression_ranges(item, ranges);
            }
        }
        Expression::Array(array) => {
            for element in &array.elements {
                expression_ranges(element, ranges);
            }
        }
        Expression::Object(object) => {
            for property in &object.properties {
                ranges.push(&property.location);
                expression_ranges(&property.key, ranges);
                expression_ranges(&property.value, ranges);
            }
        }
        Expression::Member(member) => {
            expression_ranges(&member.object, ranges);
            expression_ranges(&member.property, ranges);
        }
        Expression::Call(call) => {
            expression_ranges(&call.callee, ranges);
            for argument in &call.arguments {
                expression_ranges(argument, ranges);
            }
        }
        Expression::Function(function) => {
            if let Some(id) = &function.id {
                ranges.push(&id.location);
            }
            for param in &function.params {
                ranges.push(&param.location);
            }
            function_body_ranges(&function.body, ranges);
        }
        Expression::Binary(binary) => {
            expression_ranges(&binary.left, ranges);
            expression_ranges(&binary.right, ranges);
        }
        Expression::Unary(unary) => expression_ranges(&unary.operand, ranges),
        Expression::Assignment(assignment) => {
            expression_ranges(&assignment.left, ranges);
            expression_ranges(&assignment.right, ranges);
        }
        Expression::Logical(logical) => {
            expression_ranges(&logical.left, ranges);
            expression_ranges(&logical.right, ranges);
        }
        Expression::IncOrDec(inc_or_dec) => expression_ranges(&inc_or_dec.target, ranges),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::es::pipeline::parse_source;

    #[test]
    fn test_every_range_is_ordered() {
        let program = parse_source(
            "function f(a) { for (var i = 0; i < a; i++) { f(i)[0].x = { k: [1,,3] }; } }",
        )
        .unwrap();
        let ranges = collect_ranges(&program);
        assert!(ranges.len() > 20);
        for range in ranges {
            assert!(range.start <= range.end, "unordered range {range}");
        }
    }
}
