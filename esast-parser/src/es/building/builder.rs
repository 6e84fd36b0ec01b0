//! The parse-tree folding pass
//!
//! [`build`] walks the parse tree top-down and emits one AST node per
//! production, dispatching purely on [`ProductionKind`]. Operator text is
//! canonicalized through `es::ast::operators`; a missed binary lookup
//! embeds `None` in the node instead of failing.
//!
//! A [`BuildError`] marks a builder defect: the parse tree was missing a
//! child the grammar guarantees. It is never a recoverable input error,
//! and a partial node is never constructed in its place.

use std::fmt;

use crate::es::ast::nodes::{
    ArrayExpression, AssignmentExpression, BinaryExpression, BlockStatement, BreakStatement,
    CallExpression, ContinueStatement, DoWhileStatement, EmptyStatement, Expression,
    ExpressionStatement, ForStatement, ForVarStatement, FunctionBody, FunctionDeclaration,
    FunctionExpression, Identifier, IfStatement, IncDecDirection, IncDecKind, IncOrDecExpression,
    Literal, LiteralValue, LogicalExpression, MemberExpression, ObjectExpression, Program,
    Property, ReturnStatement, SequenceExpression, Statement, UnaryExpression,
    VariableDeclaration, VariableDeclarationList, WhileStatement,
};
use crate::es::ast::operators::{self, LogicalOp, UnaryOp};
use crate::es::parsing::tree::{ParseTree, ProductionKind};
use crate::es::token::Token;

/// A structural defect in the parse tree handed to the builder.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    MalformedParseTree {
        expected: &'static str,
        kind: ProductionKind,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MalformedParseTree { expected, kind } => {
                write!(f, "malformed parse tree: expected {expected} in {kind:?} node")
            }
        }
    }
}

impl std::error::Error for BuildError {}

fn missing(expected: &'static str, tree: &ParseTree) -> BuildError {
    BuildError::MalformedParseTree {
        expected,
        kind: tree.kind(),
    }
}

/// Fold a `Program` parse tree into an AST.
pub fn build(tree: &ParseTree) -> Result<Program, BuildError> {
    if tree.kind() != ProductionKind::Program {
        return Err(missing("a Program root", tree));
    }
    let body = tree
        .trees()
        .map(build_statement)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Program {
        body,
        location: tree.location().clone(),
    })
}

fn build_statement(tree: &ParseTree) -> Result<Statement, BuildError> {
    let location = tree.location().clone();
    match tree.kind() {
        ProductionKind::Block => Ok(Statement::Block(BlockStatement {
            body: tree
                .trees()
                .map(build_statement)
                .collect::<Result<Vec<_>, _>>()?,
            location,
        })),
        ProductionKind::EmptyStatement => Ok(Statement::Empty(EmptyStatement { location })),
        ProductionKind::ExpressionStatement => {
            let inner = tree.tree(0).ok_or_else(|| missing("an expression", tree))?;
            Ok(Statement::Expression(ExpressionStatement {
                expression: Box::new(build_expression(inner)?),
                location,
            }))
        }
        ProductionKind::IfStatement => {
            let test = tree.tree(0).ok_or_else(|| missing("a test expression", tree))?;
            let consequent = tree.tree(1).ok_or_else(|| missing("a consequent", tree))?;
            let alternate = tree
                .tree(2)
                .map(|alt| build_statement(alt).map(Box::new))
                .transpose()?;
            Ok(Statement::If(IfStatement {
                test: build_expression(test)?,
                consequent: Box::new(build_statement(consequent)?),
                alternate,
                location,
            }))
        }
        ProductionKind::WhileStatement => {
            let test = tree.tree(0).ok_or_else(|| missing("a test expression", tree))?;
            let body = tree.tree(1).ok_or_else(|| missing("a loop body", tree))?;
            Ok(Statement::While(WhileStatement {
                test: build_expression(test)?,
                body: Box::new(build_statement(body)?),
                location,
            }))
        }
        ProductionKind::DoWhileStatement => {
            let test = tree.tree(0).ok_or_else(|| missing("a test expression", tree))?;
            let body = tree.tree(1).ok_or_else(|| missing("a loop body", tree))?;
            Ok(Statement::DoWhile(DoWhileStatement {
                test: build_expression(test)?,
                body: Box::new(build_statement(body)?),
                location,
            }))
        }
        ProductionKind::ForStatement => {
            let count = tree.tree_count();
            let body = tree
                .tree(count.wrapping_sub(1))
                .ok_or_else(|| missing("a loop body", tree))?;
            let clauses = tree
                .trees()
                .take(count.saturating_sub(1))
                .map(build_expression)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Statement::For(ForStatement {
                clauses,
                body: Box::new(build_statement(body)?),
                location,
            }))
        }
        ProductionKind::ForVarStatement => {
            let count = tree.tree_count();
            let list = tree
                .tree(0)
                .filter(|t| t.kind() == ProductionKind::VariableDeclarationList)
                .ok_or_else(|| missing("a declaration list", tree))?;
            let body = tree
                .tree(count.wrapping_sub(1))
                .ok_or_else(|| missing("a loop body", tree))?;
            let clauses = tree
                .trees()
                .skip(1)
                .take(count.saturating_sub(2))
                .map(build_expression)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Statement::ForVar(ForVarStatement {
                declarations: build_declaration_list(list)?,
                clauses,
                body: Box::new(build_statement(body)?),
                location,
            }))
        }
        ProductionKind::BreakStatement => Ok(Statement::Break(BreakStatement { location })),
        ProductionKind::ContinueStatement => {
            Ok(Statement::Continue(ContinueStatement { location }))
        }
        ProductionKind::ReturnStatement => Ok(Statement::Return(ReturnStatement {
            value: tree.tree(0).map(build_expression).transpose()?,
            location,
        })),
        ProductionKind::VariableDeclarationList => Ok(Statement::VariableDeclarationList(
            build_declaration_list(tree)?,
        )),
        ProductionKind::FunctionDeclaration => {
            let id = tree
                .find(ProductionKind::Identifier)
                .ok_or_else(|| missing("a function name", tree))?;
            let body = tree
                .find(ProductionKind::FunctionBody)
                .ok_or_else(|| missing("a function body", tree))?;
            Ok(Statement::FunctionDeclaration(FunctionDeclaration {
                id: build_identifier(id)?,
                params: build_parameters(tree)?,
                body: build_function_body(body)?,
                location,
            }))
        }
        _ => Err(missing("a statement production", tree)),
    }
}

fn build_declaration_list(tree: &ParseTree) -> Result<VariableDeclarationList, BuildError> {
    let declarations = tree
        .trees()
        .map(build_declaration)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(VariableDeclarationList {
        declarations,
        location: tree.location().clone(),
    })
}

fn build_declaration(tree: &ParseTree) -> Result<VariableDeclaration, BuildError> {
    let id = tree.tree(0).ok_or_else(|| missing("a variable name", tree))?;
    Ok(VariableDeclaration {
        identifier: build_identifier(id)?,
        init: tree.tree(1).map(build_expression).transpose()?,
        location: tree.location().clone(),
    })
}

/// Ordered parameter identifiers of either function form; empty when the
/// parameter-list production is absent.
fn build_parameters(tree: &ParseTree) -> Result<Vec<Identifier>, BuildError> {
    match tree.find(ProductionKind::FormalParameterList) {
        Some(list) => list.trees().map(build_identifier).collect(),
        None => Ok(Vec::new()),
    }
}

fn build_function_body(tree: &ParseTree) -> Result<FunctionBody, BuildError> {
    let body = tree
        .trees()
        .map(build_statement)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FunctionBody {
        body,
        location: tree.location().clone(),
    })
}

fn build_identifier(tree: &ParseTree) -> Result<Identifier, BuildError> {
    let terminal = tree
        .terminal(0)
        .ok_or_else(|| missing("an identifier token", tree))?;
    Ok(Identifier {
        name: terminal.text.clone(),
        location: tree.location().clone(),
    })
}

fn build_expression(tree: &ParseTree) -> Result<Expression, BuildError> {
    let location = tree.location().clone();
    match tree.kind() {
        ProductionKind::ExpressionSequence => {
            let expressions = tree
                .trees()
                .map(build_expression)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Expression::Sequence(SequenceExpression {
                expressions,
                location,
            }))
        }
        // Parentheses leave no node of their own; the inner sequence
        // carries on, even when it has a single element.
        ProductionKind::Parenthesized => {
            let inner = tree.tree(0).ok_or_else(|| missing("an inner expression", tree))?;
            build_expression(inner)
        }
        ProductionKind::Identifier => Ok(Expression::Identifier(build_identifier(tree)?)),
        ProductionKind::Literal => Ok(Expression::Literal(build_literal(tree)?)),
        ProductionKind::ArrayLiteral => {
            let elements = tree
                .trees()
                .map(|element| {
                    if element.kind() == ProductionKind::Elision {
                        // Elided slot: synthesize a placeholder so element
                        // positions survive.
                        Ok(Expression::Literal(Literal {
                            value: LiteralValue::Undefined,
                            location: element.location().clone(),
                        }))
                    } else {
                        build_expression(element)
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Expression::Array(ArrayExpression { elements, location }))
        }
        ProductionKind::ObjectLiteral => {
            let properties = tree
                .trees()
                .map(build_property)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Expression::Object(ObjectExpression {
                properties,
                location,
            }))
        }
        ProductionKind::MemberDot => {
            let object = tree.tree(0).ok_or_else(|| missing("an object expression", tree))?;
            let property = tree.tree(1).ok_or_else(|| missing("a property name", tree))?;
            Ok(Expression::Member(MemberExpression {
                object: Box::new(build_expression(object)?),
                property: Box::new(build_expression(property)?),
                computed: false,
                location,
            }))
        }
        ProductionKind::MemberIndex => {
            let object = tree.tree(0).ok_or_else(|| missing("an object expression", tree))?;
            let property = tree.tree(1).ok_or_else(|| missing("an index expression", tree))?;
            Ok(Expression::Member(MemberExpression {
                object: Box::new(build_expression(object)?),
                property: Box::new(build_expression(property)?),
                computed: true,
                location,
            }))
        }
        ProductionKind::Call => {
            let callee = tree.tree(0).ok_or_else(|| missing("a callee", tree))?;
            let arguments = tree
                .trees()
                .skip(1)
                .map(build_expression)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Expression::Call(CallExpression {
                callee: Box::new(build_expression(callee)?),
                arguments,
                location,
            }))
        }
        ProductionKind::FunctionExpression => {
            let body = tree
                .find(ProductionKind::FunctionBody)
                .ok_or_else(|| missing("a function body", tree))?;
            let id = tree
                .find(ProductionKind::Identifier)
                .map(build_identifier)
                .transpose()?;
            Ok(Expression::Function(FunctionExpression {
                id,
                params: build_parameters(tree)?,
                body: build_function_body(body)?,
                location,
            }))
        }
        ProductionKind::Multiplicative
        | ProductionKind::Additive
        | ProductionKind::BitShift
        | ProductionKind::Relational
        | ProductionKind::Equality
        | ProductionKind::BitAnd
        | ProductionKind::BitXor
        | ProductionKind::BitOr => {
            let (left, right) = binary_operands(tree)?;
            let operator = tree
                .terminal(0)
                .and_then(|terminal| operators::binary_from_symbol(&terminal.text));
            Ok(Expression::Binary(BinaryExpression {
                operator,
                left: Box::new(left),
                right: Box::new(right),
                location,
            }))
        }
        ProductionKind::LogicalAnd | ProductionKind::LogicalOr => {
            let (left, right) = binary_operands(tree)?;
            let operator = if tree.kind() == ProductionKind::LogicalAnd {
                LogicalOp::And
            } else {
                LogicalOp::Or
            };
            Ok(Expression::Logical(LogicalExpression {
                operator,
                left: Box::new(left),
                right: Box::new(right),
                location,
            }))
        }
        ProductionKind::Assignment => {
            let (left, right) = binary_operands(tree)?;
            Ok(Expression::Assignment(AssignmentExpression {
                left: Box::new(left),
                right: Box::new(right),
                location,
            }))
        }
        ProductionKind::UnaryMinus => build_unary(tree, UnaryOp::Minus),
        ProductionKind::UnaryPlus => build_unary(tree, UnaryOp::Plus),
        ProductionKind::LogicNot => build_unary(tree, UnaryOp::LogicNot),
        ProductionKind::BitNot => build_unary(tree, UnaryOp::BitNot),
        ProductionKind::Delete => build_unary(tree, UnaryOp::Delete),
        ProductionKind::PreIncrement => {
            build_inc_or_dec(tree, IncDecKind::Increment, IncDecDirection::Pre)
        }
        ProductionKind::PreDecrement => {
            build_inc_or_dec(tree, IncDecKind::Decrement, IncDecDirection::Pre)
        }
        ProductionKind::PostIncrement => {
            build_inc_or_dec(tree, IncDecKind::Increment, IncDecDirection::Post)
        }
        ProductionKind::PostDecrement => {
            build_inc_or_dec(tree, IncDecKind::Decrement, IncDecDirection::Post)
        }
        _ => Err(missing("an expression production", tree)),
    }
}

fn binary_operands(tree: &ParseTree) -> Result<(Expression, Expression), BuildError> {
    let left = tree.tree(0).ok_or_else(|| missing("a left operand", tree))?;
    let right = tree.tree(1).ok_or_else(|| missing("a right operand", tree))?;
    Ok((build_expression(left)?, build_expression(right)?))
}

fn build_unary(tree: &ParseTree, operator: UnaryOp) -> Result<Expression, BuildError> {
    let operand = tree.tree(0).ok_or_else(|| missing("an operand", tree))?;
    Ok(Expression::Unary(UnaryExpression {
        operator,
        operand: Box::new(build_expression(operand)?),
        location: tree.location().clone(),
    }))
}

fn build_inc_or_dec(
    tree: &ParseTree,
    kind: IncDecKind,
    direction: IncDecDirection,
) -> Result<Expression, BuildError> {
    let target = tree.tree(0).ok_or_else(|| missing("a target", tree))?;
    Ok(Expression::IncOrDec(IncOrDecExpression {
        kind,
        direction,
        target: Box::new(build_expression(target)?),
        location: tree.location().clone(),
    }))
}

fn build_property(tree: &ParseTree) -> Result<Property, BuildError> {
    let key = tree.tree(0).ok_or_else(|| missing("a property key", tree))?;
    let value = tree.tree(1).ok_or_else(|| missing("a property value", tree))?;
    Ok(Property {
        key: build_expression(key)?,
        value: build_expression(value)?,
        location: tree.location().clone(),
    })
}

fn build_literal(tree: &ParseTree) -> Result<Literal, BuildError> {
    let terminal = tree
        .terminal(0)
        .ok_or_else(|| missing("a literal token", tree))?;
    let value = match &terminal.token {
        Token::NullLiteral => LiteralValue::Null,
        Token::BooleanLiteral(flag) => LiteralValue::Boolean(*flag),
        Token::DecimalLiteral(_) => LiteralValue::Number(terminal.text.clone()),
        Token::StringLiteral(_) => LiteralValue::String(terminal.text.clone()),
        _ => return Err(missing("a literal token", tree)),
    };
    Ok(Literal {
        value,
        location: tree.location().clone(),
    })
}
