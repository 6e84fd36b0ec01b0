//! The AST node structs
//!
//! Statements and expressions are closed enums over per-kind structs. Every
//! struct carries a `location` covering exactly the source text of its
//! production. Child links use `Box` where the grammar nests a single node
//! and `Vec` where it nests a list; optional parts are `Option`.
//!
//! Nothing here is behavior. Builders live in `es::building`, printers in
//! `es::formats`.

use crate::es::ast::operators::{BinaryOp, LogicalOp, UnaryOp};
use crate::es::ast::range::Range;

/// Root of a parsed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Statement>,
    pub location: Range,
}

/// All statement forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Block(BlockStatement),
    Empty(EmptyStatement),
    Expression(ExpressionStatement),
    If(IfStatement),
    While(WhileStatement),
    DoWhile(DoWhileStatement),
    For(ForStatement),
    ForVar(ForVarStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Return(ReturnStatement),
    VariableDeclarationList(VariableDeclarationList),
    FunctionDeclaration(FunctionDeclaration),
}

impl Statement {
    pub fn location(&self) -> &Range {
        match self {
            Statement::Block(s) => &s.location,
            Statement::Empty(s) => &s.location,
            Statement::Expression(s) => &s.location,
            Statement::If(s) => &s.location,
            Statement::While(s) => &s.location,
            Statement::DoWhile(s) => &s.location,
            Statement::For(s) => &s.location,
            Statement::ForVar(s) => &s.location,
            Statement::Break(s) => &s.location,
            Statement::Continue(s) => &s.location,
            Statement::Return(s) => &s.location,
            Statement::VariableDeclarationList(s) => &s.location,
            Statement::FunctionDeclaration(s) => &s.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub body: Vec<Statement>,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmptyStatement {
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Box<Expression>,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub test: Expression,
    pub consequent: Box<Statement>,
    pub alternate: Option<Box<Statement>>,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub test: Expression,
    pub body: Box<Statement>,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStatement {
    pub test: Expression,
    pub body: Box<Statement>,
    pub location: Range,
}

/// A `for` loop without a declaration part. The clauses are the expression
/// sequences that were actually present between the semicolons, in source
/// order; any of the three may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub clauses: Vec<Expression>,
    pub body: Box<Statement>,
    pub location: Range,
}

/// A `for (var ...; ...; ...)` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ForVarStatement {
    pub declarations: VariableDeclarationList,
    pub clauses: Vec<Expression>,
    pub body: Box<Statement>,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStatement {
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStatement {
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub location: Range,
}

/// The declarations of one `var` statement. The location covers the
/// declarations only, not the `var` keyword or the terminating semicolon.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarationList {
    pub declarations: Vec<VariableDeclaration>,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub identifier: Identifier,
    pub init: Option<Expression>,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub id: Identifier,
    pub params: Vec<Identifier>,
    pub body: FunctionBody,
    pub location: Range,
}

/// A function body. Kept as its own struct rather than a [`BlockStatement`]
/// because the dump renders it transparently under a `body:` label.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionBody {
    pub body: Vec<Statement>,
    pub location: Range,
}

/// All expression forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Identifier(Identifier),
    Sequence(SequenceExpression),
    Array(ArrayExpression),
    Object(ObjectExpression),
    Member(MemberExpression),
    Call(CallExpression),
    Function(FunctionExpression),
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Assignment(AssignmentExpression),
    Logical(LogicalExpression),
    IncOrDec(IncOrDecExpression),
}

impl Expression {
    pub fn location(&self) -> &Range {
        match self {
            Expression::Literal(e) => &e.location,
            Expression::Identifier(e) => &e.location,
            Expression::Sequence(e) => &e.location,
            Expression::Array(e) => &e.location,
            Expression::Object(e) => &e.location,
            Expression::Member(e) => &e.location,
            Expression::Call(e) => &e.location,
            Expression::Function(e) => &e.location,
            Expression::Binary(e) => &e.location,
            Expression::Unary(e) => &e.location,
            Expression::Assignment(e) => &e.location,
            Expression::Logical(e) => &e.location,
            Expression::IncOrDec(e) => &e.location,
        }
    }
}

/// Literal payloads. Numbers and strings keep their raw source spelling;
/// the dump shows them as written, quotes included.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Null,
    /// Synthesized for array elisions; has no source spelling of its own.
    Undefined,
    Boolean(bool),
    Number(String),
    String(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub location: Range,
}

/// A comma-joined expression list. A sequence of length one is a valid
/// node; the dump renders sequences transparently, so flattening is a
/// formatting decision and never changes the model.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceExpression {
    pub expressions: Vec<Expression>,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpression {
    pub elements: Vec<Expression>,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectExpression {
    pub properties: Vec<Property>,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: Expression,
    pub value: Expression,
    pub location: Range,
}

/// Member access. `computed` distinguishes `a[b]` from `a.b`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    pub object: Box<Expression>,
    pub property: Box<Expression>,
    pub computed: bool,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpression {
    pub id: Option<Identifier>,
    pub params: Vec<Identifier>,
    pub body: FunctionBody,
    pub location: Range,
}

/// Two-operand expression. `operator` is `None` when the source token has
/// no canonical mapping; the dump renders that as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub operator: Option<BinaryOp>,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: UnaryOp,
    pub operand: Box<Expression>,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub location: Range,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpression {
    pub operator: LogicalOp,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub location: Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncDecKind {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncDecDirection {
    Pre,
    Post,
}

/// `++x`, `x++`, `--x`, `x--`. Kind and direction are orthogonal.
#[derive(Debug, Clone, PartialEq)]
pub struct IncOrDecExpression {
    pub kind: IncDecKind,
    pub direction: IncDecDirection,
    pub target: Box<Expression>,
    pub location: Range,
}
