//! Homogeneous parse-tree nodes
//!
//! Every grammar production yields one [`ParseTree`] tagged with its
//! [`ProductionKind`]. Children are stored in source order and may be
//! subtrees or terminals; terminals keep their token, raw text and range,
//! which is how operator spellings and literal spellings reach the builder.

use crate::es::ast::range::Range;
use crate::es::token::Token;

/// The production that created a parse-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductionKind {
    Program,
    Block,
    EmptyStatement,
    ExpressionStatement,
    ExpressionSequence,
    Parenthesized,
    IfStatement,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    ForVarStatement,
    BreakStatement,
    ContinueStatement,
    ReturnStatement,
    VariableDeclarationList,
    VariableDeclaration,
    FunctionDeclaration,
    FunctionExpression,
    FormalParameterList,
    FunctionBody,
    ArrayLiteral,
    Elision,
    ObjectLiteral,
    PropertyAssignment,
    MemberDot,
    MemberIndex,
    Call,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
    UnaryMinus,
    UnaryPlus,
    Delete,
    BitNot,
    LogicNot,
    Multiplicative,
    Additive,
    BitShift,
    Relational,
    Equality,
    BitAnd,
    BitXor,
    BitOr,
    LogicalAnd,
    LogicalOr,
    Assignment,
    Identifier,
    Literal,
}

/// A consumed token with its raw source text and range.
#[derive(Debug, Clone, PartialEq)]
pub struct Terminal {
    pub token: Token,
    pub text: String,
    pub location: Range,
}

/// One child slot of a parse-tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseChild {
    Tree(ParseTree),
    Token(Terminal),
}

/// A parse-tree node: production kind, ordered children, source range.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseTree {
    kind: ProductionKind,
    children: Vec<ParseChild>,
    location: Range,
}

impl ParseTree {
    pub fn new(kind: ProductionKind, children: Vec<ParseChild>, location: Range) -> Self {
        Self {
            kind,
            children,
            location,
        }
    }

    pub fn kind(&self) -> ProductionKind {
        self.kind
    }

    pub fn location(&self) -> &Range {
        &self.location
    }

    pub fn children(&self) -> &[ParseChild] {
        &self.children
    }

    /// Iterate over the subtree children only, skipping terminals.
    pub fn trees(&self) -> impl Iterator<Item = &ParseTree> {
        self.children.iter().filter_map(|child| match child {
            ParseChild::Tree(tree) => Some(tree),
            ParseChild::Token(_) => None,
        })
    }

    /// The n-th subtree child (terminals not counted).
    pub fn tree(&self, n: usize) -> Option<&ParseTree> {
        self.trees().nth(n)
    }

    pub fn tree_count(&self) -> usize {
        self.trees().count()
    }

    /// The n-th terminal child (subtrees not counted).
    pub fn terminal(&self, n: usize) -> Option<&Terminal> {
        self.children
            .iter()
            .filter_map(|child| match child {
                ParseChild::Token(terminal) => Some(terminal),
                ParseChild::Tree(_) => None,
            })
            .nth(n)
    }

    /// First direct subtree child of the given kind.
    pub fn find(&self, kind: ProductionKind) -> Option<&ParseTree> {
        self.trees().find(|tree| tree.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::es::ast::range::Range;

    fn leaf(kind: ProductionKind) -> ParseTree {
        ParseTree::new(kind, vec![], Range::default())
    }

    fn terminal(token: Token, text: &str) -> Terminal {
        Terminal {
            token,
            text: text.to_string(),
            location: Range::default(),
        }
    }

    #[test]
    fn test_tree_accessors_skip_terminals() {
        let tree = ParseTree::new(
            ProductionKind::Additive,
            vec![
                ParseChild::Tree(leaf(ProductionKind::Identifier)),
                ParseChild::Token(terminal(Token::Plus, "+")),
                ParseChild::Tree(leaf(ProductionKind::Literal)),
            ],
            Range::default(),
        );
        assert_eq!(tree.tree_count(), 2);
        assert_eq!(tree.tree(0).map(ParseTree::kind), Some(ProductionKind::Identifier));
        assert_eq!(tree.tree(1).map(ParseTree::kind), Some(ProductionKind::Literal));
        assert_eq!(tree.tree(2), None);
        assert_eq!(tree.terminal(0).map(|t| t.text.as_str()), Some("+"));
        assert_eq!(tree.terminal(1), None);
    }

    #[test]
    fn test_find_matches_direct_children_only() {
        let inner = ParseTree::new(
            ProductionKind::FunctionBody,
            vec![ParseChild::Tree(leaf(ProductionKind::Identifier))],
            Range::default(),
        );
        let tree = ParseTree::new(
            ProductionKind::FunctionExpression,
            vec![ParseChild::Tree(inner)],
            Range::default(),
        );
        assert!(tree.find(ProductionKind::FunctionBody).is_some());
        assert!(tree.find(ProductionKind::Identifier).is_none());
    }
}
