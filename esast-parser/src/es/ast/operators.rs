//! Canonical operators and the raw-text lookup tables
//!
//! Operator tokens are canonicalized once, during tree building, into the
//! enums below; the rest of the system never inspects raw operator text.
//! `Display` renders the lexical symbol, which is what the tree dump shows.
//!
//! Lookups go through static tables keyed by token text. A miss is not an
//! error: the builder embeds the unmapped marker (`None`) in the node and
//! the dump prints `null`. Notably `==` and `!=` are absent from the
//! equality table on purpose, so loose-equality sources exercise exactly
//! that path.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Lexical spelling of the assignment operator, fixed by its production.
pub const ASSIGN_SYMBOL: &str = "=";

/// Operators of the single-operand productions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Minus,
    Plus,
    LogicNot,
    BitNot,
    Delete,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Minus => "-",
            UnaryOp::Plus => "+",
            UnaryOp::LogicNot => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::Delete => "delete",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Operators of the two-operand productions whose token is looked up from
/// source text (relational, equality, arithmetic, shifts, bitwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Equal,
    Unequal,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    LeftShift,
    RightShift,
    ArithmeticRightShift,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Remainder,
    BitOr,
    BitXor,
    BitAnd,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Equal => "===",
            BinaryOp::Unequal => "!==",
            BinaryOp::Less => "<",
            BinaryOp::LessOrEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterOrEqual => ">=",
            BinaryOp::LeftShift => "<<",
            BinaryOp::RightShift => ">>",
            BinaryOp::ArithmeticRightShift => ">>>",
            BinaryOp::Addition => "+",
            BinaryOp::Subtraction => "-",
            BinaryOp::Multiplication => "*",
            BinaryOp::Division => "/",
            BinaryOp::Remainder => "%",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::BitAnd => "&",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Short-circuit operators, fixed by their productions rather than looked
/// up from token text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

static UNARY_OPERATORS: Lazy<HashMap<&'static str, UnaryOp>> = Lazy::new(|| {
    let ops = [
        UnaryOp::Minus,
        UnaryOp::Plus,
        UnaryOp::LogicNot,
        UnaryOp::BitNot,
        UnaryOp::Delete,
    ];
    ops.into_iter().map(|op| (op.symbol(), op)).collect()
});

static BINARY_OPERATORS: Lazy<HashMap<&'static str, BinaryOp>> = Lazy::new(|| {
    let ops = [
        BinaryOp::Equal,
        BinaryOp::Unequal,
        BinaryOp::Less,
        BinaryOp::LessOrEqual,
        BinaryOp::Greater,
        BinaryOp::GreaterOrEqual,
        BinaryOp::LeftShift,
        BinaryOp::RightShift,
        BinaryOp::ArithmeticRightShift,
        BinaryOp::Addition,
        BinaryOp::Subtraction,
        BinaryOp::Multiplication,
        BinaryOp::Division,
        BinaryOp::Remainder,
        BinaryOp::BitOr,
        BinaryOp::BitXor,
        BinaryOp::BitAnd,
    ];
    ops.into_iter().map(|op| (op.symbol(), op)).collect()
});

/// Canonicalize a raw binary-operator token; `None` is the unmapped marker.
pub fn binary_from_symbol(text: &str) -> Option<BinaryOp> {
    BINARY_OPERATORS.get(text).copied()
}

/// Canonicalize a raw unary-operator token; `None` is the unmapped marker.
pub fn unary_from_symbol(text: &str) -> Option<UnaryOp> {
    UNARY_OPERATORS.get(text).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relational_lookup() {
        assert_eq!(binary_from_symbol("<"), Some(BinaryOp::Less));
        assert_eq!(binary_from_symbol("<="), Some(BinaryOp::LessOrEqual));
        assert_eq!(binary_from_symbol(">"), Some(BinaryOp::Greater));
        assert_eq!(binary_from_symbol(">="), Some(BinaryOp::GreaterOrEqual));
    }

    #[test]
    fn test_strict_equality_only() {
        assert_eq!(binary_from_symbol("==="), Some(BinaryOp::Equal));
        assert_eq!(binary_from_symbol("!=="), Some(BinaryOp::Unequal));
        // Loose equality has no canonical entry: unmapped marker.
        assert_eq!(binary_from_symbol("=="), None);
        assert_eq!(binary_from_symbol("!="), None);
    }

    #[test]
    fn test_shift_lookup() {
        assert_eq!(binary_from_symbol("<<"), Some(BinaryOp::LeftShift));
        assert_eq!(binary_from_symbol(">>"), Some(BinaryOp::RightShift));
        assert_eq!(
            binary_from_symbol(">>>"),
            Some(BinaryOp::ArithmeticRightShift)
        );
    }

    #[test]
    fn test_unary_lookup() {
        assert_eq!(unary_from_symbol("-"), Some(UnaryOp::Minus));
        assert_eq!(unary_from_symbol("delete"), Some(UnaryOp::Delete));
        assert_eq!(unary_from_symbol("typeof"), None);
    }

    #[test]
    fn test_symbols_round_trip() {
        for (text, op) in BINARY_OPERATORS.iter() {
            assert_eq!(*text, op.symbol());
        }
    }
}
