//! Recursive-descent parsing into a homogeneous parse tree
//!
//! The parser produces a [`tree::ParseTree`], not the AST. Trees keep the
//! grammar shape (one node per production, operator terminals preserved as
//! children) so that `es::building` can fold them into AST nodes in a
//! single pass.

pub mod parser;
pub mod tree;

pub use parser::{parse, SyntaxError};
pub use tree::{ParseChild, ParseTree, ProductionKind, Terminal};
