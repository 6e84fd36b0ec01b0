//! Parse-tree to AST construction
//!
//! A single post-order pass over the parse tree. Grammar-shaped nodes
//! (parenthesized expressions, single-element sequences) collapse here;
//! everything else maps one production to one AST node.

pub mod builder;

pub use builder::{build, BuildError};
