//! Output renderings of a built AST
//!
//! `treeviz` is the canonical indented text dump, stable enough to diff
//! against stored fixtures byte for byte.

pub mod treeviz;

pub use treeviz::to_tree_str;
