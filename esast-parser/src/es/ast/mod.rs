//! AST node model and supporting vocabulary
//!
//! The model is pure data: every node is a struct with its payload fields
//! and a mandatory `location`, grouped into the closed [`nodes::Statement`]
//! and [`nodes::Expression`] unions. Construction happens exclusively in
//! `es::building`; printing lives in `es::formats`.

pub mod nodes;
pub mod operators;
pub mod range;

pub use nodes::{Expression, Program, Statement};
pub use range::{Position, Range, SourceLocation};
