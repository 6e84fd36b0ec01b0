//! # esast
//!
//! A parser and AST toolkit for an ECMAScript-like scripting language.
//!
//! The library is organized as a pipeline of narrow stages, each usable on
//! its own:
//!
//! src/es
//!   ├── token      Lexical token definitions (logos)
//!   ├── lexing     Base tokenization: source -> (Token, byte span) pairs
//!   ├── parsing    Concrete parse tree and the grammar parser
//!   ├── ast        Node model, operators, and source ranges
//!   ├── building   Parse tree -> AST single-pass builder
//!   └── formats    Deterministic tree dump used by tests and tooling
//!
//! The builder consumes only the parse tree capability surface (production
//! kind, ordered children, terminal text, ranges), so an alternative parser
//! front-end can feed it without touching the AST stage.
//!
//! For the typical "source in, dump out" flow see [`es::pipeline`] and
//! [`es::formats::treeviz`].

pub mod es;
