//! Arithmetic expressions for custom output fields.
//!
//! Compiles infix source text such as `"(CL / CD) * 100"` into a
//! [`CompiledExpr`] that implements [`outfield_core::Expression`]:
//!
//! ```text
//! source ──lexer──▶ tokens ──parser──▶ Expr (AST) ──eval(&Scope)──▶ f64
//! ```
//!
//! Supported syntax: numeric literals, identifiers resolved against the
//! scope, `+ - * / ^`, unary sign, parentheses, the constants `pi` and
//! `e`, and the functions `abs sqrt exp log log10 sin cos tan min max pow`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ast;
pub mod compiled;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{BinaryOp, Expr};
pub use compiled::{compile, CompiledExpr};
pub use error::ParseError;
