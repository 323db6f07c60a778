//! Core types and traits for the outfield output-field registry.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the expression service and the registry:
//! field classifications, screen formats, the evaluation [`Scope`],
//! the [`Expression`] trait, and [`EvalError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod expression;
pub mod field;
pub mod scope;

pub use error::EvalError;
pub use expression::Expression;
pub use field::{FieldType, ScreenFormat};
pub use scope::Scope;
