//! outfield: a typed, insertion-ordered registry of simulation output fields.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all outfield sub-crates. For most users, adding `outfield` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use outfield::prelude::*;
//!
//! let mut history = HistoryFieldCollection::new();
//! for name in ["LIFT", "DRAG"] {
//!     let field = HistoryField::new(
//!         name,
//!         ScreenFormat::Scientific,
//!         "AERO_COEFF",
//!         FieldType::Coefficient,
//!         "",
//!     )
//!     .unwrap();
//!     history.insert(field).unwrap();
//! }
//! history
//!     .register_custom(&CustomFieldDef::new("EFFICIENCY", "LIFT / DRAG"))
//!     .unwrap();
//!
//! // One reporting cycle: write direct values, then derive the rest.
//! history.set_value_by_key("LIFT", 0.5).unwrap();
//! history.set_value_by_key("DRAG", 0.025).unwrap();
//! history.evaluate_custom_fields().unwrap();
//! assert_eq!(history.value_by_key("EFFICIENCY"), Some(20.0));
//!
//! let lookup = history.fields_by_keys(&["AERO_COEFF", "CAUCHY"], true);
//! assert_eq!(lookup.matches.len(), 1);
//! assert_eq!(lookup.not_found, ["CAUCHY"]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `outfield-core` | `FieldType`, `ScreenFormat`, `Scope`, `Expression`, `EvalError` |
//! | [`expr`] | `outfield-expr` | Expression lexer, parser, and evaluator |
//! | [`registry`] | `outfield-registry` | Field records, collections, evaluation pass |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary types (`outfield-core`).
pub use outfield_core as types;

/// Expression compilation and evaluation (`outfield-expr`).
///
/// [`expr::compile`] turns source text into an [`expr::CompiledExpr`].
pub use outfield_expr as expr;

/// Output field records and collections (`outfield-registry`).
pub use outfield_registry as registry;

/// Common imports for typical outfield usage.
///
/// ```rust
/// use outfield::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use outfield_core::{EvalError, Expression, FieldType, Scope, ScreenFormat};

    // Expressions
    pub use outfield_expr::{compile, CompiledExpr, ParseError};

    // Registry
    pub use outfield_registry::{
        CustomFieldDef, EvaluationPass, FieldCollection, FieldInfo, HistoryField,
        HistoryFieldCollection, Lookup, OutputField, RegistryError, VolumeField,
        VolumeFieldCollection,
    };
}
