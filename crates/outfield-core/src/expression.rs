//! The expression capability consumed by custom fields.

use std::fmt;

use crate::error::EvalError;
use crate::scope::Scope;

/// A compiled, immutable expression that yields a scalar when evaluated
/// against a [`Scope`].
///
/// The registry never interprets expression syntax itself; it only holds
/// a boxed `Expression` on each custom field and calls [`eval`](Expression::eval)
/// once per evaluation pass.
pub trait Expression: fmt::Debug + Send + Sync {
    /// The source text the expression was compiled from (for diagnostics).
    fn source(&self) -> &str;

    /// Evaluate against the current scope.
    fn eval(&self, scope: &Scope) -> Result<f64, EvalError>;
}
