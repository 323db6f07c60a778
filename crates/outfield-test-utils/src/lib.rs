//! Test utilities and mock types for outfield development.
//!
//! Provides [`MockExpression`], a closure-backed [`Expression`], and
//! prebuilt collections in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::fmt;

use outfield_core::{EvalError, Expression, Scope};

type EvalFn = dyn Fn(&Scope) -> Result<f64, EvalError> + Send + Sync;

/// An [`Expression`] whose evaluation is an arbitrary closure.
///
/// The source text is only used for diagnostics; it is never parsed.
pub struct MockExpression {
    source: String,
    eval: Box<EvalFn>,
}

impl MockExpression {
    pub fn new(
        source: impl Into<String>,
        eval: impl Fn(&Scope) -> Result<f64, EvalError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            source: source.into(),
            eval: Box::new(eval),
        }
    }

    /// Always evaluates to `value`.
    pub fn constant(source: impl Into<String>, value: f64) -> Self {
        Self::new(source, move |_| Ok(value))
    }

    /// Always fails with `error`.
    pub fn failing(source: impl Into<String>, error: EvalError) -> Self {
        Self::new(source, move |_| Err(error.clone()))
    }
}

impl fmt::Debug for MockExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockExpression")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl Expression for MockExpression {
    fn source(&self) -> &str {
        &self.source
    }

    fn eval(&self, scope: &Scope) -> Result<f64, EvalError> {
        (self.eval)(scope)
    }
}
