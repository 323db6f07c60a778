//! [`CompiledExpr`]: the [`Expression`] implementation handed to custom fields.

use outfield_core::{EvalError, Expression, Scope};

use crate::ast::Expr;
use crate::error::ParseError;
use crate::parser::parse;

/// A parsed expression together with its source text.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledExpr {
    source: String,
    root: Expr,
}

/// Compile `source` into an expression ready for evaluation.
pub fn compile(source: &str) -> Result<CompiledExpr, ParseError> {
    let root = parse(source)?;
    Ok(CompiledExpr {
        source: source.trim().to_string(),
        root,
    })
}

impl CompiledExpr {
    /// The expression tree.
    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// Names the expression reads from the scope, sorted and deduplicated.
    ///
    /// Built-in constants (`pi`, `e`) are not listed.
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.root.collect_variables(&mut names);
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl Expression for CompiledExpr {
    fn source(&self) -> &str {
        &self.source
    }

    fn eval(&self, scope: &Scope) -> Result<f64, EvalError> {
        self.root.eval(scope)
    }
}
