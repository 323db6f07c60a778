//! Expression evaluation errors.

use std::error::Error;
use std::fmt;

/// Errors raised while evaluating an [`Expression`](crate::Expression)
/// against a [`Scope`](crate::Scope).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// The expression references a name that is not in the scope.
    UndefinedName {
        /// The unresolved name.
        name: String,
    },
    /// Division by zero.
    DivisionByZero,
    /// Call to a function the evaluator does not provide.
    UnknownFunction {
        /// The function name as written.
        name: String,
    },
    /// A function was called with the wrong number of arguments.
    Arity {
        /// The function name.
        function: String,
        /// Number of arguments the function takes.
        expected: usize,
        /// Number of arguments supplied.
        found: usize,
    },
    /// An operation produced NaN or infinity (e.g. `sqrt(-1)`, `log(0)`).
    NonFinite {
        /// The operation that produced the value.
        operation: String,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedName { name } => write!(f, "undefined name '{name}'"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::UnknownFunction { name } => write!(f, "unknown function '{name}'"),
            Self::Arity {
                function,
                expected,
                found,
            } => write!(
                f,
                "function '{function}' takes {expected} argument(s), {found} given"
            ),
            Self::NonFinite { operation } => {
                write!(f, "'{operation}' produced a non-finite value")
            }
        }
    }
}

impl Error for EvalError {}
