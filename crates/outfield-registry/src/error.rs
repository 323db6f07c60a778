//! Registry error types.

use std::error::Error;
use std::fmt;

use outfield_core::EvalError;
use outfield_expr::ParseError;

/// Errors from registering, mutating, or evaluating output fields.
///
/// Partial misses in key/group queries are not errors; they are returned
/// in [`Lookup::not_found`](crate::Lookup::not_found).
#[derive(Clone, Debug, PartialEq)]
pub enum RegistryError {
    /// A field with this key is already registered. The existing record
    /// is left untouched.
    DuplicateKey {
        /// The rejected key.
        key: String,
    },
    /// No field is registered under this key.
    KeyNotFound {
        /// The missing key.
        key: String,
    },
    /// Position outside `[0, len)`.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Number of registered fields.
        len: usize,
    },
    /// A custom field's expression failed during the evaluation pass.
    ExpressionEvaluation {
        /// Name of the custom field.
        field: String,
        /// Source text of its expression.
        expression: String,
        /// The evaluator's error.
        source: EvalError,
    },
    /// A field classified as custom was constructed without an expression.
    MissingExpression {
        /// Name of the field.
        field: String,
    },
    /// A custom field definition's expression did not compile.
    InvalidExpression {
        /// Name of the field.
        field: String,
        /// The expression source text.
        expression: String,
        /// The parser's error.
        source: ParseError,
    },
    /// A custom field definition is malformed.
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey { key } => write!(f, "output field '{key}' is already registered"),
            Self::KeyNotFound { key } => write!(f, "no output field named '{key}'"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "field index {index} out of range for {len} fields")
            }
            Self::ExpressionEvaluation {
                field,
                expression,
                source,
            } => write!(
                f,
                "custom field '{field}' failed to evaluate '{expression}': {source}"
            ),
            Self::MissingExpression { field } => {
                write!(f, "custom field '{field}' has no expression")
            }
            Self::InvalidExpression {
                field,
                expression,
                source,
            } => write!(
                f,
                "custom field '{field}' has an invalid expression '{expression}': {source}"
            ),
            Self::InvalidConfig { reason } => write!(f, "invalid custom field: {reason}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ExpressionEvaluation { source, .. } => Some(source),
            Self::InvalidExpression { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_error_names_field_and_expression() {
        let err = RegistryError::ExpressionEvaluation {
            field: "D".into(),
            expression: "C * 2".into(),
            source: EvalError::UndefinedName { name: "C".into() },
        };
        assert_eq!(
            err.to_string(),
            "custom field 'D' failed to evaluate 'C * 2': undefined name 'C'"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn mutation_errors_have_no_source() {
        let err = RegistryError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "field index 4 out of range for 2 fields");
        assert!(err.source().is_none());
    }
}
