//! Expression tree and its evaluator.

use std::fmt;

use outfield_core::{EvalError, Scope};
use smallvec::SmallVec;

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^` (right-associative)
    Pow,
}

impl BinaryOp {
    fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A parsed expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// Name resolved against the scope (or a built-in constant).
    Variable(String),
    /// Unary negation.
    Neg(Box<Expr>),
    /// Binary operation.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// Function call.
    Call {
        /// Function name.
        name: String,
        /// Arguments in call order.
        args: Vec<Expr>,
    },
}

/// Built-in constants, shadowed by scope entries of the same name.
const CONSTANTS: [(&str, f64); 2] = [("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

fn constant(name: &str) -> Option<f64> {
    CONSTANTS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, v)| v)
}

impl Expr {
    /// Evaluate against `scope`.
    pub fn eval(&self, scope: &Scope) -> Result<f64, EvalError> {
        match self {
            Self::Number(v) => Ok(*v),
            Self::Variable(name) => scope
                .get(name)
                .or_else(|| constant(name))
                .ok_or_else(|| EvalError::UndefinedName { name: name.clone() }),
            Self::Neg(inner) => Ok(-inner.eval(scope)?),
            Self::Binary { op, lhs, rhs } => {
                let a = lhs.eval(scope)?;
                let b = rhs.eval(scope)?;
                let v = match op {
                    BinaryOp::Add => a + b,
                    BinaryOp::Sub => a - b,
                    BinaryOp::Mul => a * b,
                    BinaryOp::Div if b == 0.0 => return Err(EvalError::DivisionByZero),
                    BinaryOp::Div => a / b,
                    BinaryOp::Pow => a.powf(b),
                };
                finite(op.symbol(), v)
            }
            Self::Call { name, args } => {
                let values = args
                    .iter()
                    .map(|arg| arg.eval(scope))
                    .collect::<Result<SmallVec<[f64; 4]>, _>>()?;
                call(name, &values)
            }
        }
    }

    /// Push every non-constant name referenced by this expression onto `out`.
    pub fn collect_variables<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Number(_) => {}
            Self::Variable(name) => {
                if constant(name).is_none() {
                    out.push(name);
                }
            }
            Self::Neg(inner) => inner.collect_variables(out),
            Self::Binary { lhs, rhs, .. } => {
                lhs.collect_variables(out);
                rhs.collect_variables(out);
            }
            Self::Call { args, .. } => {
                for arg in args {
                    arg.collect_variables(out);
                }
            }
        }
    }
}

fn finite(operation: &str, v: f64) -> Result<f64, EvalError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EvalError::NonFinite {
            operation: operation.to_string(),
        })
    }
}

fn expect_args(name: &str, args: &[f64], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(EvalError::Arity {
            function: name.to_string(),
            expected,
            found: args.len(),
        })
    }
}

fn call(name: &str, args: &[f64]) -> Result<f64, EvalError> {
    let unknown = || EvalError::UnknownFunction {
        name: name.to_string(),
    };
    let arity = match name {
        "abs" | "sqrt" | "exp" | "log" | "log10" | "sin" | "cos" | "tan" => 1,
        "min" | "max" | "pow" => 2,
        _ => return Err(unknown()),
    };
    expect_args(name, args, arity)?;

    let v = match name {
        "abs" => args[0].abs(),
        "sqrt" => args[0].sqrt(),
        "exp" => args[0].exp(),
        "log" => args[0].ln(),
        "log10" => args[0].log10(),
        "sin" => args[0].sin(),
        "cos" => args[0].cos(),
        "tan" => args[0].tan(),
        "min" => args[0].min(args[1]),
        "max" => args[0].max(args[1]),
        "pow" => args[0].powf(args[1]),
        _ => return Err(unknown()),
    };
    finite(name, v)
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Variable(name) => f.write_str(name),
            Self::Neg(inner) => write!(f, "(-{inner})"),
            Self::Binary { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
            Self::Call { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
