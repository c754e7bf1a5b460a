use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::parser::{Call, Expression, Operator, OperatorName, Value};

/// How many operands an operator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    AtLeast(usize),
    Exactly(usize),
}

impl Arity {
    fn admits(self, got: usize) -> bool {
        match self {
            Self::AtLeast(n) => got >= n,
            Self::Exactly(n) => got == n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (qualifier, n) = match self {
            Self::AtLeast(n) => ("at least", n),
            Self::Exactly(n) => ("exactly", n),
        };
        let noun = if *n == 1 { "argument" } else { "arguments" };
        write!(f, "{qualifier} {n} {noun}")
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("{operator} requires {expected}, got {got}")]
    ArityError {
        operator: OperatorName,
        got: usize,
        expected: Arity,
    },

    #[error("{0}: division by zero")]
    DivisionByZero(OperatorName),
}

impl EvalError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ArityError { .. } => "ArityError",
            Self::DivisionByZero(_) => "DivisionByZero",
        }
    }
}

// Integer arithmetic that overflows i64 continues in floating point.
macro_rules! op {
    ( $t: ident, $f: ident, $checked: ident ) => {
        impl $t for Value {
            type Output = Value;

            fn $f(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    (Self::Integer(l), Self::Integer(r)) => l
                        .$checked(r)
                        .map_or_else(|| Self::Float((l as f64).$f(r as f64)), Self::Integer),
                    (l, r) => Self::Float(l.as_float().$f(r.as_float())),
                }
            }
        }
    };
}

op!(Add, add, checked_add);
op!(Sub, sub, checked_sub);
op!(Mul, mul, checked_mul);

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Self::Output {
        match self {
            Self::Integer(i) => i
                .checked_neg()
                .map_or_else(|| Self::Float(-(i as f64)), Self::Integer),
            Self::Float(f) => Self::Float(-f),
        }
    }
}

/// True division; always a float.
fn divide(numerator: Value, denominator: Value) -> Value {
    Value::Float(numerator.as_float() / denominator.as_float())
}

/// Floored modulo: a non-zero result takes the sign of the divisor.
fn modulo(numerator: Value, denominator: Value) -> Value {
    match (numerator, denominator) {
        (Value::Integer(n), Value::Integer(d)) => {
            // only i64::MIN % -1 fails, and its remainder is 0
            let r = n.checked_rem(d).unwrap_or(0);
            if r != 0 && (r < 0) != (d < 0) {
                Value::Integer(r + d)
            } else {
                Value::Integer(r)
            }
        }
        (n, d) => {
            let (n, d) = (n.as_float(), d.as_float());
            let r = n % d;
            if r == 0.0 {
                Value::Float(0.0_f64.copysign(d))
            } else if (r < 0.0) != (d < 0.0) {
                Value::Float(r + d)
            } else {
                Value::Float(r)
            }
        }
    }
}

/// Integer result for an integer base and a non-negative integer exponent.
fn power(base: Value, exponent: Value) -> Value {
    match (base, exponent) {
        // bases whose powers never leave {-1, 0, 1}, whatever the exponent
        (Value::Integer(0), Value::Integer(0)) => Value::Integer(1),
        (Value::Integer(b @ (0 | 1)), Value::Integer(e)) if e >= 0 => Value::Integer(b),
        (Value::Integer(-1), Value::Integer(e)) if e >= 0 => {
            Value::Integer(if e % 2 == 0 { 1 } else { -1 })
        }
        (Value::Integer(b), Value::Integer(e)) if e >= 0 => u32::try_from(e)
            .ok()
            .and_then(|e| b.checked_pow(e))
            .map_or_else(|| Value::Float((b as f64).powf(e as f64)), Value::Integer),
        (b, e) => Value::Float(b.as_float().powf(e.as_float())),
    }
}

fn arity_error(name: OperatorName, args: &[Value], expected: Arity) -> EvalError {
    EvalError::ArityError {
        operator: name,
        got: args.len(),
        expected,
    }
}

fn check_arity(name: OperatorName, args: &[Value], expected: Arity) -> Result<(), EvalError> {
    if expected.admits(args.len()) {
        Ok(())
    } else {
        Err(arity_error(name, args, expected))
    }
}

fn binary(name: OperatorName, args: &[Value]) -> Result<(Value, Value), EvalError> {
    check_arity(name, args, Arity::Exactly(2))?;
    Ok((args[0], args[1]))
}

fn nonzero_denominator(name: OperatorName, args: &[Value]) -> Result<(Value, Value), EvalError> {
    let (numerator, denominator) = binary(name, args)?;
    if denominator.is_zero() {
        return Err(EvalError::DivisionByZero(name));
    }
    Ok((numerator, denominator))
}

/// Applies the named operator to already evaluated arguments.
pub fn apply(name: OperatorName, args: &[Value]) -> Result<Value, EvalError> {
    tracing::trace!(operator = %name, ?args, "apply");
    match name.operator() {
        Operator::Add => Ok(args.iter().fold(Value::Integer(0), |acc, &arg| acc + arg)),
        Operator::Subtract => match args {
            [] => Err(arity_error(name, args, Arity::AtLeast(1))),
            [only] => Ok(-*only),
            [first, rest @ ..] => Ok(rest.iter().fold(*first, |acc, &arg| acc - arg)),
        },
        Operator::Multiply => Ok(args.iter().fold(Value::Integer(1), |acc, &arg| acc * arg)),
        Operator::Divide => nonzero_denominator(name, args).map(|(n, d)| divide(n, d)),
        Operator::Modulo => nonzero_denominator(name, args).map(|(n, d)| modulo(n, d)),
        Operator::Power => binary(name, args).map(|(base, exponent)| power(base, exponent)),
    }
}

enum Task<'e> {
    Evaluate(&'e Expression),
    Apply(&'e Call),
}

/// Reduces an expression tree to a single value. Operands are evaluated
/// left to right and the first failure is returned. The walk uses an
/// explicit stack, so deep nesting cannot exhaust the call stack.
pub fn evaluate(expression: &Expression) -> Result<Value, EvalError> {
    let mut tasks = vec![Task::Evaluate(expression)];
    let mut values: Vec<Value> = vec![];
    while let Some(task) = tasks.pop() {
        match task {
            Task::Evaluate(Expression::Literal(value)) => values.push(*value),
            Task::Evaluate(Expression::Call(call)) => {
                tasks.push(Task::Apply(call));
                tasks.extend(call.operands().iter().rev().map(Task::Evaluate));
            }
            Task::Apply(call) => {
                let args = values.split_off(values.len() - call.operands().len());
                values.push(apply(call.name(), &args)?);
            }
        }
    }
    debug_assert_eq!(values.len(), 1);
    Ok(values[0])
}
