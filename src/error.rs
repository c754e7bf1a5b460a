use crate::interpreter::EvalError;
use crate::parser::ParseError;

pub type CalcResult<T> = Result<T, CalcError>;

/// Any failure of a single line. None of them is fatal for the session.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// The variant name, e.g. `ExpectedComma` or `DivisionByZero`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse(err) => err.kind(),
            Self::Eval(err) => err.kind(),
        }
    }

    /// Coarse class: malformed input, misuse of an operator, or a zero divisor.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse(_) => "SyntaxError",
            Self::Eval(EvalError::ArityError { .. }) => "TypeError",
            Self::Eval(EvalError::DivisionByZero(_)) => "ZeroDivisionError",
        }
    }

    /// The `<ErrorKind>: <message>` line shown to the user.
    pub fn report(&self) -> String {
        format!("{}: {}", self.kind(), self)
    }
}
