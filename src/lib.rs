mod error;
pub use error::{CalcError, CalcResult};

pub mod parser;
pub use parser::tokenizer::{classify, tokenize, Classified, Token};
pub use parser::{parse, Call, Expression, Operator, OperatorName, ParseError, Value, OPERATORS};

mod interpreter;
pub use interpreter::{apply, evaluate, Arity, EvalError};

/// Tokenizes and parses one line into an expression tree. The whole line
/// must form a single expression.
pub fn parse_line(text: &str) -> CalcResult<Expression> {
    let tokens = tokenize(text);
    Ok(parse(&tokens)?)
}

/// Parses and evaluates one line of calculator input.
///
/// ```
/// use calc::{evaluate_line, Value};
///
/// assert_eq!(evaluate_line("add(1, mul(2, 3))"), Ok(Value::Integer(7)));
/// assert!(evaluate_line("div(1, 0)").is_err());
/// ```
#[tracing::instrument(level = "debug")]
pub fn evaluate_line(text: &str) -> CalcResult<Value> {
    let expression = parse_line(text)?;
    tracing::debug!(%expression, "parsed");
    Ok(evaluate(&expression)?)
}
