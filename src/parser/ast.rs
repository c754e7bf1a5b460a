use std::fmt;

/// A number produced by a literal or by evaluating a call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
}

impl Value {
    pub fn as_float(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => {
                let repr = x.to_string();
                // keep floats distinguishable from integers when read back
                if repr.contains(['.', 'e', 'i', 'N']) {
                    f.write_str(&repr)
                } else {
                    write!(f, "{repr}.0")
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

const ADD: (&str, Operator) = ("add", Operator::Add);
const SUB: (&str, Operator) = ("sub", Operator::Subtract);
const MUL: (&str, Operator) = ("mul", Operator::Multiply);
const DIV: (&str, Operator) = ("div", Operator::Divide);
const MODOLO: (&str, Operator) = ("modolo", Operator::Modulo);
const POWER: (&str, Operator) = ("power", Operator::Power);
const PLUS: (&str, Operator) = ("+", Operator::Add);
const MINUS: (&str, Operator) = ("-", Operator::Subtract);
const STAR: (&str, Operator) = ("*", Operator::Multiply);
const SLASH: (&str, Operator) = ("/", Operator::Divide);
const PERCENT: (&str, Operator) = ("%", Operator::Modulo);
const CIRCUMFLEX: (&str, Operator) = ("^", Operator::Power);

/// Every recognized spelling, word forms first.
pub const OPERATORS: [(&str, Operator); 12] = [
    ADD, SUB, MUL, DIV, MODOLO, POWER, PLUS, MINUS, STAR, SLASH, PERCENT, CIRCUMFLEX,
];

/// An operator as written by the user. Only obtainable through
/// [`OperatorName::lookup`], so it always names a known operator.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorName {
    spelling: &'static str,
    operator: Operator,
}

impl OperatorName {
    pub fn lookup(spelling: &str) -> Option<Self> {
        OPERATORS
            .iter()
            .find(|(known, _)| *known == spelling)
            .map(|&(spelling, operator)| Self { spelling, operator })
    }

    pub fn spelling(&self) -> &'static str {
        self.spelling
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }
}

impl fmt::Debug for OperatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}(\"{}\")", self.operator, self.spelling)
    }
}

impl fmt::Display for OperatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub(crate) name: OperatorName,
    pub(crate) operands: Vec<Expression>,
}

impl Call {
    pub fn new(name: OperatorName, operands: Vec<Expression>) -> Self {
        Self { name, operands }
    }

    pub fn name(&self) -> OperatorName {
        self.name
    }

    pub fn operands(&self) -> &[Expression] {
        &self.operands
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Value),
    Call(Call),
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<Call> for Expression {
    fn from(value: Call) -> Self {
        Self::Call(value)
    }
}

// Trees can nest arbitrarily deep, so teardown and printing walk them with
// an explicit stack instead of recursing.
impl Drop for Call {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(operand) = pending.pop() {
            if let Expression::Call(mut call) = operand {
                pending.append(&mut call.operands);
            }
        }
    }
}

enum Piece<'e> {
    Expression(&'e Expression),
    Call(&'e Call),
    Text(&'static str),
}

fn write_canonical(f: &mut fmt::Formatter<'_>, root: Piece<'_>) -> fmt::Result {
    let mut pending = vec![root];
    while let Some(piece) = pending.pop() {
        match piece {
            Piece::Text(text) => f.write_str(text)?,
            Piece::Expression(Expression::Literal(value)) => write!(f, "{value}")?,
            Piece::Expression(Expression::Call(call)) | Piece::Call(call) => {
                write!(f, "{}(", call.name)?;
                pending.push(Piece::Text(")"));
                for (i, operand) in call.operands.iter().enumerate().rev() {
                    pending.push(Piece::Expression(operand));
                    if i > 0 {
                        pending.push(Piece::Text(", "));
                    }
                }
            }
        }
    }
    Ok(())
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(f, Piece::Call(self))
    }
}

/// Canonical form: `spelling(operand, operand, ...)`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(f, Piece::Expression(self))
    }
}
