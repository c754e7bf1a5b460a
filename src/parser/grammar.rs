use super::ast::{Call, Expression, OperatorName};
use super::error::ParseError;
use super::tokenizer::{classify, Classified, Token, TokenType};

/// A parsed value together with the tokens that are still to be consumed.
pub type ParseResult<'a, Output> = Result<(Output, &'a [Token<'a>]), ParseError>;

/// Parses a whole line. The tokens must form exactly one expression.
pub fn parse<'a>(tokens: &'a [Token<'a>]) -> Result<Expression, ParseError> {
    let (expression, rest) = analyze(tokens)?;
    if !rest.is_empty() {
        let leftover = rest.iter().map(|t| t.lexeme().to_string()).collect();
        return Err(ParseError::ExtraTokens(leftover));
    }
    Ok(expression)
}

fn next<'a>(input: &'a [Token<'a>]) -> ParseResult<'a, Token<'a>> {
    match input.split_first() {
        Some((token, rest)) => Ok((*token, rest)),
        None => Err(ParseError::EmptyInput),
    }
}

/// A call whose operand list is still open.
struct Frame {
    name: OperatorName,
    operands: Vec<Expression>,
}

/// Parses a single expression from the front of `input`. Open calls are
/// kept on an explicit stack so nesting depth is not limited by recursion.
fn analyze<'a>(mut input: &'a [Token<'a>]) -> ParseResult<'a, Expression> {
    let mut open: Vec<Frame> = vec![];
    loop {
        let (token, rest) = next(input)?;
        tracing::trace!(token = token.lexeme(), depth = open.len(), "analyze");
        input = rest;
        let mut complete = match classify(token.lexeme()) {
            Classified::Number(value) => Expression::Literal(value),
            Classified::Name(name) => {
                let Some(operator) = OperatorName::lookup(name) else {
                    return Err(ParseError::UnexpectedToken(name.to_string()));
                };
                input = match input.split_first() {
                    Some((paren, rest)) if paren.typ == TokenType::LPAR => rest,
                    _ => return Err(ParseError::ExpectedOpenParen(operator)),
                };
                let (token, rest) = next(input)?;
                if token.typ != TokenType::RPAR {
                    open.push(Frame {
                        name: operator,
                        operands: vec![],
                    });
                    continue;
                }
                input = rest;
                Call::new(operator, vec![]).into()
            }
        };
        // hand the finished expression to the enclosing calls until one
        // of them expects another operand
        loop {
            let Some(mut frame) = open.pop() else {
                return Ok((complete, input));
            };
            frame.operands.push(complete);
            let (token, rest) = next(input)?;
            input = rest;
            match token.typ {
                TokenType::RPAR => complete = Call::new(frame.name, frame.operands).into(),
                TokenType::COMMA => {
                    open.push(frame);
                    break;
                }
                _ => return Err(ParseError::ExpectedComma),
            }
        }
    }
}
