use derive_more::Display;

use crate::operator::Operator;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[display(fmt = "Unsupported token \"{}\"", _0)]
    UnsupportedToken(String),

    #[display(fmt = "Insufficient operands for \"{}\"", _0)]
    InsufficientOperands(Operator),

    #[display(fmt = "Malformed expression: expected 1 operand, found {}", operands)]
    MalformedExpression { operands: usize },
}

impl std::error::Error for ParseError {}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    #[display(fmt = "Overflow evaluating {} {} {}", left, operator, right)]
    Overflow {
        operator: Operator,
        left: i64,
        right: i64,
    },

    #[display(fmt = "Operator \"{}\" is not registered", _0)]
    UnknownOperator(Operator),
}

impl std::error::Error for EvaluateError {}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum InterpretError {
    #[display(fmt = "{}", _0)]
    Parse(ParseError),

    #[display(fmt = "{}", _0)]
    Evaluate(EvaluateError),
}

impl std::error::Error for InterpretError {}

impl From<ParseError> for InterpretError {
    fn from(e: ParseError) -> Self {
        InterpretError::Parse(e)
    }
}

impl From<EvaluateError> for InterpretError {
    fn from(e: EvaluateError) -> Self {
        InterpretError::Evaluate(e)
    }
}
