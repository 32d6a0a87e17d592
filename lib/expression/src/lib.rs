#[macro_use]
extern crate lazy_static;

pub use error::{EvaluateError, InterpretError, ParseError};
pub use evaluator::{evaluate, evaluate_with};
pub use expr::Expr;
pub use operator::{Associativity, BinaryFn, Operator, OperatorInfo, OperatorTable};
pub use parser::{parse, parse_with, Parser};
pub use token::{tokenize, Token};

mod error;
mod evaluator;
mod expr;
mod operator;
mod parser;
mod token;

/// Parses and evaluates `input` with the standard operator table
pub fn interpret(input: &str) -> Result<i64, InterpretError> {
    let e = parse(input)?;
    Ok(evaluate(&e)?)
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_interpret() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(interpret("5 + 3 - 2")?, 6);
        assert_eq!(interpret("7")?, 7);
        assert_eq!(interpret("10 - 3 - 2")?, 5);
        Ok(())
    }

    #[test]
    fn test_interpret_errors() {
        assert_eq!(
            interpret("5 +"),
            Err(InterpretError::Parse(ParseError::InsufficientOperands(
                Operator::Add
            )))
        );
        assert_eq!(
            interpret(""),
            Err(InterpretError::Parse(ParseError::MalformedExpression {
                operands: 0
            }))
        );
        assert!(matches!(
            interpret(&format!("{} + {}", i64::MAX, i64::MAX)),
            Err(InterpretError::Evaluate(EvaluateError::Overflow { .. }))
        ));

        let e = interpret("5 @ 3").unwrap_err();
        assert_eq!(e.to_string(), "Unsupported token \"@\"");
    }

    #[test]
    fn test_interpret_concurrent() {
        let handles: Vec<_> = (0..8i64)
            .map(|i| thread::spawn(move || interpret(&format!("{} - 1 - 1", i))))
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Ok(i as i64 - 2));
        }
    }
}
