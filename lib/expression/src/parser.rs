use log::{debug, trace};

use crate::error::ParseError;
use crate::expr::Expr;
use crate::operator::{Operator, OperatorInfo, OperatorTable};
use crate::token::{tokenize, Token};

/// Operator precedence parser working over an operand and an operator stack
pub struct Parser<'a> {
    table: &'a OperatorTable,
    operands: Vec<Expr>,
    operators: Vec<(Operator, OperatorInfo)>,
}

impl<'a> Parser<'a> {
    pub fn new(table: &'a OperatorTable) -> Parser<'a> {
        Parser {
            table,
            operands: Vec::new(),
            operators: Vec::new(),
        }
    }

    pub fn parse(mut self, input: &str) -> Result<Expr, ParseError> {
        for raw in tokenize(input) {
            trace!("token \"{}\"", raw);
            match Token::classify(raw, self.table)? {
                Token::Literal(v) => self.operands.push(Expr::Number(v)),
                Token::Operator(op) => {
                    let info = self
                        .table
                        .get(op)
                        .copied()
                        .ok_or_else(|| ParseError::UnsupportedToken(raw.to_string()))?;
                    self.push_operator(op, info)?;
                }
            }
        }

        while let Some((op, _)) = self.operators.pop() {
            self.reduce(op)?;
        }

        let operands = self.operands.len();
        match (self.operands.pop(), operands) {
            (Some(root), 1) => {
                debug!("parsed \"{}\" with {} operations", input, root.operations());
                Ok(root)
            }
            _ => Err(ParseError::MalformedExpression { operands }),
        }
    }

    fn push_operator(&mut self, op: Operator, info: OperatorInfo) -> Result<(), ParseError> {
        while let Some(&(top, top_info)) = self.operators.last() {
            if !top_info.reduces_before(&info) {
                break;
            }
            self.operators.pop();
            self.reduce(top)?;
        }
        self.operators.push((op, info));
        Ok(())
    }

    fn reduce(&mut self, op: Operator) -> Result<(), ParseError> {
        // Right operand was pushed last
        let r = self.operands.pop();
        let l = self.operands.pop();
        match (l, r) {
            (Some(l), Some(r)) => {
                self.operands.push(Expr::binary(op, l, r));
                Ok(())
            }
            _ => Err(ParseError::InsufficientOperands(op)),
        }
    }
}

/// Parses with the standard operator table
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    parse_with(input, OperatorTable::standard())
}

pub fn parse_with(input: &str, table: &OperatorTable) -> Result<Expr, ParseError> {
    Parser::new(table).parse(input)
}
