use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operator::Operator;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "type", content = "value")]
pub enum Expr {
    Number(i64),
    Binary(Operator, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn binary(operator: Operator, left: Expr, right: Expr) -> Expr {
        Expr::Binary(operator, Box::new(left), Box::new(right))
    }

    /// Number of operator nodes in the tree
    pub fn operations(&self) -> usize {
        match self {
            Expr::Number(_) => 0,
            Expr::Binary(_, l, r) => 1 + l.operations() + r.operations(),
        }
    }
}

/// Renders the tree as space separated infix.
///
/// Left operands never need grouping, so a left-associative tree renders as
/// the token string it was parsed from. A binary right operand is grouped
/// with parentheses, which the parser does not accept.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(v) => write!(f, "{}", v),
            Expr::Binary(op, l, r) => match &**r {
                Expr::Number(_) => write!(f, "{} {} {}", l, op, r),
                Expr::Binary(..) => write!(f, "{} {} ({})", l, op, r),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let left_assoc = Expr::binary(
            Operator::Sub,
            Expr::binary(Operator::Add, Expr::Number(5), Expr::Number(3)),
            Expr::Number(-2),
        );
        let right_assoc = Expr::binary(
            Operator::Sub,
            Expr::Number(10),
            Expr::binary(Operator::Sub, Expr::Number(3), Expr::Number(2)),
        );

        assert_eq!(Expr::Number(7).to_string(), "7");
        assert_eq!(left_assoc.to_string(), "5 + 3 - -2");
        assert_eq!(right_assoc.to_string(), "10 - (3 - 2)");
    }

    #[test]
    fn test_operations() {
        let e = Expr::binary(
            Operator::Add,
            Expr::binary(Operator::Add, Expr::Number(1), Expr::Number(2)),
            Expr::Number(3),
        );

        assert_eq!(Expr::Number(1).operations(), 0);
        assert_eq!(e.operations(), 2);
    }

    #[test]
    fn test_serialize() -> Result<(), Box<dyn std::error::Error>> {
        let e = Expr::binary(Operator::Add, Expr::Number(1), Expr::Number(2));

        let json = serde_json::to_value(&e)?;

        assert_eq!(
            json,
            serde_json::json!({
                "type": "binary",
                "value": [
                    "add",
                    { "type": "number", "value": 1 },
                    { "type": "number", "value": 2 }
                ]
            })
        );
        assert_eq!(serde_json::from_value::<Expr>(json)?, e);
        Ok(())
    }
}
