use crate::error::EvaluateError;
use crate::expr::Expr;
use crate::operator::OperatorTable;

/// Evaluates with the standard operator table
pub fn evaluate(e: &Expr) -> Result<i64, EvaluateError> {
    evaluate_with(e, OperatorTable::standard())
}

/// Recursion depth equals the depth of the tree
pub fn evaluate_with(e: &Expr, table: &OperatorTable) -> Result<i64, EvaluateError> {
    match e {
        Expr::Number(v) => Ok(*v),
        Expr::Binary(op, l, r) => {
            let left = evaluate_with(l, table)?;
            let right = evaluate_with(r, table)?;
            table
                .apply(*op, left, right)
                .ok_or(EvaluateError::UnknownOperator(*op))?
                .ok_or(EvaluateError::Overflow {
                    operator: *op,
                    left,
                    right,
                })
        }
    }
}
