use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

lazy_static! {
    static ref STANDARD: OperatorTable = OperatorTable::default();
}

#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString,
)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Checked integer function applied by an operator, `None` on overflow
pub type BinaryFn = fn(i64, i64) -> Option<i64>;

#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    /// Higher binds tighter
    pub precedence: u8,
    pub associativity: Associativity,
    pub function: BinaryFn,
}

impl OperatorInfo {
    pub fn left(precedence: u8, function: BinaryFn) -> OperatorInfo {
        OperatorInfo {
            precedence,
            associativity: Associativity::Left,
            function,
        }
    }

    pub fn right(precedence: u8, function: BinaryFn) -> OperatorInfo {
        OperatorInfo {
            precedence,
            associativity: Associativity::Right,
            function,
        }
    }

    /// Whether a pending operator with this info must be reduced before `incoming` is pushed
    pub(crate) fn reduces_before(&self, incoming: &OperatorInfo) -> bool {
        match incoming.associativity {
            Associativity::Left => self.precedence >= incoming.precedence,
            Associativity::Right => self.precedence > incoming.precedence,
        }
    }
}

/// Maps operators to their precedence, associativity and function.
///
/// The parser and evaluator consult nothing else to decide how an operator
/// binds or what it computes, so new behaviour is added by registering entries.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    entries: HashMap<Operator, OperatorInfo>,
}

impl Default for OperatorTable {
    fn default() -> Self {
        let mut table = OperatorTable::empty();
        table.register(Operator::Add, OperatorInfo::left(1, i64::checked_add));
        table.register(Operator::Sub, OperatorInfo::left(1, i64::checked_sub));
        table
    }
}

impl OperatorTable {
    pub fn empty() -> OperatorTable {
        OperatorTable {
            entries: HashMap::new(),
        }
    }

    /// The shared table with `+` and `-` at equal precedence
    pub fn standard() -> &'static OperatorTable {
        &STANDARD
    }

    /// Registers or replaces an operator, returning the previous entry
    pub fn register(&mut self, operator: Operator, info: OperatorInfo) -> Option<OperatorInfo> {
        self.entries.insert(operator, info)
    }

    /// Resolves a symbol to a registered operator, `None` if it is not an operator
    pub fn lookup(&self, symbol: &str) -> Option<Operator> {
        symbol
            .parse::<Operator>()
            .ok()
            .filter(|operator| self.entries.contains_key(operator))
    }

    pub fn get(&self, operator: Operator) -> Option<&OperatorInfo> {
        self.entries.get(&operator)
    }

    pub fn precedence(&self, operator: Operator) -> Option<u8> {
        self.get(operator).map(|info| info.precedence)
    }

    pub fn associativity(&self, operator: Operator) -> Option<Associativity> {
        self.get(operator).map(|info| info.associativity)
    }

    /// Applies the operator's function. The outer `None` means the operator
    /// is not registered, the inner one that the arithmetic overflowed.
    pub fn apply(&self, operator: Operator, left: i64, right: i64) -> Option<Option<i64>> {
        self.get(operator).map(|info| (info.function)(left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let table = OperatorTable::standard();

        assert_eq!(table.lookup("+"), Some(Operator::Add));
        assert_eq!(table.lookup("-"), Some(Operator::Sub));
        assert_eq!(table.lookup("*"), None);
        assert_eq!(table.lookup("@"), None);
        assert_eq!(table.lookup("++"), None);
        assert_eq!(table.lookup(""), None);

        let empty = OperatorTable::empty();
        assert_eq!(empty.lookup("+"), None);
    }

    #[test]
    fn test_precedence() {
        let table = OperatorTable::standard();

        assert_eq!(table.precedence(Operator::Add), Some(1));
        assert_eq!(table.precedence(Operator::Sub), Some(1));
        assert_eq!(table.associativity(Operator::Add), Some(Associativity::Left));
        assert_eq!(table.associativity(Operator::Sub), Some(Associativity::Left));
    }

    #[test]
    fn test_apply() {
        let table = OperatorTable::standard();

        assert_eq!(table.apply(Operator::Add, 5, 3), Some(Some(8)));
        assert_eq!(table.apply(Operator::Sub, 5, 3), Some(Some(2)));
        assert_eq!(table.apply(Operator::Add, i64::MAX, 1), Some(None));
        assert_eq!(table.apply(Operator::Sub, i64::MIN, 1), Some(None));
        assert_eq!(OperatorTable::empty().apply(Operator::Add, 1, 1), None);
    }

    #[test]
    fn test_register() {
        let mut table = OperatorTable::default();

        let previous = table.register(Operator::Sub, OperatorInfo::right(1, i64::checked_sub));

        assert_eq!(previous.map(|info| info.associativity), Some(Associativity::Left));
        assert_eq!(table.associativity(Operator::Sub), Some(Associativity::Right));
        // The shared table is unaffected
        assert_eq!(
            OperatorTable::standard().associativity(Operator::Sub),
            Some(Associativity::Left)
        );
    }

    #[test]
    fn test_reduces_before() {
        let add = OperatorInfo::left(1, i64::checked_add);
        let sub_right = OperatorInfo::right(1, i64::checked_sub);
        let tighter = OperatorInfo::left(2, i64::checked_add);

        assert!(add.reduces_before(&add));
        assert!(!add.reduces_before(&sub_right));
        assert!(tighter.reduces_before(&add));
        assert!(!add.reduces_before(&tighter));
    }

    #[test]
    fn test_display() {
        assert_eq!(Operator::Add.to_string(), "+");
        assert_eq!(Operator::Sub.to_string(), "-");
    }
}
