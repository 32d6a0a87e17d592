use crate::error::ParseError;
use crate::operator::{Operator, OperatorTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Literal(i64),
    Operator(Operator),
}

impl Token {
    /// Classifies a raw token, trying an integer literal before an operator symbol
    pub fn classify(raw: &str, table: &OperatorTable) -> Result<Token, ParseError> {
        if let Ok(value) = raw.parse::<i64>() {
            return Ok(Token::Literal(value));
        }
        table
            .lookup(raw)
            .map(Token::Operator)
            .ok_or_else(|| ParseError::UnsupportedToken(raw.to_string()))
    }
}

/// Splits on spaces, yielding no empty tokens for repeated, leading or trailing spaces
pub fn tokenize<'a>(input: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    input.split(' ').filter(|raw| !raw.is_empty())
}
