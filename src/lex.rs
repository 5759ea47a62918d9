use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

use crate::eval::Operator;

lazy_static! {
    static ref NUMBER_REGEX: Regex = Regex::new(
        r#"(?i)^[+-]?(inf|infinity|nan|([0-9](_?[0-9])*)?(\.([0-9](_?[0-9])*)?)?(e[+-]?[0-9](_?[0-9])*)?)$"#
    )
    .unwrap();
}

#[derive(Debug, PartialEq)]
pub enum LexError {
    InvalidNumber,
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexError::InvalidNumber => write!(f, "not a number"),
        }
    }
}

/// Reads a float literal, ignoring surrounding whitespace.
///
/// The regex only checks the shape (sign, digits, `_` separators, exponent,
/// `inf`/`nan`). Shapes it lets through that still aren't numbers, like `.`
/// or the empty string, are rejected by `f64`'s own parser.
pub fn lex_operand(text: &str) -> Result<f64, LexError> {
    let text = text.trim();

    if !NUMBER_REGEX.is_match(text) {
        return Err(LexError::InvalidNumber);
    }

    text.replace('_', "")
        .parse::<f64>()
        .map_err(|_| LexError::InvalidNumber)
}

pub fn lex_operator(text: &str) -> Option<Operator> {
    match text.trim() {
        "+" => Some(Operator::Add),
        "-" => Some(Operator::Sub),
        "*" => Some(Operator::Mul),
        "/" => Some(Operator::Div),
        _ => None,
    }
}
