//! Restricted arithmetic evaluation for the rotation expression.
//!
//! The rotation option accepts a plain arithmetic expression over
//! numbers, `+ - * /` and parentheses. Every character is checked
//! against a whitelist before parsing, so identifiers, function calls
//! and operators like `^` are rejected up front; the expression is
//! then evaluated by a small recursive-descent parser with the usual
//! precedence rules.

use thiserror::Error;

/// The characters a rotation expression may contain.
pub const ALLOWED_CHARS: &str = "0123456789+-*(). /";

/// Evaluates a rotation expression to a scalar.
///
/// ```
/// use sbolv_shorthand::rotation::evaluate;
/// assert_eq!(evaluate("2*(3+4)").unwrap(), 14.0);
/// assert_eq!(evaluate("360 / 4 - 0.5").unwrap(), 89.5);
/// assert!(evaluate("2^3").is_err());
/// ```
///
/// The empty string is not a valid expression; "no rotation given"
/// is decided by the caller before the evaluator is involved (see
/// [`crate::request::build_request`]).
pub fn evaluate(expr: &str) -> Result<f64, RotationError> {
    if let Some(forbidden) = expr.chars().find(|c| !ALLOWED_CHARS.contains(*c)) {
        return Err(RotationError::UnsafeExpression(forbidden));
    }

    let mut parser = Parser {
        src: expr.as_bytes(),
        pos: 0,
    };
    let value = parser.sum()?;
    parser.skip_spaces();
    match parser.peek() {
        None => Ok(value),
        Some(c) => Err(RotationError::UnexpectedChar(char::from(c))),
    }
}

/// Recursive-descent parser over the whitelisted (all-ASCII) input.
///
/// Grammar: `sum := product (('+'|'-') product)*`,
/// `product := factor (('*'|'/') factor)*`,
/// `factor := ('+'|'-') factor | '(' sum ')' | number`.
struct Parser<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    fn sum(&mut self) -> Result<f64, RotationError> {
        let mut value = self.product()?;
        loop {
            self.skip_spaces();
            match self.peek() {
                Some(b'+') => {
                    self.pos += 1;
                    value += self.product()?;
                }
                Some(b'-') => {
                    self.pos += 1;
                    value -= self.product()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn product(&mut self) -> Result<f64, RotationError> {
        let mut value = self.factor()?;
        loop {
            self.skip_spaces();
            match self.peek() {
                Some(b'*') => {
                    self.pos += 1;
                    value *= self.factor()?;
                }
                Some(b'/') => {
                    self.pos += 1;
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(RotationError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> Result<f64, RotationError> {
        self.skip_spaces();
        match self.peek() {
            Some(b'+') => {
                self.pos += 1;
                self.factor()
            }
            Some(b'-') => {
                self.pos += 1;
                Ok(-self.factor()?)
            }
            Some(b'(') => {
                self.pos += 1;
                let value = self.sum()?;
                self.skip_spaces();
                if self.peek() != Some(b')') {
                    return Err(RotationError::UnbalancedParenthesis);
                }
                self.pos += 1;
                Ok(value)
            }
            Some(_) => self.number(),
            None => Err(RotationError::UnexpectedEnd),
        }
    }

    fn number(&mut self) -> Result<f64, RotationError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == b'.') {
            self.pos += 1;
        }
        if self.pos == start {
            // Whitelisted but misplaced, e.g. `2**3` or `()`.
            return Err(RotationError::UnexpectedChar(char::from(self.src[start])));
        }
        // The slice is ASCII digits and dots, so utf8 conversion cannot fail.
        let text = std::str::from_utf8(&self.src[start..self.pos]).unwrap_or_default();
        text.parse()
            .map_err(|_| RotationError::InvalidNumber(text.to_owned()))
    }
}

/// Errors that arise in evaluating rotation expressions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RotationError {
    #[error("unsafe expression: {0:?} is not allowed (allowed characters: \"0123456789+-*(). /\")")]
    UnsafeExpression(char),
    #[error("malformed expression: unexpected {0:?}")]
    UnexpectedChar(char),
    #[error("malformed expression: unexpected end of input")]
    UnexpectedEnd,
    #[error("malformed expression: unbalanced parenthesis")]
    UnbalancedParenthesis,
    #[error("malformed expression: {0:?} is not a number")]
    InvalidNumber(String),
    #[error("division by zero")]
    DivisionByZero,
}
