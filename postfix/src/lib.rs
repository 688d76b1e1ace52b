//! Convert infix arithmetic over single digit operands to postfix (RPN)
//! and evaluate the result.
//!
//! ```
//! use postfix::{eval_postfix, Converter};
//!
//! let conv = Converter::new("3 + 4 * 2").unwrap();
//! assert_eq!(conv.postfix(), "342*+");
//! assert_eq!(eval_postfix(conv.postfix()), Ok(11));
//! ```
//!
//! Every digit is an operand of its own, `12` is the two operands `1` and
//! `2`. Whitespace and unrecognized characters are dropped from infix input.

pub use parser::has_higher_precedence;
pub use parser::Converter;
pub use parser::ParseError;
pub use parser::RPNExpr;
pub use parser::ShuntingParser;

pub mod parser;

pub use self::rpneval::eval_postfix;
pub use self::rpneval::EvalErr;

mod rpneval;

mod rpnprint;
#[cfg(test)]
mod rpnprint_test;

pub use token::{Assoc, Operator, Token, Tokenizer};

mod token;

#[derive(thiserror::Error, Debug, PartialEq, Clone)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("eval error: {0}")]
    Eval(#[from] EvalErr),
}

/// Convert and evaluate an infix expression in one go.
pub fn eval_infix(expression: &str) -> Result<i32, Error> {
    Ok(ShuntingParser::parse_str(expression)?.eval()?)
}
