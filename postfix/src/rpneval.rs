use crate::parser::RPNExpr;
use crate::token::{Operator, Token};
use log::trace;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum EvalErr {
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid operator: {0:?}")]
    InvalidOperator(char),
    #[error("not enough operands for {0:?}")]
    MissingOperands(char),
    #[error("empty expression")]
    Empty,
    #[error("{0} values left on the stack")]
    LeftoverOperands(usize),
    #[error("operand {0} is not a single digit")]
    BadDigit(u8),
}

impl EvalErr {
    /// The postfix input itself was not well formed.
    pub fn is_malformed(&self) -> bool {
        matches!(
            *self,
            EvalErr::MissingOperands(_)
                | EvalErr::Empty
                | EvalErr::LeftoverOperands(_)
                | EvalErr::BadDigit(_)
        )
    }
}

/// Evaluate a postfix string of single digit operands.
pub fn eval_postfix(postfix: &str) -> Result<i32, EvalErr> {
    let mut operands = Operands::default();
    for c in postfix.chars() {
        match c.to_digit(10) {
            Some(digit) => operands.push(digit as i32),
            None => {
                let op = Operator::from_char(c).ok_or(EvalErr::InvalidOperator(c))?;
                operands.apply(op)?;
            }
        }
    }
    operands.finish()
}

impl RPNExpr {
    pub fn eval(&self) -> Result<i32, EvalErr> {
        let mut operands = Operands::default();
        for token in self.0.iter() {
            match *token {
                Token::Digit(d) if d > 9 => return Err(EvalErr::BadDigit(d)),
                Token::Digit(d) => operands.push(d as i32),
                Token::Op(op) => operands.apply(op)?,
                Token::OParen | Token::CParen => {
                    return Err(EvalErr::InvalidOperator(token.symbol()))
                }
            }
        }
        operands.finish()
    }
}

#[derive(Default)]
struct Operands(Vec<i32>);

impl Operands {
    fn push(&mut self, value: i32) {
        self.0.push(value);
    }

    // right operand sits on top
    fn apply(&mut self, op: Operator) -> Result<(), EvalErr> {
        let c = op.symbol();
        let r = self.0.pop().ok_or(EvalErr::MissingOperands(c))?;
        let l = self.0.pop().ok_or(EvalErr::MissingOperands(c))?;
        let value = apply(op, l, r)?;
        trace!("{} {} {} = {}", l, c, r, value);
        self.0.push(value);
        Ok(())
    }

    fn finish(mut self) -> Result<i32, EvalErr> {
        match self.0.len() {
            0 => Err(EvalErr::Empty),
            1 => self.0.pop().ok_or(EvalErr::Empty),
            n => Err(EvalErr::LeftoverOperands(n)),
        }
    }
}

fn apply(op: Operator, l: i32, r: i32) -> Result<i32, EvalErr> {
    match op {
        Operator::Add => Ok(l.wrapping_add(r)),
        Operator::Sub => Ok(l.wrapping_sub(r)),
        Operator::Mul => Ok(l.wrapping_mul(r)),
        Operator::Div if r == 0 => Err(EvalErr::DivisionByZero),
        Operator::Div => Ok(l.wrapping_div(r)),
        // truncated real power, saturating at the i32 bounds
        Operator::Pow => Ok((l as f64).powf(r as f64) as i32),
    }
}
