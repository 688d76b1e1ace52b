use crate::token::{Token, Tokenizer};
use log::debug;
use std::fmt;
use thiserror::Error;

#[derive(Error, PartialEq, Debug, Clone)]
pub enum ParseError {
    #[error("missing opening paren")]
    MissingOParen,
    #[error("missing closing paren")]
    MissingCParen,
}

/// Should `top` be moved from the operator stack to the output before
/// `incoming` gets pushed? Ties pop eagerly except for right associative `^`.
pub fn has_higher_precedence(top: &Token, incoming: &Token) -> bool {
    let (prec_top, prec_in) = (top.precedence(), incoming.precedence());
    if prec_top == prec_in {
        return *top != Token::Op(crate::Operator::Pow);
    }
    prec_top > prec_in
}

/// Postfix form of an expression, operands and operators only.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct RPNExpr(pub Vec<Token>);

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for token in self.0.iter() {
            write!(f, "{}", token.symbol())?;
        }
        Ok(())
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(&mut Tokenizer::from_str(expr))
    }

    pub fn parse(lex: &mut impl Iterator<Item = Token>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for token in lex {
            match token {
                Token::Digit(_) => out.push(token),
                Token::OParen => stack.push(token),
                Token::CParen => loop {
                    match stack.pop() {
                        Some(Token::OParen) => break, // peel matching OParen
                        Some(top) => out.push(top),
                        None => return Err(ParseError::MissingOParen),
                    }
                },
                Token::Op(_) => {
                    while let Some(top) = stack.last() {
                        if *top == Token::OParen || !has_higher_precedence(top, &token) {
                            break;
                        }
                        out.extend(stack.pop());
                    }
                    stack.push(token);
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                Token::OParen => return Err(ParseError::MissingCParen),
                token => out.push(token),
            }
        }
        Ok(RPNExpr(out))
    }
}

/// Owns an infix expression together with its postfix conversion.
/// Every assignment of the expression re-runs the conversion.
#[derive(Debug, Clone)]
pub struct Converter {
    expression: String,
    rpn: RPNExpr,
    postfix: String,
}

impl Converter {
    pub fn new(expression: &str) -> Result<Converter, ParseError> {
        let expression = normalize(expression);
        let rpn = ShuntingParser::parse_str(&expression)?;
        let postfix = rpn.to_string();
        debug!("converted {:?} to {:?}", expression, postfix);
        Ok(Converter { expression, rpn, postfix })
    }

    /// Replaces the expression. On error the previous state is kept.
    pub fn set_expression(&mut self, expression: &str) -> Result<(), ParseError> {
        *self = Converter::new(expression)?;
        Ok(())
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn postfix(&self) -> &str {
        &self.postfix
    }

    pub fn rpn(&self) -> &RPNExpr {
        &self.rpn
    }

    pub fn evaluate(&self) -> Result<i32, crate::EvalErr> {
        self.rpn.eval()
    }
}

fn normalize(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}
