use crate::parser::RPNExpr;
use crate::rpneval::EvalErr;
use crate::token::{Assoc, Operator, Token};

#[derive(Debug, Clone)]
enum AST {
    Leaf(u8),
    Node(Operator, Box<AST>, Box<AST>),
}

impl RPNExpr {
    fn build_ast(&self) -> Result<AST, EvalErr> {
        let mut ops = Vec::new();
        for token in self.0.iter() {
            match *token {
                Token::Digit(d) if d > 9 => return Err(EvalErr::BadDigit(d)),
                Token::Digit(d) => ops.push(AST::Leaf(d)),
                Token::Op(op) => {
                    let missing = EvalErr::MissingOperands(op.symbol());
                    let rhs = ops.pop().ok_or_else(|| missing.clone())?;
                    let lhs = ops.pop().ok_or(missing)?;
                    ops.push(AST::Node(op, Box::new(lhs), Box::new(rhs)));
                }
                Token::OParen | Token::CParen => {
                    return Err(EvalErr::InvalidOperator(token.symbol()))
                }
            }
        }
        match ops.len() {
            0 => Err(EvalErr::Empty),
            1 => ops.pop().ok_or(EvalErr::Empty),
            n => Err(EvalErr::LeftoverOperands(n)),
        }
    }

    /// Render back to infix, with parens only where grouping requires them.
    pub fn to_infix(&self) -> Result<String, EvalErr> {
        // leaves bind tighter than any operator
        fn printer(root: &AST) -> (String, Option<(usize, Assoc)>) {
            match root {
                AST::Leaf(d) => (format!("{}", d), None),
                AST::Node(op, lhs, rhs) => {
                    let (prec, assoc) = (op.precedence(), op.assoc());
                    let wrap = |(s, sub): (String, Option<(usize, Assoc)>), keep: Assoc| {
                        match sub {
                            Some((p, _)) if prec > p || (prec == p && assoc != keep) => {
                                format!("({})", s)
                            }
                            _ => s,
                        }
                    };
                    let lh = wrap(printer(lhs), Assoc::Left);
                    let rh = wrap(printer(rhs), Assoc::Right);
                    (format!("{} {} {}", lh, op.symbol(), rh), Some((prec, assoc)))
                }
            }
        }

        Ok(printer(&self.build_ast()?).0)
    }
}
