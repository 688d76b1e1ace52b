#![deny(warnings)]

use log::trace;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match *self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    pub fn precedence(&self) -> usize {
        match *self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow => 3,
        }
    }

    pub fn assoc(&self) -> Assoc {
        match *self {
            Operator::Pow => Assoc::Right,
            _ => Assoc::Left,
        }
    }
}

/// A single character of an infix expression. Operands are one digit wide.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Token {
    Digit(u8),
    Op(Operator),
    OParen,
    CParen,
}

impl Token {
    pub fn from_char(c: char) -> Option<Token> {
        match c {
            '0'..='9' => Some(Token::Digit(c as u8 - b'0')),
            '(' => Some(Token::OParen),
            ')' => Some(Token::CParen),
            _ => Operator::from_char(c).map(Token::Op),
        }
    }

    pub fn symbol(&self) -> char {
        match *self {
            Token::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('?'),
            Token::Op(op) => op.symbol(),
            Token::OParen => '(',
            Token::CParen => ')',
        }
    }

    // parens and operands never win a precedence comparison
    pub fn precedence(&self) -> usize {
        match *self {
            Token::Op(op) => op.precedence(),
            _ => 0,
        }
    }
}

pub struct Tokenizer<I: Iterator<Item = char>> {
    src: I,
}

impl<I: Iterator<Item = char>> Tokenizer<I> {
    pub fn new(source: I) -> Self {
        Tokenizer { src: source }
    }
}

impl<'a> Tokenizer<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Tokenizer::new(source.chars())
    }
}

impl<I: Iterator<Item = char>> Iterator for Tokenizer<I> {
    type Item = Token;
    fn next(&mut self) -> Option<Self::Item> {
        for c in self.src.by_ref() {
            match Token::from_char(c) {
                Some(token) => return Some(token),
                None if c.is_whitespace() => (),
                None => trace!("skipping unknown character {:?}", c),
            }
        }
        None
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Operator, Token, Tokenizer};

    #[test]
    fn basic_ops() {
        let lx = Tokenizer::from_str("3+4*2/(1-5)^2^3");
        let expect = [
            Token::Digit(3),
            Token::Op(Operator::Add),
            Token::Digit(4),
            Token::Op(Operator::Mul),
            Token::Digit(2),
            Token::Op(Operator::Div),
            Token::OParen,
            Token::Digit(1),
            Token::Op(Operator::Sub),
            Token::Digit(5),
            Token::CParen,
            Token::Op(Operator::Pow),
            Token::Digit(2),
            Token::Op(Operator::Pow),
            Token::Digit(3),
        ];
        assert_eq!(lx.collect::<Vec<_>>(), expect);
    }

    #[test]
    fn digits_are_single_operands() {
        let lx = Tokenizer::from_str("12");
        assert_eq!(lx.collect::<Vec<_>>(), [Token::Digit(1), Token::Digit(2)]);
    }

    #[test]
    fn skips_whitespace_and_junk() {
        let mut lx = Tokenizer::from_str(" 7 \t% x= 9\n");
        assert_eq!(lx.next(), Some(Token::Digit(7)));
        assert_eq!(lx.next(), Some(Token::Digit(9)));
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn symbols_roundtrip() {
        for c in "0123456789+-*/^()".chars() {
            assert_eq!(Token::from_char(c).map(|t| t.symbol()), Some(c));
        }
        assert_eq!(Token::from_char('$'), None);
        assert_eq!(Token::from_char('.'), None);
    }

    #[test]
    fn precedence_levels() {
        assert_eq!(Token::Op(Operator::Add).precedence(), 1);
        assert_eq!(Token::Op(Operator::Sub).precedence(), 1);
        assert_eq!(Token::Op(Operator::Mul).precedence(), 2);
        assert_eq!(Token::Op(Operator::Div).precedence(), 2);
        assert_eq!(Token::Op(Operator::Pow).precedence(), 3);
        assert_eq!(Token::OParen.precedence(), 0);
        assert_eq!(Token::Digit(5).precedence(), 0);
    }
}
