use crate::parser::{RPNExpr, ShuntingParser};
use crate::rpneval::EvalErr;
use crate::token::Token;

fn infix(expr: &str) -> String {
    ShuntingParser::parse_str(expr).unwrap().to_infix().unwrap()
}

#[test]
fn minimal_parens() {
    assert_eq!(infix("3+4*2"), "3 + 4 * 2");
    assert_eq!(infix("(1+2)*3"), "(1 + 2) * 3");
    assert_eq!(infix("((1+2))*((3))"), "(1 + 2) * 3");
    assert_eq!(infix("1-2-3"), "1 - 2 - 3");
    assert_eq!(infix("1-(2-3)"), "1 - (2 - 3)");
    assert_eq!(infix("8/(4*2)"), "8 / (4 * 2)");
}

#[test]
fn pow_assoc() {
    assert_eq!(infix("2^3^2"), "2 ^ 3 ^ 2");
    assert_eq!(infix("(2^3)^2"), "(2 ^ 3) ^ 2");
    assert_eq!(infix("(1+1)^2*3"), "(1 + 1) ^ 2 * 3");
}

#[test]
fn printed_infix_reparses() {
    for expr in ["3+4*2/(1-5)^2^3", "(9-(8-7))*(6/3)", "1^(2^3)"] {
        let rpn = ShuntingParser::parse_str(expr).unwrap();
        let reparsed = ShuntingParser::parse_str(&rpn.to_infix().unwrap()).unwrap();
        assert_eq!(rpn, reparsed);
    }
}

#[test]
fn bad_print() {
    let rpn = ShuntingParser::parse_str("3+").unwrap();
    assert_eq!(rpn.to_infix(), Err(EvalErr::MissingOperands('+')));
    let rpn = ShuntingParser::parse_str("34").unwrap();
    assert_eq!(rpn.to_infix(), Err(EvalErr::LeftoverOperands(2)));
    assert_eq!(RPNExpr::default().to_infix(), Err(EvalErr::Empty));
    let rpn = RPNExpr(vec![Token::Digit(1), Token::OParen]);
    assert_eq!(rpn.to_infix(), Err(EvalErr::InvalidOperator('(')));
}
