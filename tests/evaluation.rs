use redcalc::{
    ast::Operator,
    error::{CalcError, EvalError, ParseError},
    evaluate,
    interpreter::{
        evaluator::{
            binary::{add, div, modulo, mul, pow, root, sub},
            core::eval_postfix,
            unary::factorial,
        },
        lexer::Token,
        parser::core::{format_postfix, parse},
        value::core::Number,
    },
};

fn assert_value(src: &str, expected: Number) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "unexpected result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn eval_error(src: &str) -> EvalError {
    match evaluate(src) {
        Err(CalcError::Eval(e)) => e,
        other => panic!("Expected an evaluation error for {src:?}, got {other:?}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match evaluate(src) {
        Err(CalcError::Parse(e)) => e,
        other => panic!("Expected a parse error for {src:?}, got {other:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("2 + 3", Number::Integer(5));
    assert_value("5 * ( 3 + 6 ) / 15", Number::Integer(3));
    assert_value("7 * 9", Number::Integer(63));
    assert_value("1 / 4", Number::Real(0.25));
    assert_value("0.2 + 0.3", Number::Real(0.5));
}

#[test]
fn root_takes_degree_on_the_left() {
    assert_value("2 √ 25", Number::Integer(5));
    assert_value("2 √ 16", Number::Integer(4));
    assert_value("1 √ 20", Number::Integer(20));
    assert_value("2 √ 0.25", Number::Real(0.5));
}

#[test]
fn factorial_is_postfix() {
    assert_value("5 !", Number::Integer(120));
    assert_value("0 !", Number::Integer(1));
    assert_value("3 ! + 2", Number::Integer(8));
    assert_value("2 * 3 !", Number::Integer(12));
    assert_value("( 1 + 2 ) !", Number::Integer(6));
}

#[test]
fn same_tier_operators_associate_left() {
    assert_value("8 - 3 - 2", Number::Integer(3));
    assert_value("16 / 4 / 2", Number::Integer(2));
    assert_value("2 ^ 3 ^ 2", Number::Integer(64));
    assert_value("7 % 4 * 3", Number::Integer(9));
}

#[test]
fn precedence_tiers() {
    assert_value("2 + 3 * 4", Number::Integer(14));
    assert_value("( 2 + 3 ) * 4", Number::Integer(20));
    assert_value("2 * 3 ^ 2", Number::Integer(18));
    assert_value("10 - 2 √ 16", Number::Integer(6));
}

#[test]
fn leading_operator_uses_implicit_zero() {
    assert_value("- 5", Number::Integer(-5));
    assert_value("+ 5", Number::Integer(5));
    assert_value("-5 + 2", Number::Integer(-3));
}

#[test]
fn integral_results_are_normalized() {
    assert_eq!(evaluate("4 / 2").unwrap(), Number::Integer(2));
    assert_eq!(evaluate("4 / 2").unwrap().to_string(), "2");
    assert_eq!(evaluate("1.5 * 2").unwrap(), Number::Integer(3));
    assert_eq!(evaluate("0.1 + 0.2").unwrap().to_string(), "0.30000000000000004");
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(eval_error("5 / 0"),
                     EvalError::DivisionByZero { operator: Operator::Div, .. }));
    assert!(matches!(eval_error("5 % 0"),
                     EvalError::DivisionByZero { operator: Operator::Mod, .. }));
}

#[test]
fn invalid_exponents_are_errors() {
    assert!(matches!(eval_error("5 ^ -2"), EvalError::InvalidExponent { exponent, .. } if exponent == -2.0));
    assert!(matches!(eval_error("5 ^ 1.5"), EvalError::InvalidExponent { .. }));
    assert!(matches!(eval_error("0 √ 4"),
                     EvalError::InvalidExponent { operator: Operator::Root, .. }));
}

#[test]
fn invalid_factorials_are_errors() {
    assert!(matches!(eval_error("2.5 !"), EvalError::InvalidFactorialOperand { operand } if operand == 2.5));
    assert!(matches!(eval_error("-1 !"), EvalError::InvalidFactorialOperand { .. }));
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert_eq!(parse_error("( 3 + 4"), ParseError::UnbalancedParenthesis { position: 0 });
    assert_eq!(parse_error("3 + 4 )"), ParseError::UnbalancedParenthesis { position: 3 });
    assert_eq!(parse_error("( ( 1 ) + 2"), ParseError::UnbalancedParenthesis { position: 0 });
}

#[test]
fn malformed_tokens_are_errors() {
    assert_eq!(parse_error("2 + x"),
               ParseError::MalformedToken { token:    "x".to_string(),
                                            position: 2, });
    assert!(matches!(parse_error("(3 + 4)"), ParseError::MalformedToken { position: 0, .. }));
    assert!(matches!(parse_error("1.2.3"), ParseError::MalformedToken { .. }));
    assert!(matches!(parse_error("2+3"), ParseError::MalformedToken { .. }));
}

#[test]
fn empty_expression_is_zero() {
    assert_value("", Number::Integer(0));
    assert_value("   ", Number::Integer(0));
    assert_value("( )", Number::Integer(0));
}

#[test]
fn malformed_expressions_are_errors() {
    assert_eq!(eval_error("5 5"), EvalError::MalformedExpression { remaining: 2 });
    assert_eq!(eval_error("+"), EvalError::StackUnderflow { operator: Operator::Add });
    assert!(matches!(eval_error("- - 5"), EvalError::StackUnderflow { .. }));
}

#[test]
fn parse_is_pure() {
    let text = "5 * ( 3 + 6 ) / 15 - 2 √ 9 !";
    assert_eq!(parse(text).unwrap(), parse(text).unwrap());
    assert_eq!(format_postfix(&parse(text).unwrap()), "5 3 6 + * 15 / 2 9 √ ! -");
}

#[test]
fn postfix_can_be_evaluated_directly() {
    let postfix = [Token::Number(8.0),
                   Token::Number(3.0),
                   Token::Operator(Operator::Sub),
                   Token::Number(2.0),
                   Token::Operator(Operator::Sub)];
    assert_eq!(eval_postfix(&postfix).unwrap(), Number::Integer(3));
}

#[test]
fn negative_radicand_is_not_validated() {
    let value = evaluate("2 √ -4").unwrap();
    assert!(matches!(value, Number::Real(r) if r.is_nan()));
}

#[test]
fn large_factorial_overflows_to_infinity() {
    assert_eq!(evaluate("170 !").unwrap(), Number::Real(factorial(170.0).unwrap()));
    assert_eq!(evaluate("171 !").unwrap(), Number::Real(f64::INFINITY));
    assert_eq!(factorial(1e300).unwrap(), f64::INFINITY);
}

#[test]
fn primitives_addition_and_subtraction() {
    assert_eq!(add(2.0, 3.0), 5.0);
    assert_eq!(add(-8_888_555.0, 10_000.0), -8_878_555.0);
    assert_eq!(add(0.2, 0.3), 0.5);
    assert_eq!(sub(20.0, 5.0), 15.0);
    assert_eq!(sub(8.0, 90.0), -82.0);
    assert_eq!(sub(0.0, 0.25), -0.25);
}

#[test]
fn primitives_multiplication_and_division() {
    assert_eq!(mul(-6.0, -8.0), 48.0);
    assert_eq!(mul(8.0, -0.5), -4.0);
    assert_eq!(mul(1_000_000.0, 0.00125), 1250.0);
    assert_eq!(div(3000.0, -3.0).unwrap(), -1000.0);
    assert_eq!(div(52.0, 6.4).unwrap(), 8.125);
    assert_eq!(div(0.0, 586.648_626).unwrap(), 0.0);
    assert!(div(5.0, 0.0).is_err());
}

#[test]
fn primitives_modulo_follows_divisor_sign() {
    assert_eq!(modulo(42.0, 1.0).unwrap(), 0.0);
    assert_eq!(modulo(6.0, 6.0).unwrap(), 0.0);
    assert_eq!(modulo(-6.0, 6.0).unwrap(), 0.0);
    assert_eq!(modulo(88.0, -8.0).unwrap(), 0.0);
    assert_eq!(modulo(11.0, -10.0).unwrap(), -9.0);
    assert_eq!(modulo(-7.0, 3.0).unwrap(), 2.0);
}

#[test]
fn primitives_power_and_root() {
    assert_eq!(pow(6_654_564.356_5, 1.0).unwrap(), 6_654_564.356_5);
    assert_eq!(pow(0.0, 0.0).unwrap(), 1.0);
    assert_eq!(root(0.25, 2.0).unwrap(), 0.5);
    assert!((root(8.0, -3.0).unwrap() - 0.5).abs() < 1e-12);
    assert!((root(1024.0, 10.0).unwrap() - 2.0).abs() < 1e-12);
    assert!(matches!(root(545.0, 0.0), Err(EvalError::InvalidExponent { .. })));
}

#[test]
fn errors_have_readable_messages() {
    assert_eq!(evaluate("2 + x").unwrap_err().to_string(),
               "Error at token 2: 'x' is not a number or an operator.");
    assert_eq!(evaluate("( 1").unwrap_err().to_string(),
               "Error at token 0: Unbalanced parenthesis.");
    assert_eq!(evaluate("-1 !").unwrap_err().to_string(),
               "Factorial is only defined for non-negative integers, but found -1.");
}
