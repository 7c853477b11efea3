use redcalc::{
    error::{EvalError, ParseError},
    stats::{parse_values, sample_std_deviation},
};

fn deviation_of(text: &str) -> f64 {
    let values = parse_values(text).unwrap_or_else(|e| panic!("Failed to read {text:?}: {e}"));
    sample_std_deviation(&values).unwrap_or_else(|e| panic!("Deviation of {text:?} failed: {e}"))
}

#[test]
fn sample_deviation_of_known_set() {
    let deviation = deviation_of("2 4 4 4\n5 5 7 9");
    assert!((deviation - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
}

#[test]
fn identical_values_have_no_deviation() {
    assert!(deviation_of("3 3 3 3").abs() < 1e-12);
}

#[test]
fn empty_input_is_zero() {
    assert_eq!(deviation_of("  \n "), 0.0);
}

#[test]
fn single_value_is_error() {
    assert!(matches!(sample_std_deviation(&[42.0]), Err(EvalError::DivisionByZero { .. })));
}

#[test]
fn unreadable_value_is_error() {
    assert_eq!(parse_values("1 2 three"),
               Err(ParseError::MalformedToken { token:    "three".to_string(),
                                                position: 2, }));
}
