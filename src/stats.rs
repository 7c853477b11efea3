use crate::{
    error::ParseError,
    interpreter::{
        evaluator::{
            binary::{add, div, mul, pow, root, sub},
            core::EvalResult,
        },
        parser::core::ParseResult,
    },
};

/// Reads whitespace-separated numbers.
///
/// # Errors
/// Returns [`ParseError::MalformedToken`] for the first word that is not a
/// number.
///
/// # Example
/// ```
/// use redcalc::stats::parse_values;
///
/// assert_eq!(parse_values("1 2.5\n-3").unwrap(), vec![1.0, 2.5, -3.0]);
/// assert!(parse_values("1 two").is_err());
/// ```
pub fn parse_values(text: &str) -> ParseResult<Vec<f64>> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, word)| {
            word.parse()
                .map_err(|_| ParseError::MalformedToken { token: word.to_string(),
                                                          position })
        })
        .collect()
}

/// Computes the sample standard deviation of `values`.
///
/// Uses `sqrt((Σx² - N·mean²) / (N - 1))`, built only from the calculator's
/// own arithmetic primitives. An empty input yields `0`.
///
/// # Errors
/// Returns [`crate::error::EvalError::DivisionByZero`] for a single value,
/// where `N - 1` is zero.
///
/// # Example
/// ```
/// use redcalc::stats::sample_std_deviation;
///
/// let deviation = sample_std_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((deviation - 2.138_089_935_299_395).abs() < 1e-12);
///
/// assert_eq!(sample_std_deviation(&[]).unwrap(), 0.0);
/// assert!(sample_std_deviation(&[1.0]).is_err());
/// ```
pub fn sample_std_deviation(values: &[f64]) -> EvalResult<f64> {
    if values.is_empty() {
        return Ok(0.0);
    }

    let mut count = 0.0;
    let mut sum = 0.0;
    let mut square_sum = 0.0;

    for &value in values {
        count = add(count, 1.0);
        sum = add(sum, value);
        square_sum = add(square_sum, pow(value, 2.0)?);
    }

    let mean = div(sum, count)?;
    let variance = div(sub(square_sum, mul(count, pow(mean, 2.0)?)), sub(count, 1.0))?;

    root(variance, 2.0)
}
