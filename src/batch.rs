use crate::{
    display::{DisplayBuffer, ERROR_SENTINEL},
    evaluate,
    interpreter::parser::core::{format_postfix, parse},
    stats::{parse_values, sample_std_deviation},
};

/// What a batch run prints: `output` goes to standard output, `errors` to
/// standard error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub output: Vec<String>,
    pub errors: Vec<String>,
}

impl Report {
    /// A run succeeds when nothing was reported as an error.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The calculation performed on the input of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One expression per line, printing each value.
    Evaluate,
    /// One expression per line, printing each postfix form.
    Postfix,
    /// Keystrokes typed on a display.
    Keys,
    /// Sample standard deviation of the numbers in the input.
    Deviation,
}

/// Runs `input` in the given mode.
#[must_use]
pub fn run(mode: Mode, input: &str) -> Report {
    match mode {
        Mode::Evaluate => run_expressions(input, false),
        Mode::Postfix => run_expressions(input, true),
        Mode::Keys => run_keys(input),
        Mode::Deviation => run_deviation(input),
    }
}

/// Evaluates every non-blank line of `input`.
///
/// A line that fails prints `ERROR` in its place, keeping the output aligned
/// with the input, and reports the cause as an error.
///
/// # Example
/// ```
/// use redcalc::batch::run_expressions;
///
/// let report = run_expressions("2 + 3\n\n1 / 0\n", false);
/// assert_eq!(report.output, ["5", "ERROR"]);
/// assert!(!report.is_success());
/// ```
#[must_use]
pub fn run_expressions(input: &str, postfix_only: bool) -> Report {
    let mut report = Report::default();

    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        let outcome = if postfix_only {
            parse(line).map(|postfix| format_postfix(&postfix))
                       .map_err(|e| e.to_string())
        } else {
            evaluate(line).map(|number| number.to_string())
                          .map_err(|e| e.to_string())
        };

        match outcome {
            Ok(text) => report.output.push(text),
            Err(e) => {
                report.output.push(ERROR_SENTINEL.to_string());
                report.errors.push(e);
            },
        }
    }

    report
}

/// Types `keys` on a fresh display and reports the final display text.
///
/// `=` computes, `<` erases and `c` clears. Whitespace is ignored.
#[must_use]
pub fn run_keys(keys: &str) -> Report {
    let mut display = DisplayBuffer::new();
    let mut report = Report::default();

    for key in keys.chars() {
        match key {
            '=' => {
                if let Err(e) = display.compute() {
                    report.errors.push(e.to_string());
                }
            },
            '<' => display.erase(),
            'c' | 'C' => display.clear(),
            k if k.is_whitespace() => {},
            k => display.push(k),
        }
    }

    report.output.push(display.text().to_string());
    report
}

#[must_use]
pub fn run_deviation(input: &str) -> Report {
    let deviation = parse_values(input).map_err(|e| e.to_string())
                                       .and_then(|values| {
                                           sample_std_deviation(&values).map_err(|e| e.to_string())
                                       });

    let mut report = Report::default();
    match deviation {
        Ok(value) => report.output.push(value.to_string()),
        Err(e) => report.errors.push(e),
    }
    report
}
