use redcalc::batch::{Mode, Report, run, run_deviation, run_expressions, run_keys};

fn assert_output(report: &Report, expected: &[&str]) {
    assert_eq!(report.output, expected, "Unexpected output, errors: {:?}", report.errors);
}

#[test]
fn each_line_prints_its_value() {
    let report = run(Mode::Evaluate, "5 * ( 3 + 6 ) / 15\n2 √ 25\n1 / 4\n");
    assert_output(&report, &["3", "5", "0.25"]);
    assert!(report.is_success());
}

#[test]
fn blank_lines_are_skipped() {
    let report = run_expressions("\n  \n2 + 3\n\n", false);
    assert_output(&report, &["5"]);
}

#[test]
fn failing_line_prints_error_in_place() {
    let report = run_expressions("2 + 3\n1 / 0\n( 3 + 4\n4 !", false);
    assert_output(&report, &["5", "ERROR", "ERROR", "24"]);
    assert_eq!(report.errors.len(), 2);
    assert!(!report.is_success());
}

#[test]
fn postfix_mode_prints_postfix() {
    let report = run(Mode::Postfix, "8 - 3 - 2\n2 + 3 * 4\n( 1");
    assert_output(&report, &["8 3 - 2 -", "2 3 4 * +", "ERROR"]);
    assert_eq!(report.errors.len(), 1);
}

#[test]
fn keys_are_typed_and_computed() {
    assert_output(&run(Mode::Keys, "5*(3+6)/15="), &["3"]);
    assert_output(&run_keys("12<3="), &["13"]);
    assert_output(&run_keys("5+5c7"), &["7"]);
    assert_output(&run_keys("5 ! ="), &["120"]);
}

#[test]
fn keys_without_equals_show_the_expression() {
    let report = run_keys("2√25");
    assert_output(&report, &["2 √ 25"]);
    assert!(report.is_success());
}

#[test]
fn failed_compute_shows_error() {
    let report = run_keys("0.25!=");
    assert_output(&report, &["ERROR"]);
    assert_eq!(report.errors.len(), 1);

    let report = run_keys("0.25!=7");
    assert_output(&report, &["7"]);
    assert!(!report.is_success());
}

#[test]
fn deviation_mode_prints_one_value() {
    assert_output(&run(Mode::Deviation, "1 3\n5"), &["2"]);
    assert_output(&run_deviation("3 3 3"), &["0"]);
}

#[test]
fn deviation_failures_are_reported() {
    let report = run_deviation("42");
    assert!(report.output.is_empty());
    assert_eq!(report.errors.len(), 1);

    assert!(!run_deviation("1 two").is_success());
}
