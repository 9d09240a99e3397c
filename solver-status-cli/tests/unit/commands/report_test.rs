use super::*;
use crate::helpers::{create_capture_logger, get_messages};

fn run_report_with_args(args: &[&str]) -> GenericResult<Vec<String>> {
    let matches = get_report_app().try_get_matches_from(args.to_vec()).unwrap();
    let (logger, messages) = create_capture_logger();

    run_report(&matches, logger)?;

    Ok(get_messages(&messages))
}

#[test]
fn can_report_plain_cost_with_gap() {
    let lines = run_report_with_args(&["report", "--cost", "100", "--optimum", "90", "--elapsed", "1.2345"]).unwrap();

    assert_eq!(lines, vec!["Cost = 100, Gap = 11.1111%, Time = 1.23 sec."]);
}

#[test]
fn can_report_penalized_cost_without_optimum() {
    let lines = run_report_with_args(&["report", "--cost", "100", "--penalty", "5", "--suffix", "*"]).unwrap();

    assert_eq!(lines, vec!["Cost = 5_100, Time = 0.00 sec. *"]);
}

#[test]
fn can_report_inverted_penalty_gap() {
    let args = [
        "report",
        "--cost",
        "7",
        "--penalty",
        "120",
        "--optimum",
        "100",
        "--optimize-penalty",
        "--problem-type",
        "msctsp",
        "--elapsed",
        "2",
    ];

    let lines = run_report_with_args(&args).unwrap();

    assert_eq!(lines, vec!["Cost = 120_7, Gap = -20.0000%, Time = 2.00 sec. "]);
}

#[test]
fn can_report_negative_values() {
    let lines = run_report_with_args(&["report", "--cost", "-100", "--optimum", "-200"]).unwrap();

    assert_eq!(lines, vec!["Cost = -100, Gap = -50.0000%, Time = 0.00 sec."]);
}

#[test]
fn can_return_error_for_invalid_cost() {
    let result = run_report_with_args(&["report", "--cost", "a lot"]);

    assert!(result.is_err_and(|err| err.to_string().starts_with("cannot parse cost from 'a lot'")));
}

#[test]
fn can_return_error_for_unknown_problem_type() {
    let result = run_report_with_args(&["report", "--cost", "1", "--problem-type", "VRP42"]);

    assert_eq!(result, Err(GenericError::from("unknown problem type: 'VRP42'")));
}

#[test]
fn can_return_error_for_missing_config_file() {
    let result = run_report_with_args(&["report", "--cost", "1", "--config", "/non/existing/config.json"]);

    assert!(result.is_err_and(|err| err.to_string().starts_with("cannot open config file")));
}

#[test]
fn can_reject_missing_cost() {
    assert!(get_report_app().try_get_matches_from(["report"]).is_err());
}

#[test]
fn can_report_negative_elapsed_as_absolute_value() {
    let lines = run_report_with_args(&["report", "--cost", "10", "-e", "-1.5"]).unwrap();

    assert_eq!(lines, vec!["Cost = 10, Time = 1.50 sec."]);
}
