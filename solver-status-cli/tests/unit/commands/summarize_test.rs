use super::*;
use crate::helpers::{create_capture_logger, get_messages};
use std::io::Write;
use tempfile::NamedTempFile;

fn create_runs_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();

    file
}

fn run_summarize_with_args(args: &[&str]) -> GenericResult<Vec<String>> {
    let matches = get_summarize_app().try_get_matches_from(args.to_vec()).unwrap();
    let (logger, messages) = create_capture_logger();

    run_summarize(&matches, logger)?;

    Ok(get_messages(&messages))
}

#[test]
fn can_summarize_runs_from_file() {
    let file = create_runs_file(
        r#"[
            { "cost": 100, "trials": 5, "time": 1.0 },
            { "cost": 110, "trials": 10, "time": 2.0 },
            { "cost": 105, "trials": 15, "time": 3.0 }
        ]"#,
    );
    let path = file.path().to_str().unwrap();

    let lines = run_summarize_with_args(&["summarize", path, "--optimum", "100"]).unwrap();

    assert_eq!(
        lines,
        vec![
            "Successes/Runs = 1/3",
            "Cost.min = 100, Cost.avg = 105.00, Cost.max = 110",
            "Gap.min = 0.0000%, Gap.avg = 5.0000%, Gap.max = 10.0000%",
            "Trials.min = 5, Trials.avg = 10.0, Trials.max = 15",
            "Time.min = 1.00 sec., Time.avg = 2.00 sec., Time.max = 3.00 sec.",
            "Time.total = 6.00 sec.",
        ]
    );
}

#[test]
fn can_track_penalty_when_runs_have_it() {
    let file = create_runs_file(r#"[{ "cost": 10, "penalty": 4 }, { "cost": 12, "penalty": 2 }]"#);
    let path = file.path().to_str().unwrap();

    let lines = run_summarize_with_args(&["summarize", path, "--total-time", "7.5"]).unwrap();

    assert!(lines.contains(&"Penalty.min = 2, Penalty.avg = 3.00, Penalty.max = 4".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("Time.total = 7.50 sec."));
}

#[test]
fn can_return_error_for_malformed_runs_file() {
    let file = create_runs_file("not a json");
    let path = file.path().to_str().unwrap();

    let result = run_summarize_with_args(&["summarize", path]);

    assert!(result.is_err_and(|err| err.to_string().starts_with("cannot deserialize runs:")));
}

#[test]
fn can_return_error_for_invalid_total_time() {
    let file = create_runs_file(r#"[{ "cost": 10 }]"#);
    let path = file.path().to_str().unwrap();

    let result = run_summarize_with_args(&["summarize", path, "--total-time", "long"]);

    assert!(result.is_err_and(|err| err.to_string().starts_with("cannot parse total time from 'long'")));
}
