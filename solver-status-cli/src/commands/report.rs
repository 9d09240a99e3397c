#[cfg(test)]
#[path = "../../tests/unit/commands/report_test.rs"]
mod report_test;

use super::*;
use clap::Command;
use solver_status::config::{create_context_from_config, create_reporter_from_config};
use std::sync::Arc;

const COST_ARG_NAME: &str = "cost";
const PENALTY_ARG_NAME: &str = "penalty";
const ELAPSED_ARG_NAME: &str = "elapsed";
const SUFFIX_ARG_NAME: &str = "suffix";

pub fn get_report_app() -> Command {
    Command::new("report")
        .about("Prints a status line for the given solution cost")
        .arg(
            Arg::new(COST_ARG_NAME)
                .help("Specifies cost of the solution")
                .long(COST_ARG_NAME)
                .allow_negative_numbers(true)
                .required(true),
        )
        .arg(
            Arg::new(PENALTY_ARG_NAME)
                .help("Specifies current penalty, enables penalty tracking")
                .short('p')
                .long(PENALTY_ARG_NAME)
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new(ELAPSED_ARG_NAME)
                .help("Specifies elapsed time in seconds")
                .short('e')
                .long(ELAPSED_ARG_NAME)
                .allow_negative_numbers(true)
                .default_value("0")
                .required(false),
        )
        .arg(
            Arg::new(SUFFIX_ARG_NAME)
                .help("Specifies text appended to the status line")
                .short('s')
                .long(SUFFIX_ARG_NAME)
                .allow_hyphen_values(true)
                .required(false),
        )
        .args(get_context_args())
}

pub fn run_report(matches: &ArgMatches, logger: InfoLogger) -> GenericResult<()> {
    let cost = parse_value::<Cost>(matches, COST_ARG_NAME, "cost")?.ok_or("cost is not specified")?;
    let penalty = parse_value::<Cost>(matches, PENALTY_ARG_NAME, "penalty")?;
    let elapsed = parse_value::<Float>(matches, ELAPSED_ARG_NAME, "elapsed time")?.unwrap_or(0.);
    let suffix = matches.get_one::<String>(SUFFIX_ARG_NAME).map(String::as_str).unwrap_or_default();

    let config = get_config(matches, penalty)?;
    let ctx = create_context_from_config(&config)?;
    let reporter = create_reporter_from_config(&config, logger, Arc::new(FixedClock::new(elapsed)));

    reporter.report(&ctx, cost, 0., suffix);

    Ok(())
}
