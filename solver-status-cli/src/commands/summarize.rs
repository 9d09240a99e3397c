#[cfg(test)]
#[path = "../../tests/unit/commands/summarize_test.rs"]
mod summarize_test;

use super::*;
use clap::Command;
use solver_status::config::{create_context_from_config, create_reporter_from_config, read_runs};
use std::sync::Arc;

const RUNS_ARG_NAME: &str = "RUNS";
const TOTAL_TIME_ARG_NAME: &str = "total-time";

pub fn get_summarize_app() -> Command {
    Command::new("summarize")
        .about("Prints statistics of multiple solver runs")
        .arg(Arg::new(RUNS_ARG_NAME).help("Sets the json file with run records").required(true).index(1))
        .arg(
            Arg::new(TOTAL_TIME_ARG_NAME)
                .help("Specifies total time in seconds. Default is sum of run times")
                .long(TOTAL_TIME_ARG_NAME)
                .required(false),
        )
        .args(get_context_args())
}

pub fn run_summarize(matches: &ArgMatches, logger: InfoLogger) -> GenericResult<()> {
    let runs_path = matches.get_one::<String>(RUNS_ARG_NAME).ok_or("runs file is not specified")?;
    let statistics = read_runs(BufReader::new(open_file(runs_path, "runs")?))?;

    let total_time = parse_value::<Float>(matches, TOTAL_TIME_ARG_NAME, "total time")?
        .unwrap_or_else(|| statistics.runs().iter().map(|run| run.time).sum());

    // penalty is tracked when at least one run has it
    let penalty = statistics.runs().iter().find_map(|run| run.penalty);

    let config = get_config(matches, penalty)?;
    let ctx = create_context_from_config(&config)?;
    let reporter = create_reporter_from_config(&config, logger, Arc::new(FixedClock::new(total_time)));

    reporter.report_statistics(&ctx, &statistics, 0.);

    Ok(())
}
