//! A command line interface to print solver status lines and run summaries.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

mod commands;

mod cli {
    use super::commands::report::{get_report_app, run_report};
    use super::commands::summarize::{get_summarize_app, run_summarize};
    use clap::{ArgMatches, Command};
    use solver_status::utils::{InfoLogger, create_stdout_logger};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Solver Status")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to print solver status lines and run summaries")
            .subcommand(get_report_app())
            .subcommand(get_summarize_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        run_subcommand_with_logger(arg_matches, create_stdout_logger())
    }

    pub fn run_subcommand_with_logger(arg_matches: ArgMatches, logger: InfoLogger) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("report", report_matches)) => run_report(report_matches, logger),
            Some(("summarize", summarize_matches)) => run_summarize(summarize_matches, logger),
            _ => Err("no subcommand was used. Use -h to print help information.".into()),
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches);
}
