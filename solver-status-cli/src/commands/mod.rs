pub mod report;
pub mod summarize;

use clap::{Arg, ArgAction, ArgMatches};
use solver_status::config::{ReportConfig, read_config};
use solver_status::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::fmt::Display;
use std::str::FromStr;

const CONFIG_ARG_NAME: &str = "config";
const OPTIMUM_ARG_NAME: &str = "optimum";
const PROBLEM_TYPE_ARG_NAME: &str = "problem-type";
const OPTIMIZE_PENALTY_ARG_NAME: &str = "optimize-penalty";

fn open_file(path: &str, description: &str) -> GenericResult<File> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'").into())
}

/// Parses an optional argument value, reporting the argument description on failure.
fn parse_value<T>(matches: &ArgMatches, arg_name: &str, arg_desc: &str) -> GenericResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(arg) = matches.get_one::<String>(arg_name) else {
        return Ok(None);
    };

    arg.parse::<T>().map(Some).map_err(|err| format!("cannot parse {arg_desc} from '{arg}': '{err}'").into())
}

/// Returns arguments shared by all commands which build a report context.
fn get_context_args() -> Vec<Arg> {
    vec![
        Arg::new(CONFIG_ARG_NAME)
            .help("Specifies path to the json file with reporting configuration")
            .short('c')
            .long(CONFIG_ARG_NAME)
            .required(false),
        Arg::new(OPTIMUM_ARG_NAME)
            .help("Specifies best known or target objective value")
            .short('o')
            .long(OPTIMUM_ARG_NAME)
            .allow_negative_numbers(true)
            .required(false),
        Arg::new(PROBLEM_TYPE_ARG_NAME)
            .help("Specifies problem type, e.g. TSP or MSCTSP")
            .short('t')
            .long(PROBLEM_TYPE_ARG_NAME)
            .required(false),
        Arg::new(OPTIMIZE_PENALTY_ARG_NAME)
            .help("Computes gap against penalty instead of cost")
            .long(OPTIMIZE_PENALTY_ARG_NAME)
            .action(ArgAction::SetTrue),
    ]
}

/// Reads config file, if specified, and overrides its values with command line arguments.
fn get_config(matches: &ArgMatches, penalty: Option<Cost>) -> GenericResult<ReportConfig> {
    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => ReportConfig::default(),
    };

    if let Some(optimum) = parse_value::<Cost>(matches, OPTIMUM_ARG_NAME, "optimum")? {
        config.optimum = Some(optimum);
    }

    if let Some(problem_type) = matches.get_one::<String>(PROBLEM_TYPE_ARG_NAME) {
        config.problem_type = Some(problem_type.clone());
    }

    let optimize_penalty = matches.get_flag(OPTIMIZE_PENALTY_ARG_NAME);
    if penalty.is_some() || optimize_penalty {
        let penalty_config = config.penalty.get_or_insert_with(Default::default);
        if penalty.is_some() {
            penalty_config.current = penalty;
        }
        if optimize_penalty {
            penalty_config.optimize = Some(true);
        }
    }

    Ok(config)
}
