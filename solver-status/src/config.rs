//! Reporting configuration.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::reporting::*;
use crate::utils::{Cost, GenericResult, InfoLogger, TimeSource};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A reporting configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    /// Best known or target objective value. Unknown if not specified.
    pub optimum: Option<Cost>,
    /// A problem type name, e.g. "TSP" or "MSCTSP". Default is TSP.
    pub problem_type: Option<String>,
    /// Specifies penalty tracking. Penalty is not tracked if not specified.
    pub penalty: Option<PenaltyConfig>,
    /// Specifies trace level. Default is 1.
    pub trace_level: Option<usize>,
}

/// A penalty tracking configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyConfig {
    /// Current penalty value. Default is 0.
    pub current: Option<Cost>,
    /// Specifies whether gap is computed against penalty. Default is false.
    pub optimize: Option<bool>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<ReportConfig> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a report context from config.
pub fn create_context_from_config(config: &ReportConfig) -> GenericResult<ReportContext> {
    let problem_type = config.problem_type.as_deref().map(str::parse::<ProblemType>).transpose()?.unwrap_or_default();

    let ctx = ReportContext::new(config.optimum.into()).with_problem_type(problem_type);

    Ok(match &config.penalty {
        Some(PenaltyConfig { current, optimize }) => {
            ctx.with_penalty(current.unwrap_or_default(), optimize.unwrap_or(false))
        }
        None => ctx,
    })
}

/// Creates a status reporter from config.
pub fn create_reporter_from_config(
    config: &ReportConfig,
    logger: InfoLogger,
    time_source: Arc<dyn TimeSource + Send + Sync>,
) -> StatusReporter {
    StatusReporter::new(logger, time_source).with_trace_level(config.trace_level.unwrap_or(DEFAULT_TRACE_LEVEL))
}

/// Reads run records stored as a json array.
pub fn read_runs<R: Read>(reader: BufReader<R>) -> GenericResult<RunStatistics> {
    serde_json::from_reader::<_, Vec<RunRecord>>(reader)
        .map(RunStatistics::new)
        .map_err(|err| format!("cannot deserialize runs: '{err}'").into())
}
