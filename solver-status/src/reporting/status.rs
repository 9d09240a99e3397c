#[cfg(test)]
#[path = "../../tests/unit/reporting/status_test.rs"]
mod status_test;

use super::*;
use crate::utils::{Cost, Float, InfoLogger, TimeSource, elapsed_since};
use std::sync::Arc;

/// A trace level used when nothing else is specified.
pub const DEFAULT_TRACE_LEVEL: usize = 1;

/// Writes solver progress as status lines into the logger.
///
/// The reporter keeps no state between calls: everything which describes the solver state is
/// passed explicitly via `ReportContext`.
#[derive(Clone)]
pub struct StatusReporter {
    logger: InfoLogger,
    time_source: Arc<dyn TimeSource + Send + Sync>,
    trace_level: usize,
}

impl StatusReporter {
    /// Creates a new instance of `StatusReporter`.
    pub fn new(logger: InfoLogger, time_source: Arc<dyn TimeSource + Send + Sync>) -> Self {
        Self { logger, time_source, trace_level: DEFAULT_TRACE_LEVEL }
    }

    /// Sets trace level used to filter `trace` calls.
    pub fn with_trace_level(mut self, trace_level: usize) -> Self {
        self.trace_level = trace_level;
        self
    }

    /// Returns trace level.
    pub fn trace_level(&self) -> usize {
        self.trace_level
    }

    /// Returns current time of the underlying time source. Use it to capture entry time.
    pub fn now(&self) -> Float {
        self.time_source.now()
    }

    /// Formats a status line without writing it.
    pub fn format(&self, ctx: &ReportContext, cost: Cost, entry_time: Float, suffix: &str) -> String {
        format_status_line(ctx, cost, elapsed_since(self.time_source.as_ref(), entry_time), suffix)
    }

    /// Writes a status line for given cost.
    pub fn report(&self, ctx: &ReportContext, cost: Cost, entry_time: Float, suffix: &str) {
        (self.logger)(self.format(ctx, cost, entry_time, suffix).as_str())
    }

    /// Writes a status line only if given level does not exceed reporter's trace level.
    pub fn trace(&self, level: usize, ctx: &ReportContext, cost: Cost, entry_time: Float, suffix: &str) {
        if level <= self.trace_level {
            self.report(ctx, cost, entry_time, suffix)
        }
    }

    /// Writes summary of multiple runs. Total time is measured since `entry_time`.
    pub fn report_statistics(&self, ctx: &ReportContext, statistics: &RunStatistics, entry_time: Float) {
        let total_time = elapsed_since(self.time_source.as_ref(), entry_time);

        statistics.summary(ctx, total_time).iter().for_each(|line| (self.logger)(line.as_str()));
    }
}

/// Formats a status line using already measured elapsed time in seconds.
pub fn format_status_line(ctx: &ReportContext, cost: Cost, elapsed: Float, suffix: &str) -> String {
    let cost_field = match ctx.mode {
        ReportMode::Plain => format!("{cost}"),
        ReportMode::Penalized { current_penalty, .. } => format!("{current_penalty}_{cost}"),
    };

    let gap_field = gap_percent(ctx, cost).map(|gap| format!(", Gap = {gap:.4}%")).unwrap_or_default();

    let tail = match ctx.mode {
        ReportMode::Plain => format!("{suffix}{}", relation_marker(&ctx.optimum, cost)),
        ReportMode::Penalized { .. } => format!(" {suffix}"),
    };

    format!("Cost = {cost_field}{gap_field}, Time = {elapsed:.2} sec.{tail}")
}

/// Returns a gap to the optimum in percents or `None` when optimum is not usable.
pub fn gap_percent(ctx: &ReportContext, cost: Cost) -> Option<Float> {
    let optimum = ctx.optimum.gap_base()?;

    Some(match ctx.mode {
        ReportMode::Penalized { current_penalty, optimize_penalty: true } => {
            let sign = if ctx.problem_type.inverts_penalty_gap() { -1. } else { 1. };
            sign * percent_gap(current_penalty, optimum)
        }
        _ => percent_gap(cost, optimum),
    })
}

/// Returns a marker which shows how cost relates to the optimum: `"<"` when it is better,
/// `" ="` when it is equal and empty otherwise.
pub fn relation_marker(optimum: &Optimum, cost: Cost) -> &'static str {
    match optimum.compare(cost) {
        Ordering::Less => "<",
        Ordering::Equal => " =",
        Ordering::Greater => "",
    }
}

/// Returns `100 * (value - optimum) / optimum`. The difference is taken in a wider type to avoid overflow.
pub(crate) fn percent_gap(value: Cost, optimum: Cost) -> Float {
    let difference = (value as i128 - optimum as i128) as Float;

    100. * difference / optimum as Float
}
