#[cfg(test)]
#[path = "../../tests/unit/reporting/statistics_test.rs"]
mod statistics_test;

use super::{ReportContext, gap_percent};
use crate::utils::{Cost, Float};
use serde::Deserialize;

/// Keeps an outcome of a single solver run.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    /// A best cost found within the run.
    pub cost: Cost,
    /// A penalty of the best solution, if penalty is tracked.
    #[serde(default)]
    pub penalty: Option<Cost>,
    /// Amount of trials made within the run.
    #[serde(default)]
    pub trials: usize,
    /// Run duration in seconds.
    #[serde(default)]
    pub time: Float,
}

/// Collects outcomes of multiple runs and summarizes them.
#[derive(Clone, Debug, Default)]
pub struct RunStatistics {
    runs: Vec<RunRecord>,
}

impl RunStatistics {
    /// Creates a new instance of `RunStatistics` from existing run records.
    pub fn new(runs: Vec<RunRecord>) -> Self {
        Self { runs }
    }

    /// Adds a run record.
    pub fn add(&mut self, run: RunRecord) {
        self.runs.push(run);
    }

    /// Returns all run records.
    pub fn runs(&self) -> &[RunRecord] {
        self.runs.as_slice()
    }

    /// Returns amount of runs which have reached the optimum.
    pub fn successes(&self, ctx: &ReportContext) -> usize {
        self.runs.iter().filter(|run| is_success(ctx, run)).count()
    }

    /// Returns summary lines. Min, average and max values are listed for every tracked metric.
    pub fn summary(&self, ctx: &ReportContext, total_time: Float) -> Vec<String> {
        let mut lines = vec![format!("Successes/Runs = {}/{}", self.successes(ctx), self.runs.len())];

        if !self.runs.is_empty() {
            let (min, avg, max) = get_cost_stats(self.runs.iter().map(|run| run.cost));
            lines.push(format!("Cost.min = {min}, Cost.avg = {avg:.2}, Cost.max = {max}"));

            let gaps = self.runs.iter().filter_map(|run| get_run_gap(ctx, run)).collect::<Vec<_>>();
            if let Some((min, avg, max)) = get_float_stats(gaps.into_iter()) {
                lines.push(format!("Gap.min = {min:.4}%, Gap.avg = {avg:.4}%, Gap.max = {max:.4}%"));
            }

            if ctx.current_penalty().is_some() && self.runs.iter().any(|run| run.penalty.is_some()) {
                let (min, avg, max) = get_cost_stats(self.runs.iter().filter_map(|run| run.penalty));
                lines.push(format!("Penalty.min = {min}, Penalty.avg = {avg:.2}, Penalty.max = {max}"));
            }

            let (min, avg, max) = get_cost_stats(self.runs.iter().map(|run| run.trials as Cost));
            lines.push(format!("Trials.min = {min}, Trials.avg = {avg:.1}, Trials.max = {max}"));

            if let Some((min, avg, max)) = get_float_stats(self.runs.iter().map(|run| run.time)) {
                lines.push(format!("Time.min = {min:.2} sec., Time.avg = {avg:.2} sec., Time.max = {max:.2} sec."));
            }
        }

        lines.push(format!("Time.total = {total_time:.2} sec."));

        lines
    }
}

/// Returns a context as it was when the run finished: the run's own penalty replaces the current one.
fn get_run_context(ctx: &ReportContext, run: &RunRecord) -> ReportContext {
    let mut run_ctx = ctx.clone();
    if let Some(penalty) = run.penalty {
        run_ctx.set_current_penalty(penalty);
    }

    run_ctx
}

fn is_success(ctx: &ReportContext, run: &RunRecord) -> bool {
    let Some(optimum) = ctx.optimum.value() else {
        return false;
    };

    let run_ctx = get_run_context(ctx, run);

    match run_ctx.current_penalty() {
        Some(penalty) if run_ctx.is_penalty_optimized() => {
            if run_ctx.problem_type.inverts_penalty_gap() { penalty >= optimum } else { penalty <= optimum }
        }
        _ => run.cost <= optimum,
    }
}

fn get_run_gap(ctx: &ReportContext, run: &RunRecord) -> Option<Float> {
    gap_percent(&get_run_context(ctx, run), run.cost)
}

/// Returns min, average and max of non-empty sequence of integral values.
fn get_cost_stats(values: impl Iterator<Item = Cost>) -> (Cost, Float, Cost) {
    let (min, max, sum, count) = values.fold((Cost::MAX, Cost::MIN, 0_i128, 0_usize), |(min, max, sum, count), v| {
        (min.min(v), max.max(v), sum + v as i128, count + 1)
    });

    if count == 0 { (0, 0., 0) } else { (min, sum as Float / count as Float, max) }
}

fn get_float_stats(values: impl Iterator<Item = Float>) -> Option<(Float, Float, Float)> {
    let (min, max, sum, count) = values
        .fold((Float::MAX, Float::MIN, 0., 0_usize), |(min, max, sum, count), v| {
            (min.min(v), max.max(v), sum + v, count + 1)
        });

    (count > 0).then(|| (min, sum / count as Float, max))
}
