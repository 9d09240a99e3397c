//! Contains the logic to report solver progress as human readable status lines.

#[cfg(test)]
#[path = "../../tests/unit/reporting/context_test.rs"]
mod context_test;

mod problem_type;
pub use self::problem_type::ProblemType;

mod statistics;
pub use self::statistics::{RunRecord, RunStatistics};

mod status;
pub use self::status::*;

use crate::utils::Cost;
use std::cmp::Ordering;

/// Specifies a best known or target objective value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Optimum {
    /// No optimum is available.
    #[default]
    Unknown,
    /// Optimum value is known.
    Known(Cost),
}

impl Optimum {
    /// Returns true if optimum value is known.
    pub fn is_known(&self) -> bool {
        matches!(self, Optimum::Known(_))
    }

    /// Returns true if optimum is known and equal to zero.
    pub fn is_zero(&self) -> bool {
        matches!(self, Optimum::Known(0))
    }

    /// Returns the optimum value, if known.
    pub fn value(&self) -> Option<Cost> {
        match self {
            Optimum::Known(value) => Some(*value),
            Optimum::Unknown => None,
        }
    }

    /// Returns a value usable as a gap denominator.
    ///
    /// NOTE: a known optimum of zero disables gap reporting the same way as an unknown optimum does,
    /// even though zero is a valid objective value.
    pub fn gap_base(&self) -> Option<Cost> {
        self.value().filter(|value| *value != 0)
    }

    /// Compares given value against optimum. Unknown optimum behaves as negative infinity.
    pub fn compare(&self, value: Cost) -> Ordering {
        match self {
            Optimum::Known(optimum) => value.cmp(optimum),
            Optimum::Unknown => Ordering::Greater,
        }
    }
}

impl From<Option<Cost>> for Optimum {
    fn from(value: Option<Cost>) -> Self {
        value.map_or(Optimum::Unknown, Optimum::Known)
    }
}

/// Specifies whether constraint violation is tracked within reported solutions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportMode {
    /// Only cost is tracked.
    #[default]
    Plain,
    /// Cost is accompanied by a penalty for constraint violation.
    Penalized {
        /// Current penalty value.
        current_penalty: Cost,
        /// If set, the gap is computed against the penalty instead of the cost.
        optimize_penalty: bool,
    },
}

/// Keeps solver state read by status reports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportContext {
    /// A report mode.
    pub mode: ReportMode,
    /// A best known or target objective value.
    pub optimum: Optimum,
    /// A type of the problem being solved.
    pub problem_type: ProblemType,
}

impl ReportContext {
    /// Creates a new instance of `ReportContext` without penalty tracking.
    pub fn new(optimum: Optimum) -> Self {
        Self { optimum, ..Self::default() }
    }

    /// Enables penalty tracking.
    pub fn with_penalty(mut self, current_penalty: Cost, optimize_penalty: bool) -> Self {
        self.mode = ReportMode::Penalized { current_penalty, optimize_penalty };
        self
    }

    /// Sets problem type.
    pub fn with_problem_type(mut self, problem_type: ProblemType) -> Self {
        self.problem_type = problem_type;
        self
    }

    /// Updates current penalty. Does nothing when penalty is not tracked.
    pub fn set_current_penalty(&mut self, penalty: Cost) {
        if let ReportMode::Penalized { current_penalty, .. } = &mut self.mode {
            *current_penalty = penalty;
        }
    }

    /// Returns current penalty, if penalty is tracked.
    pub fn current_penalty(&self) -> Option<Cost> {
        match self.mode {
            ReportMode::Penalized { current_penalty, .. } => Some(current_penalty),
            ReportMode::Plain => None,
        }
    }

    /// Returns true if penalty is tracked and optimized.
    pub fn is_penalty_optimized(&self) -> bool {
        matches!(self.mode, ReportMode::Penalized { optimize_penalty: true, .. })
    }
}
