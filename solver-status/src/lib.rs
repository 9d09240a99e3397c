//! This crate provides building blocks to report progress of an iterative solver for combinatorial
//! optimization problems.
//!
//! A status line summarizes a cost of the current solution, an optional penalty for constraint
//! violation, a gap to the best known optimum and elapsed time:
//!
//! ```
//! use solver_status::prelude::*;
//! use std::sync::Arc;
//!
//! let reporter = StatusReporter::new(create_silent_logger(), Arc::new(FixedClock::new(1.2345)));
//! let ctx = ReportContext::new(Optimum::Known(90));
//!
//! assert_eq!(reporter.format(&ctx, 100, 0., ""), "Cost = 100, Gap = 11.1111%, Time = 1.23 sec.");
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod config;
pub mod prelude;
pub mod reporting;
pub mod utils;
