//! This module reimports a common used types.

pub use crate::reporting::Optimum;
pub use crate::reporting::ProblemType;
pub use crate::reporting::ReportContext;
pub use crate::reporting::ReportMode;
pub use crate::reporting::StatusReporter;
pub use crate::reporting::{RunRecord, RunStatistics};

pub use crate::utils::{Cost, Float};
pub use crate::utils::{FixedClock, SystemClock, TimeSource};
pub use crate::utils::{GenericError, GenericResult};
pub use crate::utils::{InfoLogger, create_silent_logger, create_stdout_logger, create_writer_logger};
