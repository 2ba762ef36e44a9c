//! Worker tasks that back the runtime orchestration.

mod optimizer;

pub use optimizer::{Command, OptimizerWorker};
