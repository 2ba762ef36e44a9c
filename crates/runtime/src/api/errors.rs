//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, catalog lookups and the
//! optimizer itself so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use planner_core::{ConfigError, ErrorSeverity, OptimizeError, PlannerError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("optimizer worker command channel closed")]
    CommandChannelClosed,

    #[error("optimizer worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("optimizer worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires an attack rating engine before building")]
    MissingEngine,

    #[error("weapon catalog lists {0} more than once")]
    DuplicateWeapon(String),

    #[error("unknown weapon: {0}")]
    UnknownWeapon(String),

    #[error("request {generation} superseded by request {latest}")]
    Superseded { generation: u64, latest: u64 },

    #[error(transparent)]
    Optimize(#[from] OptimizeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RuntimeError {
    /// True when the request was dropped in favor of a newer one.
    pub fn is_superseded(&self) -> bool {
        matches!(self, RuntimeError::Superseded { .. })
    }
}

impl PlannerError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Superseded { .. } => ErrorSeverity::Recoverable,
            RuntimeError::UnknownWeapon(_) => ErrorSeverity::Validation,
            RuntimeError::Optimize(err) => err.severity(),
            RuntimeError::Config(err) => err.severity(),
            RuntimeError::MissingEngine | RuntimeError::DuplicateWeapon(_) => ErrorSeverity::Fatal,
            RuntimeError::CommandChannelClosed
            | RuntimeError::ReplyChannelClosed(_)
            | RuntimeError::WorkerJoin(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use RuntimeError::*;
        match self {
            CommandChannelClosed => "RUNTIME_COMMAND_CHANNEL_CLOSED",
            ReplyChannelClosed(_) => "RUNTIME_REPLY_CHANNEL_CLOSED",
            WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
            MissingEngine => "RUNTIME_MISSING_ENGINE",
            DuplicateWeapon(_) => "RUNTIME_DUPLICATE_WEAPON",
            UnknownWeapon(_) => "RUNTIME_UNKNOWN_WEAPON",
            Superseded { .. } => "RUNTIME_SUPERSEDED",
            Optimize(err) => err.error_code(),
            Config(err) => err.error_code(),
        }
    }
}
