//! Cloneable façade for issuing commands to the optimizer worker.
//!
//! [`OptimizerHandle`] hides channel plumbing and offers async helpers for
//! optimizing builds and filtering the catalog.
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{mpsc, oneshot};

use planner_core::{FilterOptions, OptimizerResult, Weapon};

use super::errors::{Result, RuntimeError};
use super::request::OptimizeRequest;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct OptimizerHandle {
    command_tx: mpsc::Sender<Command>,
    latest: Arc<AtomicU64>,
}

impl OptimizerHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, latest: Arc<AtomicU64>) -> Self {
        Self { command_tx, latest }
    }

    /// Optimize a build. Every call produces a result.
    pub async fn optimize(&self, request: OptimizeRequest) -> Result<OptimizerResult> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Optimize {
                request,
                generation: None,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Optimize a build where only the most recent request matters.
    ///
    /// Interactive hosts call this on every input change. If another
    /// `optimize_latest` call is issued before this one completes, this one
    /// resolves to [`RuntimeError::Superseded`] instead of a stale result.
    pub async fn optimize_latest(&self, request: OptimizeRequest) -> Result<OptimizerResult> {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Optimize {
                request,
                generation: Some(generation),
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Filter the catalog.
    pub async fn filter(&self, options: FilterOptions) -> Result<Vec<Weapon>> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Filter {
                options,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Ask the worker to stop after the commands already queued.
    ///
    /// Requests already running on the blocking pool still complete.
    pub async fn shutdown(&self) -> Result<()> {
        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
