//! Optimizer worker that owns the catalog and engine.
//!
//! Receives commands from [`crate::OptimizerHandle`]. Filters run inline;
//! optimizations are moved to the blocking pool so a slow allocation never
//! delays the next command.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use planner_core::{
    AttackRatingEngine, FilterOptions, Optimizer, OptimizerConfig, OptimizerResult,
    StandardTwoHanding, Weapon, WeaponFilter,
};

use crate::api::{OptimizeRequest, Result, RuntimeError};
use crate::catalog::WeaponCatalog;

/// Commands that can be sent to the optimizer worker
pub enum Command {
    /// Optimize a build. `generation` is set for latest-wins requests.
    Optimize {
        request: OptimizeRequest,
        generation: Option<u64>,
        reply: oneshot::Sender<Result<OptimizerResult>>,
    },
    /// Filter the catalog.
    Filter {
        options: FilterOptions,
        reply: oneshot::Sender<Vec<Weapon>>,
    },
    /// Stop processing commands.
    Shutdown,
}

/// Background task that processes optimizer commands.
pub struct OptimizerWorker {
    catalog: Arc<WeaponCatalog>,
    engine: Arc<dyn AttackRatingEngine>,
    config: Arc<OptimizerConfig>,
    latest: Arc<AtomicU64>,
    command_rx: mpsc::Receiver<Command>,
}

impl OptimizerWorker {
    /// Creates a new optimizer worker.
    pub fn new(
        catalog: Arc<WeaponCatalog>,
        engine: Arc<dyn AttackRatingEngine>,
        config: Arc<OptimizerConfig>,
        latest: Arc<AtomicU64>,
        command_rx: mpsc::Receiver<Command>,
    ) -> Self {
        Self {
            catalog,
            engine,
            config,
            latest,
            command_rx,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        debug!(
            target: "runtime::worker",
            weapons = self.catalog.len(),
            "optimizer worker started"
        );
        while let Some(cmd) = self.command_rx.recv().await {
            if let Command::Shutdown = cmd {
                break;
            }
            self.handle_command(cmd);
        }
        debug!(target: "runtime::worker", "optimizer worker stopped");
    }

    fn handle_command(&self, cmd: Command) {
        match cmd {
            Command::Optimize {
                request,
                generation,
                reply,
            } => self.spawn_optimize(request, generation, reply),
            Command::Filter { options, reply } => {
                let _ = reply.send(self.filter(&options));
            }
            Command::Shutdown => {}
        }
    }

    fn filter(&self, options: &FilterOptions) -> Vec<Weapon> {
        WeaponFilter::new(&self.config, &StandardTwoHanding)
            .filter(self.catalog.weapons(), options)
            .into_iter()
            .cloned()
            .collect()
    }

    fn spawn_optimize(
        &self,
        request: OptimizeRequest,
        generation: Option<u64>,
        reply: oneshot::Sender<Result<OptimizerResult>>,
    ) {
        // Stale before it even started: skip the work.
        if let Err(err) = check_current(&self.latest, generation) {
            let _ = reply.send(Err(err));
            return;
        }

        let input = match request.resolve(&self.catalog) {
            Ok(input) => input,
            Err(err) => {
                let _ = reply.send(Err(err));
                return;
            }
        };

        let engine = Arc::clone(&self.engine);
        let config = Arc::clone(&self.config);
        let latest = Arc::clone(&self.latest);

        tokio::spawn(async move {
            let outcome = tokio::task::spawn_blocking(move || {
                Optimizer::new(engine.as_ref(), config.as_ref()).optimize(&input)
            })
            .await;

            let result = match outcome {
                Ok(result) => result.map_err(RuntimeError::from),
                Err(join) => Err(RuntimeError::WorkerJoin(join)),
            };
            let result = result.and_then(|value| {
                check_current(&latest, generation)?;
                Ok(value)
            });

            if let Err(RuntimeError::Superseded { generation, latest }) = &result {
                debug!(
                    target: "runtime::worker",
                    generation,
                    latest,
                    "dropping superseded optimization result"
                );
            }
            let _ = reply.send(result);
        });
    }
}

/// Fails with [`RuntimeError::Superseded`] when a newer latest-wins request
/// has been issued since `generation`.
fn check_current(latest: &AtomicU64, generation: Option<u64>) -> Result<()> {
    let Some(generation) = generation else {
        return Ok(());
    };
    let latest = latest.load(Ordering::SeqCst);
    if latest != generation {
        return Err(RuntimeError::Superseded { generation, latest });
    }
    Ok(())
}
