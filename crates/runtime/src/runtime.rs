//! High-level runtime orchestrator.
//!
//! The runtime owns the optimizer worker, wires up its command channel, and
//! exposes a builder-based API for hosts.

use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use planner_core::{AttackRatingEngine, OptimizerConfig, Weapon};

use crate::api::{OptimizerHandle, Result, RuntimeError};
use crate::catalog::WeaponCatalog;
use crate::workers::{Command, OptimizerWorker};

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub optimizer: OptimizerConfig,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            optimizer: OptimizerConfig::default(),
            command_buffer_size: 32,
        }
    }
}

/// Owns the optimizer worker.
///
/// [`OptimizerHandle`] provides a cloneable façade for clients.
pub struct OptimizerRuntime {
    handle: OptimizerHandle,
    catalog: Arc<WeaponCatalog>,
    worker_handle: JoinHandle<()>,
}

impl OptimizerRuntime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> OptimizerHandle {
        self.handle.clone()
    }

    pub fn catalog(&self) -> &WeaponCatalog {
        &self.catalog
    }

    /// Stop the worker and wait for it to exit.
    pub async fn shutdown(self) -> Result<()> {
        // The worker may already be gone if a handle shut it down first.
        let _ = self.handle.shutdown().await;
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`OptimizerRuntime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    weapons: Vec<Weapon>,
    engine: Option<Arc<dyn AttackRatingEngine>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            weapons: Vec::new(),
            engine: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the optimizer tuning
    pub fn optimizer_config(mut self, config: OptimizerConfig) -> Self {
        self.config.optimizer = config;
        self
    }

    /// Weapons served by the runtime
    pub fn catalog(mut self, weapons: impl IntoIterator<Item = Weapon>) -> Self {
        self.weapons = weapons.into_iter().collect();
        self
    }

    /// Set required attack rating engine
    pub fn engine(mut self, engine: impl AttackRatingEngine + 'static) -> Self {
        self.engine = Some(Arc::new(engine));
        self
    }

    /// Set required attack rating engine from a shared instance
    pub fn shared_engine(mut self, engine: Arc<dyn AttackRatingEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Build the runtime and spawn its worker on the current tokio runtime.
    pub async fn build(self) -> Result<OptimizerRuntime> {
        let engine = self.engine.ok_or(RuntimeError::MissingEngine)?;
        self.config.optimizer.validate()?;

        let catalog = Arc::new(WeaponCatalog::new(self.weapons)?);
        let latest = Arc::new(AtomicU64::new(0));

        let buffer = self.config.command_buffer_size.max(1);
        let (command_tx, command_rx) = mpsc::channel::<Command>(buffer);
        let handle = OptimizerHandle::new(command_tx, Arc::clone(&latest));

        let worker = OptimizerWorker::new(
            Arc::clone(&catalog),
            engine,
            Arc::new(self.config.optimizer),
            latest,
            command_rx,
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(OptimizerRuntime {
            handle,
            catalog,
            worker_handle,
        })
    }
}
