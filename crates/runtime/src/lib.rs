//! Async host shell around the synchronous planner core.
//!
//! The runtime owns a read-only weapon catalog and an attack rating engine,
//! and serves optimization and filter requests from a background worker.
//! Optimizations run on tokio's blocking pool so callers on async tasks are
//! never stalled by a long allocation.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the builder and the owning [`OptimizerRuntime`]
//! - [`api`] exposes the types downstream clients interact with
//! - [`catalog`] indexes the weapon collection by name
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod catalog;
pub mod runtime;

mod workers;

pub use api::{OptimizeRequest, OptimizerHandle, Result, RuntimeError};
pub use catalog::WeaponCatalog;
pub use runtime::{OptimizerRuntime, RuntimeBuilder, RuntimeConfig};
