//! # Runtime Lifecycle
//!
//! Starting, wiring and stopping the pieces of the order engine.
//!
//! - [`OrderSystem`] spawns the registry actor, builds the [`StatusScheduler`] and the
//!   [`OrderFactory`](crate::order_actor::OrderFactory) on top of it, and shuts all of
//!   it down again.
//! - [`StatusScheduler`] owns the per-order progression tasks.
//! - [`setup_tracing`] installs the log subscriber once per process.
//!
//! ## Shutdown Order
//!
//! Progression tasks each hold a registry client, so they are aborted first. Dropping
//! the remaining clients then closes the registry channel, the actor's loop ends, and
//! its task is awaited. Anything else still holding a client (e.g. a live router)
//! keeps the registry open, so stop serving before calling
//! [`OrderSystem::shutdown`].

pub mod order_system;
pub mod scheduler;
pub mod tracing;

pub use order_system::*;
pub use scheduler::*;
pub use tracing::*;
