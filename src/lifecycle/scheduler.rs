//! # Status Progression
//!
//! Every placed order gets one background task that walks it through
//! [`Status::LIFECYCLE`]: sleep one interval, apply the next status, repeat. The task
//! talks to the registry only through [`OrderClient`], one request per step, so it
//! never holds the registry while it sleeps.
//!
//! A task ends when:
//! - the last status has been applied,
//! - the registry reports the order as missing, or has shut down (silently), or
//! - the registry rejects a step (logged).
//!
//! Nobody awaits a progression task. They are kept in a [`JoinSet`] only so that
//! [`StatusScheduler::shutdown`] can abort whatever is still in flight.

use crate::clients::OrderClient;
use crate::config::SchedulerConfig;
use crate::model::{OrderId, Status};
use crate::order_actor::OrderError;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinSet;
use tracing::{debug, info, info_span, warn, Instrument};

/// Launches and tracks per-order progression tasks.
#[derive(Clone)]
pub struct StatusScheduler {
    orders: OrderClient,
    config: SchedulerConfig,
    tasks: Arc<Mutex<JoinSet<()>>>,
}

impl StatusScheduler {
    pub fn new(orders: OrderClient, config: SchedulerConfig) -> Self {
        Self {
            orders,
            config,
            tasks: Arc::new(Mutex::new(JoinSet::new())),
        }
    }

    /// Starts the progression task for `order_id` and returns immediately.
    pub fn start(&self, order_id: OrderId) {
        let task = progress(self.orders.clone(), order_id, self.config.clone())
            .instrument(info_span!("progression", %order_id));

        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        // reap finished tasks so the set only grows with live ones
        while tasks.try_join_next().is_some() {}
        tasks.spawn(task);
    }

    /// Number of progression tasks that have not finished yet.
    pub fn in_flight(&self) -> usize {
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        while tasks.try_join_next().is_some() {}
        tasks.len()
    }

    /// Aborts every progression task still running and waits for them to unwind.
    pub async fn shutdown(&self) {
        let mut tasks = {
            let mut guard = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *guard)
        };
        let aborted = tasks.len();
        tasks.shutdown().await;
        info!(aborted, "Progression tasks stopped");
    }
}

/// Walks one order through the lifecycle.
///
/// Starts at `preparing`; with `replay_initial_status` it first re-applies `created`,
/// so every later step lands one interval later.
pub async fn progress(orders: OrderClient, order_id: OrderId, config: SchedulerConfig) {
    let mut next = if config.replay_initial_status {
        Some(Status::Created)
    } else {
        Status::Created.next()
    };

    while let Some(status) = next {
        tokio::time::sleep(config.interval).await;

        match orders.advance_status(order_id, status).await {
            Ok(applied) => debug!(status = %applied, "Status advanced"),
            Err(OrderError::NotFound(_)) => {
                debug!("Order no longer exists, stopping");
                return;
            }
            Err(OrderError::ActorCommunicationError(reason)) => {
                debug!(%reason, "Registry unavailable, stopping");
                return;
            }
            Err(e) => {
                warn!(error = %e, "Status change rejected, stopping");
                return;
            }
        }
        next = status.next();
    }

    info!("Lifecycle complete");
}
