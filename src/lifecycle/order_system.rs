use crate::clients::OrderClient;
use crate::config::SchedulerConfig;
use crate::lifecycle::StatusScheduler;
use crate::model::Menu;
use crate::order_actor::OrderFactory;
use std::sync::Arc;
use tracing::{error, info};

/// The running order engine.
///
/// Owns the registry actor task and hands out the two entry points callers need:
/// - [`OrderSystem::orders`] for status queries,
/// - [`OrderSystem::factory`] for placing orders.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(Arc::new(Menu::bundled()?), SchedulerConfig::default());
///
/// let order_id = system.factory.place_order(request).await?;
/// let order = system.orders.order_status(order_id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Registry client for queries.
    pub orders: OrderClient,

    /// Validates and places new orders.
    pub factory: OrderFactory,

    /// The menu orders are validated against.
    pub menu: Arc<Menu>,

    scheduler: StatusScheduler,

    /// Task handle of the registry actor (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns the registry actor and wires the scheduler and factory to it.
    pub fn new(menu: Arc<Menu>, config: SchedulerConfig) -> Self {
        let (order_actor, generic_client) = crate::order_actor::new();
        let order_handle = tokio::spawn(order_actor.run());

        let orders = OrderClient::new(generic_client);
        let scheduler = StatusScheduler::new(orders.clone(), config);
        let factory = OrderFactory::new(orders.clone(), menu.clone(), scheduler.clone());

        Self {
            orders,
            factory,
            menu,
            scheduler,
            handles: vec![order_handle],
        }
    }

    /// Progression tasks that are still running.
    pub fn in_flight(&self) -> usize {
        self.scheduler.in_flight()
    }

    /// Stops progression, closes the registry, and waits for the actor to exit.
    ///
    /// Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order system...");

        self.scheduler.shutdown().await;

        drop(self.factory);
        drop(self.scheduler);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Order system shutdown complete.");
        Ok(())
    }
}
