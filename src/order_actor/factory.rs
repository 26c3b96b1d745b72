//! Turns a caller's [`PlaceOrder`] request into a stored, progressing order.

use crate::clients::OrderClient;
use crate::lifecycle::StatusScheduler;
use crate::model::{Menu, OrderCreate, OrderId, PlaceOrder};
use crate::order_actor::OrderError;
use std::sync::Arc;
use tracing::{debug, info, instrument};

pub const DEFAULT_SIZE: &str = "regular";
pub const DEFAULT_QUANTITY: i64 = 1;

/// Validates requests against the menu, registers them, and starts their progression.
#[derive(Clone)]
pub struct OrderFactory {
    orders: OrderClient,
    menu: Arc<Menu>,
    scheduler: StatusScheduler,
}

impl OrderFactory {
    pub fn new(orders: OrderClient, menu: Arc<Menu>, scheduler: StatusScheduler) -> Self {
        Self {
            orders,
            menu,
            scheduler,
        }
    }

    /// Places an order and returns its id.
    ///
    /// An unknown menu item is rejected before the registry is touched, so no id is
    /// allocated for it. The progression task is running by the time this returns.
    #[instrument(skip(self, request), fields(item = request.id))]
    pub async fn place_order(&self, request: PlaceOrder) -> Result<OrderId, OrderError> {
        let params = self.prepare(request)?;
        debug!(?params, "Order validated");

        let order_id = self.orders.insert(params).await?;
        self.scheduler.start(order_id);
        info!(%order_id, "Order placed");
        Ok(order_id)
    }

    /// Validates and normalizes a request without registering it.
    pub fn prepare(&self, request: PlaceOrder) -> Result<OrderCreate, OrderError> {
        let item = u32::try_from(request.id)
            .ok()
            .and_then(|id| self.menu.find(id))
            .ok_or(OrderError::PizzaNotAvailable(request.id))?;

        Ok(OrderCreate {
            pizza_type: item.name.clone(),
            size: normalize_size(request.size),
            quantity: normalize_quantity(request.quantity),
            address: request.address,
        })
    }
}

/// Lower-cases the size; missing or empty means `regular`. Unknown sizes pass through.
fn normalize_size(size: Option<String>) -> String {
    match size {
        Some(size) if !size.is_empty() => size.to_lowercase(),
        _ => DEFAULT_SIZE.to_string(),
    }
}

/// Missing or zero means 1. Negative quantities are kept as given.
fn normalize_quantity(quantity: Option<i64>) -> i64 {
    match quantity {
        Some(0) | None => DEFAULT_QUANTITY,
        Some(quantity) => quantity,
    }
}
